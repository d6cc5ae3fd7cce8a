//! Era generation engine.
//!
//! Builds a complete, balanced era from three identifier pools and a seed.
//!
//! # Components
//!
//! - [`circle_rounds`]: complete round-robin by the circle method
//! - [`assign_boards`]: board pairs with exactly even usage
//! - [`rotate_layouts`]: per-period layout rotation
//! - [`assemble`]: orchestration and seeded shuffling
//! - [`EraSummary`]: fairness metrics of a finished era
//!
//! # Guarantees
//!
//! - Every spirit meets every other spirit exactly once.
//! - Every spirit plays exactly once per period.
//! - Every board is used the same number of times per period.
//! - The same request and seed always produce the same era.

mod assembler;
mod boards;
mod layouts;
mod round_robin;
mod summary;

pub use assembler::{assemble, assemble_with_rng, EraRequest};
pub use boards::{assign_boards, check_board_capacity};
pub use layouts::rotate_layouts;
pub use round_robin::circle_rounds;
pub use summary::EraSummary;
