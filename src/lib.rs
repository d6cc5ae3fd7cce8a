//! Balanced round-robin era generation.
//!
//! Produces an "era": a schedule in which every spirit meets every other
//! spirit exactly once, each incursion gets two distinct boards with exactly
//! even board usage, and layouts rotate from period to period. All
//! presentation order is randomized from a single seed, so an era can always
//! be regenerated byte for byte.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Spirit`, `Board`, `Layout`, `Pairing`,
//!   `Incursion`, `Period`, `Era`
//! - **`engine`**: Round-robin, board balancing, layout rotation, assembly,
//!   fairness summary
//! - **`validation`**: Input integrity checks (blank and duplicate IDs)
//! - **`sink`**: Destinations for finished eras (memory, JSON directory tree)
//! - **`roster`** / **`config`**: TOML inputs for the `era` binary
//!
//! # Example
//!
//! ```
//! use era_schedule::engine::{assemble, EraRequest, EraSummary};
//! use era_schedule::sink::{publish, MemorySink};
//!
//! let request = EraRequest::new(
//!     ["A", "B", "C", "D"],
//!     ["r1", "r2", "r3", "r4"],
//!     ["L1", "L2"],
//! )
//! .with_seed(1);
//!
//! let era = assemble(&request).unwrap();
//! assert!(EraSummary::calculate(&era).is_complete_round_robin(4));
//!
//! let mut sink = MemorySink::new();
//! publish(&era, "e01", &mut sink).unwrap();
//! ```
//!
//! # References
//!
//! - Kirkman (1847), "On a Problem in Combinations"
//! - de Werra (1981), "Scheduling in Sports"

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod roster;
pub mod sink;
pub mod validation;

pub use error::{InputKind, LoadError, ScheduleError, SinkError};
