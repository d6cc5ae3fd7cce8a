//! Era domain models.
//!
//! Roster entities (what gets scheduled) and the generated era structure
//! (what the engine returns).
//!
//! # Domain Mappings
//!
//! | era-schedule | Tournament | League |
//! |--------------|------------|--------|
//! | Spirit | Player | Team |
//! | Board | Table / Court | Venue |
//! | Layout | Map | Ruleset |
//! | Incursion | Match | Fixture |
//! | Period | Round | Matchday |
//! | Era | Tournament | Season |

mod board;
mod era;
mod layout;
mod pairing;
mod spirit;

pub use board::Board;
pub use era::{Era, Incursion, Period};
pub use layout::Layout;
pub use pairing::{Pairing, Round};
pub use spirit::Spirit;
