//! Application layer: the session loop and its helpers.
//! - session: phase sequencing and the main loop
//! - timers: autosave and status-line cadence
//! - errors: the per-iteration error step

pub mod errors;
pub mod session;
pub mod timers;

pub use errors::{ErrorProcessor, ErrorVerdict};
pub use session::{Session, SessionPhase, TickOutcome};
pub use timers::PeriodicTimer;
