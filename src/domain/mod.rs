//! Domain layer for logplex-drain.
//!
//! Contains the types shared across the parser and the assembler:
//! - `Record`: a decoded Logplex syslog message
//! - `Facility` / `Priority`: the fixed syslog lookup tables
//! - `DrainError`: batch-level error type

pub mod error;
pub mod record;
pub mod severity;

pub use error::DrainError;
pub use record::Record;
pub use severity::{Facility, Priority};
