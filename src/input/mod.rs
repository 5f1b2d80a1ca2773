//! Input Module - Timed hidden-line input
//!
//! - **Keys** - Key type, the `KeySource` seam, crossterm conversion
//! - **Echo** - Scoped echo suppression (raw mode guard)
//! - **Deadline** - Single-shot timer thread that flips a flag
//! - **Reader** - Line editing under a deadline

mod deadline;
mod echo;
mod keys;
mod reader;

pub use deadline::Deadline;
pub use echo::EchoGuard;
pub use keys::{convert_key_event, Key, KeySource, TerminalKeys};
pub use reader::{HiddenReader, InputOutcome, DEFAULT_POLL_INTERVAL};
