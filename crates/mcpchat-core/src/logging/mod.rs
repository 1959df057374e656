//! Logging abstractions

mod console;
mod noop;
mod traits;

pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
pub use traits::{Logger, SharedLogger};
