//! CLI argument parsing for the activity guide.

mod args;

pub use args::{Args, OutputMode, VERSION};
