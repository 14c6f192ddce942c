//! User-facing terminal output.

pub mod formatter;

pub use formatter::{display_error, display_status, display_success};
