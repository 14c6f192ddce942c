pub mod commits;
pub mod config;
pub mod domain;
pub mod error;
pub mod generate;
pub mod git;
pub mod history;
pub mod remote;
pub mod tags;
pub mod ui;

pub use error::{ChangelogError, Result};
