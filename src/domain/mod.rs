//! Domain model - pure data and parsing rules independent of git

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::Commit;
pub use tag::{clean_tag, compare_desc};
pub use version::Version;
