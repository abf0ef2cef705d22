//! Site output - page template and static file writer

pub mod template;
pub mod writer;

pub use writer::{SiteWriter, WriteError, WriteOutcome};
