//! Output formats for collected content
//!
//! - `aggregate` - the plain-text snapshot file

mod aggregate;

pub use aggregate::{AggregateWriter, DELIMITER_WIDTH, TOOL_NAME};
