//! Concatenates drawing-command paths, welding the second onto the first when
//! the first path ends exactly where the second one starts.

mod command;
mod draw_state;
mod error;
mod interop;
mod merge;
mod path;

#[cfg(test)]
mod test_utils;

pub use crate::command::PathCommand;
pub use crate::error::PathError;
pub use crate::merge::{MergeOptions, MergeOutcome};
pub use crate::path::Path;
pub use lyon::math::{point, Point};
pub use shared::Tolerance;
