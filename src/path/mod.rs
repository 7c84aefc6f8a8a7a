//! Paths found by a search, and how they are traced back from a goal.

mod generic_path;
pub use generic_path::Path;

mod retrace;
pub use retrace::retrace;

/// The type used for all path costs
pub type Cost = usize;
