pub mod models;
pub mod notes;
pub mod package;

pub use notes::{build_all, build_note};
pub use package::assemble;
