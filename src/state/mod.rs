//! Application state module

mod forms;
mod reveal;
mod submission;
mod validation;

pub use forms::*;
pub use reveal::*;
pub use submission::*;
pub use validation::*;
