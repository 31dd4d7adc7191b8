/// Component domain layer: application access, module resolution, summaries.
pub mod errors;
pub mod fs;
pub mod source;

pub use errors::ComponentError;
pub use fs::FsSource;
pub use source::{Component, ComponentSource, Module, Summary};
