pub mod error;
pub mod sorter;
pub mod walk;

pub use error::SortError;
pub use sorter::{FileSorter, SortOutcome};
