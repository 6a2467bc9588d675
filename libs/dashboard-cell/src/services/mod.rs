pub mod summary;

pub use summary::build_summary;
