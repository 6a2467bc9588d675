pub mod form;
pub mod store;

pub use store::{ProfileStore, SharedProfileStore};
