pub mod memory;

pub use memory::{new_record_id, Record, RecordStore, StoreError};
