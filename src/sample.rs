//! Training records and the flat-file readers that produce them.

// Provides record struct.
pub(crate) mod record;
// Provides the record store.
pub(crate) mod record_store;
// Provides a struct that reads flat files.
pub(crate) mod reader;


pub use record::Record;
pub use record_store::RecordStore;
pub use reader::RecordReader;
