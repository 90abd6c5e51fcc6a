mod dictionary;
mod storage;

pub use dictionary::{AddOutcome, PersonalDictionary, StoreError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
