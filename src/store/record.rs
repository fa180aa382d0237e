//! Generic flat-file record store.
//!
//! Each module persists its records as one JSON document in the user-scoped
//! application-data directory. There is no indexing and no query language;
//! callers load the whole document, filter or mutate it in memory, and save
//! it back. The store is not designed for concurrent writers: two processes
//! writing simultaneously is last-write-wins.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::Error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::marker::PhantomData;
use std::path::PathBuf;

pub struct RecordStore<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Resolves the store file inside the application data directory.
    pub fn new(file_name: &str) -> Result<Self, Error> {
        let path = DataStorage::new().get_path(file_name)?;
        Ok(RecordStore { path, _marker: PhantomData })
    }

    /// Loads the full document. A missing file yields the default (empty)
    /// document so first runs need no setup step.
    pub fn load(&self) -> Result<T, Error> {
        if !self.path.exists() {
            return Ok(T::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Rewrites the document as pretty JSON.
    pub fn save(&self, document: &T) -> Result<(), Error> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, document)?;
        Ok(())
    }
}
