//! In-memory remote store adapter.
//!
//! Implements [`RemoteStore`] over a path-keyed map.  Used by the host
//! simulation and the tests in place of the real document store.
//!
//! Failure injection: [`fail_next`](MemoryStore::fail_next) queues an
//! error for the next call of a given operation, so error paths can be
//! exercised deterministically.

use std::collections::{BTreeMap, VecDeque};

use log::debug;
use serde_json::Value;

use crate::app::ports::{RemoteStore, StoreError};

/// Store operation, for failure injection and call accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Exists,
    Get,
    Set,
    Delete,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: BTreeMap<String, Value>,
    faults: VecDeque<(StoreOp, StoreError)>,
    calls: Vec<(StoreOp, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a document directly, as an external writer would.
    pub fn insert(&mut self, path: &str, doc: Value) {
        self.docs.insert(path.to_string(), doc);
    }

    /// Document currently stored at `path`.
    pub fn document(&self, path: &str) -> Option<&Value> {
        self.docs.get(path)
    }

    /// Make the next call of `op` fail with `error`.
    pub fn fail_next(&mut self, op: StoreOp, error: StoreError) {
        self.faults.push_back((op, error));
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> &[(StoreOp, String)] {
        &self.calls
    }

    /// Number of calls of `op` made so far.
    pub fn count(&self, op: StoreOp) -> usize {
        self.calls.iter().filter(|(o, _)| *o == op).count()
    }

    fn begin(&mut self, op: StoreOp, path: &str) -> Result<(), StoreError> {
        debug!("MemoryStore: {:?} {}", op, path);
        self.calls.push((op, path.to_string()));
        match self.faults.iter().position(|(o, _)| *o == op) {
            Some(i) => Err(self.faults.remove(i).map_or(StoreError::NotFound, |(_, e)| e)),
            None => Ok(()),
        }
    }
}

impl RemoteStore for MemoryStore {
    fn exists(&mut self, path: &str) -> Result<bool, StoreError> {
        self.begin(StoreOp::Exists, path)?;
        Ok(self.docs.contains_key(path))
    }

    fn get(&mut self, path: &str) -> Result<Value, StoreError> {
        self.begin(StoreOp::Get, path)?;
        self.docs.get(path).cloned().ok_or(StoreError::NotFound)
    }

    fn set(&mut self, path: &str, document: &Value) -> Result<(), StoreError> {
        self.begin(StoreOp::Set, path)?;
        self.docs.insert(path.to_string(), document.clone());
        Ok(())
    }

    fn delete(&mut self, path: &str) -> Result<(), StoreError> {
        self.begin(StoreOp::Delete, path)?;
        self.docs.remove(path);
        Ok(())
    }
}
