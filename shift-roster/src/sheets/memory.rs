//! In-memory [`SheetStore`] used by unit tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::store::{CellUpdate, Grid, SheetStore, StoreError};

/// Serves canned ranges and records every call
#[derive(Debug, Default)]
pub struct MemoryStore {
    ranges: HashMap<String, Grid>,
    failing_reads: HashSet<String>,
    fail_writes: bool,
    reads: Mutex<Vec<String>>,
    read_calls: AtomicUsize,
    write_calls: AtomicUsize,
    batches: Mutex<Vec<Vec<CellUpdate>>>,
    appended: Mutex<Vec<(String, Vec<Vec<serde_json::Value>>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: &str, rows: &[&[&str]]) -> Self {
        let grid = rows
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        self.ranges.insert(range.to_string(), grid);
        self
    }

    pub fn failing_read(mut self, range: &str) -> Self {
        self.failing_reads.insert(range.to_string());
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    pub fn batches(&self) -> Vec<Vec<CellUpdate>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn appended(&self) -> Vec<(String, Vec<Vec<serde_json::Value>>)> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait]
impl SheetStore for MemoryStore {
    async fn read_range(&self, range: &str) -> Result<Grid, StoreError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.reads.lock().unwrap().push(range.to_string());
        if self.failing_reads.contains(range) {
            return Err(StoreError::Other(format!("read of {} refused", range)));
        }
        Ok(self.ranges.get(range).cloned().unwrap_or_default())
    }

    async fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<serde_json::Value>>,
    ) -> Result<(), StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StoreError::Other("append refused".to_string()));
        }
        self.appended.lock().unwrap().push((range.to_string(), rows));
        Ok(())
    }

    async fn batch_update_cells(&self, updates: &[CellUpdate]) -> Result<(), StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StoreError::Other("batch update refused".to_string()));
        }
        self.batches.lock().unwrap().push(updates.to_vec());
        Ok(())
    }
}
