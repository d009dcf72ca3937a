//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered employee collection exclusively.
//! - Provide id allocation, lookup, whole-record replacement and removal.
//!
//! # Invariants
//! - `insert` rejects an id that is already present.
//! - `replace` swaps the whole record in place or changes nothing.
//! - `remove` of an absent id is a no-op, never an error.

use crate::model::employee::{EmployeeId, EmployeeRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee collection writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(EmployeeId),
    DuplicateId(EmployeeId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "employee not found: ID={id}"),
            Self::DuplicateId(id) => write!(f, "employee id already exists: ID={id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for the grid's row collection.
///
/// Storage-backed implementations can replace the in-memory one without
/// touching the edit pipeline.
pub trait EmployeeRepository {
    /// Next free id: max existing id + 1, or 1 when empty.
    ///
    /// Returns `None` when the max id is `EmployeeId::MAX`.
    fn next_id(&self) -> Option<EmployeeId>;
    /// Appends a record and returns its row index.
    fn insert(&mut self, record: EmployeeRecord) -> RepoResult<usize>;
    /// Replaces the record sharing `record.id` and returns its row index.
    fn replace(&mut self, record: EmployeeRecord) -> RepoResult<usize>;
    /// Removes the record with `id`, returning it when present.
    fn remove(&mut self, id: EmployeeId) -> Option<EmployeeRecord>;
    fn position(&self, id: EmployeeId) -> Option<usize>;
    fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord>;
    /// All rows in insertion order.
    fn list(&self) -> &[EmployeeRecord];
}

/// Vec-backed repository used by interactive grid sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    rows: Vec<EmployeeRecord>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from pre-existing rows.
    ///
    /// # Errors
    /// - Returns `DuplicateId` when two rows share an id.
    pub fn from_rows(rows: Vec<EmployeeRecord>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for row in rows {
            repo.insert(row)?;
        }
        Ok(repo)
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn next_id(&self) -> Option<EmployeeId> {
        match self.rows.iter().map(|row| row.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    fn insert(&mut self, record: EmployeeRecord) -> RepoResult<usize> {
        if self.position(record.id).is_some() {
            return Err(RepoError::DuplicateId(record.id));
        }
        self.rows.push(record);
        Ok(self.rows.len() - 1)
    }

    fn replace(&mut self, record: EmployeeRecord) -> RepoResult<usize> {
        let index = self
            .position(record.id)
            .ok_or(RepoError::NotFound(record.id))?;
        self.rows[index] = record;
        Ok(index)
    }

    fn remove(&mut self, id: EmployeeId) -> Option<EmployeeRecord> {
        let index = self.position(id)?;
        Some(self.rows.remove(index))
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn list(&self) -> &[EmployeeRecord] {
        &self.rows
    }
}
