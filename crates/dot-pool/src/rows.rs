//! Repeating Rows
//!
//! Ordered rows with stable ids. Rows are either permanent (part of the
//! sheet) or added by the user, and only the latter can be removed.

use crate::error::RowError;

/// Stable identifier of a row within its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    id: RowId,
    removable: bool,
    pub value: T,
}

impl<T> Row<T> {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn is_removable(&self) -> bool {
        self.removable
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowList<T> {
    rows: Vec<Row<T>>,
    next_id: u32,
}

impl<T> Default for RowList<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), next_id: 0 }
    }
}

impl<T> RowList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, value: T, removable: bool) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, removable, value });
        id
    }

    /// Append a row that can never be removed.
    pub fn push_permanent(&mut self, value: T) -> RowId {
        self.push(value, false)
    }

    /// Append a user row.
    pub fn add(&mut self, value: T) -> RowId {
        self.push(value, true)
    }

    pub fn remove(&mut self, id: RowId) -> Result<Row<T>, RowError> {
        let pos = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(RowError::UnknownRow(id))?;
        if !self.rows[pos].removable {
            return Err(RowError::PermanentRow(id));
        }
        Ok(self.rows.remove(pos))
    }

    /// Drop every user row, returning how many went.
    pub fn retain_permanent(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row.removable);
        before - self.rows.len()
    }

    pub fn get(&self, id: RowId) -> Option<&Row<T>> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut Row<T>> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row<T>> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Row<T>> {
        self.rows.iter_mut()
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
