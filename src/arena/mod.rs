// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Index-addressed arena of link records.
//!
//! All nodes of the linked matrix (the header, one record per column, and one
//! record per row/column intersection) live in a single contiguous `Vec`.
//! Links between records are plain `usize` indices into that vector, so the
//! structure has no reference cycles and no per-node allocations, and a whole
//! matrix can be snapshotted by cloning the arena.
//!
//! The arena only ever grows. Covering and uncovering rewrite link fields in
//! place; nothing is deallocated until the arena itself is dropped at the end
//! of a solve.

/// Index of a record in the arena.
pub type NodeIndex = usize;

/// A single link record.
///
/// One record type serves the header, column records, and cell records; the
/// unused fields of each role stay at their initial values. Keeping the
/// record a plain value type makes arena snapshots cheap and lets tests
/// compare two arenas field for field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    left: NodeIndex,
    right: NodeIndex,
    up: NodeIndex,
    down: NodeIndex,
    /// For a cell: the owning column record. For columns and the header: self.
    column: NodeIndex,
    /// For a cell: the dense row index assigned at build time.
    row: usize,
    /// For a column: the number of cells currently linked into its ring.
    size: usize,
    /// For a column: whether it must be covered exactly once.
    mandatory: bool,
}

/// Growable pool of link records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arena {
    records: Vec<Record>,
}

impl Arena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for at least `additional` more records.
    ///
    /// Purely a pre-sizing hint; the arena grows on demand either way.
    pub fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no record has been appended.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn append(&mut self, column: NodeIndex, row: usize, mandatory: bool) -> NodeIndex {
        let index = self.records.len();
        self.records.push(Record {
            left: index,
            right: index,
            up: index,
            down: index,
            column,
            row,
            size: 0,
            mandatory,
        });
        index
    }

    /// Append the header record. All four links point back at the header.
    pub fn append_header(&mut self) -> NodeIndex {
        let index = self.records.len();
        self.append(index, 0, false)
    }

    /// Append a column record with self-referential links and size zero.
    pub fn append_column(&mut self, mandatory: bool) -> NodeIndex {
        let index = self.records.len();
        self.append(index, 0, mandatory)
    }

    /// Append a cell record for the given dense row, owned by `column`.
    pub fn append_cell(&mut self, row: usize, column: NodeIndex) -> NodeIndex {
        self.append(column, row, false)
    }

    // Link accessors. Each is a constant-time read or write of one field.

    pub fn left(&self, node: NodeIndex) -> NodeIndex {
        self.records[node].left
    }

    pub fn set_left(&mut self, node: NodeIndex, value: NodeIndex) {
        self.records[node].left = value;
    }

    pub fn right(&self, node: NodeIndex) -> NodeIndex {
        self.records[node].right
    }

    pub fn set_right(&mut self, node: NodeIndex, value: NodeIndex) {
        self.records[node].right = value;
    }

    pub fn up(&self, node: NodeIndex) -> NodeIndex {
        self.records[node].up
    }

    pub fn set_up(&mut self, node: NodeIndex, value: NodeIndex) {
        self.records[node].up = value;
    }

    pub fn down(&self, node: NodeIndex) -> NodeIndex {
        self.records[node].down
    }

    pub fn set_down(&mut self, node: NodeIndex, value: NodeIndex) {
        self.records[node].down = value;
    }

    /// Owning column of a cell (self for columns and the header).
    pub fn column(&self, node: NodeIndex) -> NodeIndex {
        self.records[node].column
    }

    /// Dense row index of a cell.
    pub fn row(&self, node: NodeIndex) -> usize {
        self.records[node].row
    }

    /// Live cell count of a column.
    pub fn size(&self, node: NodeIndex) -> usize {
        self.records[node].size
    }

    pub fn increment_size(&mut self, node: NodeIndex) {
        self.records[node].size += 1;
    }

    pub fn decrement_size(&mut self, node: NodeIndex) {
        self.records[node].size -= 1;
    }

    /// Whether a column record is mandatory.
    pub fn is_mandatory(&self, node: NodeIndex) -> bool {
        self.records[node].mandatory
    }
}
