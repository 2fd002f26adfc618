//! Pull-based iteration over a materialized row sequence.
//!
//! [`RowCursor`] is the engine-independent part of both virtual table cursors:
//!
//! ```text
//! Unfiltered --load--> Positioned(rowid) --advance--> ... --> Eof
//!                 ^                                           |
//!                 +-------------------load--------------------+
//! ```
//!
//! `rowid` counts rows handed out so far; a negative value marks end of data.

/// Rowid sentinel for end of data.
pub const EOF_ROWID: i64 = -1;

/// Cursor over an owned, ordered sequence of row records.
#[derive(Debug)]
pub struct RowCursor<R> {
    rows: Vec<R>,
    current: Option<usize>,
    rowid: i64,
}

impl<R> Default for RowCursor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RowCursor<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            current: None,
            rowid: EOF_ROWID,
        }
    }

    /// Replace the row sequence and position on the first row, or at EOF when
    /// `rows` is empty. Safe to call repeatedly.
    pub fn load(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.current = None;
        self.rowid = 0;
        self.advance();
    }

    /// Move to the next row. Once at EOF this is a no-op.
    pub fn advance(&mut self) {
        match usize::try_from(self.rowid) {
            Ok(index) if index < self.rows.len() => {
                self.current = Some(index);
                self.rowid += 1;
            }
            _ => {
                self.current = None;
                self.rowid = EOF_ROWID;
            }
        }
    }

    /// The current row, `None` before the first load and at EOF.
    pub fn current(&self) -> Option<&R> {
        self.current.and_then(|index| self.rows.get(index))
    }

    pub fn rowid(&self) -> i64 {
        self.rowid
    }

    pub fn is_eof(&self) -> bool {
        self.rowid < 0
    }

    /// Drop the row sequence and park the cursor at EOF.
    pub fn close(&mut self) {
        self.rows = Vec::new();
        self.current = None;
        self.rowid = EOF_ROWID;
    }
}
