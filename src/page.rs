use crate::error::{BabelError, Result};

/// Grid used to print a page: `rows` lines of `columns` symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub rows: usize,
    pub columns: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 32,
        }
    }
}

impl PageLayout {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(BabelError::InvalidConfig(format!(
                "page grid must be non-empty, got {}x{}",
                rows, columns
            )));
        }
        Ok(Self { rows, columns })
    }

    /// Symbols per page
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Lay `text` out row by row; each row ends with a newline
    ///
    /// Symbols beyond the grid are dropped and missing ones leave short rows.
    pub fn render(&self, text: &str) -> String {
        let symbols: Vec<char> = text.chars().take(self.capacity()).collect();
        let mut output = String::with_capacity(self.capacity() + self.rows);
        for row in symbols.chunks(self.columns) {
            output.extend(row.iter());
            output.push('\n');
        }
        output
    }
}
