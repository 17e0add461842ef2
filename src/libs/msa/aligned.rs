use super::error::{MsaError, Result};
use super::scoring::{ungap, GAP};

/// Rows of an alignment, all of the same width.
///
/// Splicing and slicing return new values; rows are never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignedSet {
    rows: Vec<Vec<u8>>,
}

impl AlignedSet {
    /// Builds a set and checks that every row has the width of the first one.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let set = Self { rows };
        set.check_consistent()?;
        Ok(set)
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn column(&self, idx: usize) -> Vec<u8> {
        self.rows.iter().map(|row| row[idx]).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        (0..self.width()).map(|idx| self.column(idx))
    }

    /// A column is conserved when every row holds the same symbol.
    pub fn is_conserved(&self, idx: usize) -> bool {
        match self.rows.split_first() {
            Some((first, rest)) => rest.iter().all(|row| row[idx] == first[idx]),
            None => true,
        }
    }

    /// Columns `[lo, hi)` of every row.
    pub fn slice(&self, lo: usize, hi: usize) -> AlignedSet {
        AlignedSet {
            rows: self.rows.iter().map(|row| row[lo..hi].to_vec()).collect(),
        }
    }

    /// Replaces columns `[lo, hi)` with the columns of `block`.
    pub fn splice(&self, lo: usize, hi: usize, block: &AlignedSet) -> Result<AlignedSet> {
        if block.num_rows() != self.num_rows() {
            return Err(MsaError::Invariant(format!(
                "block with {} rows spliced into a set of {} rows",
                block.num_rows(),
                self.num_rows()
            )));
        }
        if lo > hi || hi > self.width() {
            return Err(MsaError::Invariant(format!(
                "splice range [{}, {}) outside width {}",
                lo,
                hi,
                self.width()
            )));
        }

        let rows = self
            .rows
            .iter()
            .zip(block.rows())
            .map(|(row, new)| {
                let mut spliced = Vec::with_capacity(row.len() - (hi - lo) + new.len());
                spliced.extend_from_slice(&row[..lo]);
                spliced.extend_from_slice(new);
                spliced.extend_from_slice(&row[hi..]);
                spliced
            })
            .collect();

        AlignedSet::new(rows)
    }

    /// Rows with all gaps removed.
    pub fn ungapped(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(|row| ungap(row)).collect()
    }

    /// Number of gap symbols over all rows.
    pub fn num_gaps(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&b| b == GAP).count())
            .sum()
    }

    pub fn check_consistent(&self) -> Result<()> {
        let expected = self.width();
        for (row, seq) in self.rows.iter().enumerate() {
            if seq.len() != expected {
                return Err(MsaError::UnequalLengths {
                    row,
                    expected,
                    found: seq.len(),
                });
            }
        }
        Ok(())
    }

    /// Rows as strings, lossily for non UTF-8 symbols.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect()
    }
}
