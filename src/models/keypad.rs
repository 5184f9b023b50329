//! Keypad layout definitions.
//!
//! A keypad is a fixed rectangular grid. Every cell is either a key carrying a
//! symbol or a blocked cell. Keys are numbered in row-major order; that index
//! is used as the row/column index of every transition matrix in the crate.

use std::collections::HashSet;
use std::fmt;

use crate::constants::{BLOCKED_CELL, CANONICAL_ROWS, CANONICAL_VOWELS};

/// Grid position of a key (row, col), both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index (0 = top)
    pub row: usize,
    /// Column index (0 = left)
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, returning `None` when the result leaves the
    /// `rows` x `cols` grid.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, rows: usize, cols: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < rows && col < cols).then_some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One key of the keypad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Symbol printed on the key
    pub symbol: char,
    /// Grid position
    pub position: Position,
    /// Whether the symbol belongs to the vowel set
    pub is_vowel: bool,
}

/// Reasons a keypad layout is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypadError {
    /// The layout has no rows, or its first row has no cells
    EmptyGrid,
    /// A row's width differs from the first row's
    RaggedRow {
        /// Offending row index
        row: usize,
        /// Width of row 0
        expected: usize,
        /// Width of the offending row
        found: usize,
    },
    /// Every cell is blocked
    NoKeys,
    /// The same symbol appears on two keys
    DuplicateSymbol(char),
    /// A vowel is not printed on any key
    UnknownVowel(char),
}

impl fmt::Display for KeypadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "keypad grid has no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "keypad row {row} has {found} cells, expected {expected}"
            ),
            Self::NoKeys => write!(f, "keypad has no keys (every cell is blocked)"),
            Self::DuplicateSymbol(symbol) => {
                write!(f, "symbol '{symbol}' appears on more than one key")
            }
            Self::UnknownVowel(symbol) => {
                write!(f, "vowel '{symbol}' does not appear on the keypad")
            }
        }
    }
}

impl std::error::Error for KeypadError {}

/// Immutable keypad: grid dimensions, cell occupancy and the key list.
///
/// # Validation
///
/// - all rows have the same width and the grid is non-empty
/// - at least one cell holds a key
/// - symbols are unique
/// - every vowel is printed on some key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: usize,
    cols: usize,
    /// Row-major cell table; `Some(index)` points into `keys`
    cells: Vec<Option<usize>>,
    keys: Vec<Key>,
}

impl Keypad {
    /// Builds a keypad from a grid of optional symbols and a vowel set.
    pub fn new(grid: &[Vec<Option<char>>], vowels: &[char]) -> Result<Self, KeypadError> {
        let cols = grid.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(KeypadError::EmptyGrid);
        }

        let vowel_set: HashSet<char> = vowels.iter().copied().collect();
        let mut seen = HashSet::new();
        let mut cells = Vec::with_capacity(grid.len() * cols);
        let mut keys = Vec::new();

        for (row, line) in grid.iter().enumerate() {
            if line.len() != cols {
                return Err(KeypadError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, cell) in line.iter().enumerate() {
                let Some(symbol) = *cell else {
                    cells.push(None);
                    continue;
                };
                if !seen.insert(symbol) {
                    return Err(KeypadError::DuplicateSymbol(symbol));
                }
                cells.push(Some(keys.len()));
                keys.push(Key {
                    symbol,
                    position: Position::new(row, col),
                    is_vowel: vowel_set.contains(&symbol),
                });
            }
        }

        if keys.is_empty() {
            return Err(KeypadError::NoKeys);
        }
        if let Some(missing) = vowels.iter().find(|v| !seen.contains(v)) {
            return Err(KeypadError::UnknownVowel(*missing));
        }

        Ok(Self {
            rows: grid.len(),
            cols,
            cells,
            keys,
        })
    }

    /// Builds a keypad from text rows, where `blocked` marks cells with no key.
    ///
    /// ```
    /// use knightpad::models::Keypad;
    ///
    /// let keypad = Keypad::from_rows(&["AB_", "CDE"], '_', "AE").unwrap();
    /// assert_eq!(keypad.key_count(), 5);
    /// ```
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        blocked: char,
        vowels: &str,
    ) -> Result<Self, KeypadError> {
        let grid: Vec<Vec<Option<char>>> = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|c| (c != blocked).then_some(c))
                    .collect()
            })
            .collect();
        let vowels: Vec<char> = vowels.chars().collect();
        Self::new(&grid, &vowels)
    }

    /// The reference 4 x 5 keypad with vowels A, E, I, O.
    pub fn canonical() -> Result<Self, KeypadError> {
        Self::from_rows(&CANONICAL_ROWS, BLOCKED_CELL, CANONICAL_VOWELS)
    }

    /// Number of grid rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of keys (non-blocked cells).
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// All keys in row-major order.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Key by index.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    /// Index of the key at `position`, or `None` for blocked or off-grid cells.
    #[must_use]
    pub fn key_index_at(&self, position: Position) -> Option<usize> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        self.cells[position.row * self.cols + position.col]
    }

    /// Index of the key printed with `symbol`.
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.keys.iter().position(|k| k.symbol == symbol)
    }

    /// Number of vowel keys.
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.keys.iter().filter(|k| k.is_vowel).count()
    }
}

impl fmt::Display for Keypad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| {
                    self.key_index_at(Position::new(row, col))
                        .map_or(BLOCKED_CELL, |i| self.keys[i].symbol)
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
