use crate::{CellSource, LifeError, Result};

/// Rectangular field of cells stored row-major; `true` is alive.
///
/// Dimensions are fixed at construction and are always positive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Number of cells of a `rows x columns` grid; both must be positive and
    /// their product must fit in `usize`.
    fn check_dimensions(rows: usize, columns: usize) -> Result<usize> {
        match rows.checked_mul(columns) {
            Some(size) if size > 0 => Ok(size),
            _ => Err(LifeError::InvalidDimension { rows, columns }),
        }
    }

    /// Create a grid with all cells dead.
    pub fn blank(rows: usize, columns: usize) -> Result<Self> {
        let size = Self::check_dimensions(rows, columns)?;
        Ok(Self {
            cells: vec![false; size],
            rows,
            columns,
        })
    }

    /// Create a grid drawing every cell from `source`, row by row.
    pub fn random(rows: usize, columns: usize, source: &mut impl CellSource) -> Result<Self> {
        let size = Self::check_dimensions(rows, columns)?;
        let cells = (0..size).map(|_| source.next_cell()).collect();
        Ok(Self {
            cells,
            rows,
            columns,
        })
    }

    /// Create a grid from explicit rows; every row must have the same non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let columns = rows.first().ok_or(LifeError::MissingGrid)?.len();
        let size = Self::check_dimensions(rows.len(), columns)?;
        let mut cells = Vec::with_capacity(size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(LifeError::RaggedRows {
                    row: i,
                    expected: columns,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            columns,
        })
    }

    /// Parse a pattern in plaintext format.
    ///
    /// Lines starting with `!` are comments, `O`, `o`, `*` and `#` are alive cells,
    /// `.` is a dead one. Short lines are padded with dead cells.
    pub fn from_plaintext(data: &str) -> Result<Self> {
        let mut lines = vec![];
        for (i, line) in data.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.starts_with('!') {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(j, symbol)| match symbol {
                    'O' | 'o' | '*' | '#' => Ok(true),
                    '.' => Ok(false),
                    _ => Err(LifeError::Parse {
                        line: i + 1,
                        column: j + 1,
                        symbol,
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            lines.push(row);
        }
        // trailing blank lines carry no cells
        while lines.last().is_some_and(|row| row.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(LifeError::MissingGrid);
        }
        let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
        for row in lines.iter_mut() {
            row.resize(columns, false);
        }
        Self::from_rows(lines)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Cells of a single row.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> bool {
        assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column]
    }

    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, state: bool) {
        assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column] = state;
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub(crate) fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.columns == other.columns
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyphs = crate::Glyphs::default();
        for y in 0..self.rows {
            for &cell in self.row(y) {
                write!(f, "{}", glyphs.glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        for (rows, columns) in [(0, 5), (5, 0), (0, 0)] {
            assert!(matches!(
                Grid::blank(rows, columns),
                Err(LifeError::InvalidDimension { .. })
            ));
            let mut source = || true;
            assert!(matches!(
                Grid::random(rows, columns, &mut source),
                Err(LifeError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        for (rows, columns) in [((1 << (usize::BITS - 1)) + 1, 2), (usize::MAX, usize::MAX)] {
            assert!(matches!(
                Grid::blank(rows, columns),
                Err(LifeError::InvalidDimension { .. })
            ));
            let mut source = || false;
            assert!(matches!(
                Grid::random(rows, columns, &mut source),
                Err(LifeError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn random_fills_row_major() {
        let mut i = 0;
        let mut source = || {
            i += 1;
            i % 3 == 0
        };
        let grid = Grid::random(2, 3, &mut source).unwrap();
        assert_eq!(grid.cells(), &[false, false, true, false, false, true]);
        assert!(grid.get(0, 2));
        assert!(grid.get(1, 2));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn from_rows_validation() {
        assert!(matches!(Grid::from_rows(vec![]), Err(LifeError::MissingGrid)));
        assert!(matches!(
            Grid::from_rows(vec![vec![]]),
            Err(LifeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![true, false], vec![true]]),
            Err(LifeError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
        let grid = Grid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (2, 2));
        assert_eq!(grid.row(1), &[false, true]);
    }

    #[test]
    fn plaintext_is_padded_and_displayed() {
        let grid = Grid::from_plaintext("!Name: glider\n.O\n..O\nOOO\n\n").unwrap();
        assert_eq!((grid.rows(), grid.columns()), (3, 3));
        assert_eq!(grid.population(), 5);
        assert_eq!(grid.to_string(), ".#.\n..#\n###\n");
        assert_eq!(Grid::from_plaintext(&grid.to_string()).unwrap(), grid);
    }

    #[test]
    fn plaintext_errors() {
        assert!(matches!(
            Grid::from_plaintext("!only a comment\n"),
            Err(LifeError::MissingGrid)
        ));
        assert!(matches!(
            Grid::from_plaintext("..\n.x\n"),
            Err(LifeError::Parse {
                line: 2,
                column: 2,
                symbol: 'x'
            })
        ));
    }
}
