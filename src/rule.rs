//! B3/S23 transition on a bounded field: positions outside the grid count as dead.

use crate::Grid;
use std::ops::Range;

/// Number of alive cells among the up to 8 neighbours of `(row, column)`.
pub fn alive_neighbors(grid: &Grid, row: usize, column: usize) -> usize {
    let (rows, columns) = (grid.rows(), grid.columns());
    let (y1, y2) = (row.saturating_sub(1), (row + 1).min(rows - 1));
    let (x1, x2) = (column.saturating_sub(1), (column + 1).min(columns - 1));
    let block = (y1..=y2)
        .map(|y| grid.row(y)[x1..=x2].iter().filter(|&&c| c).count())
        .sum::<usize>();
    block - grid.get(row, column) as usize
}

pub fn next_state(alive: bool, neighbors: usize) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Computes the next generation of `rows` of `src` into `dst`.
///
/// `dst` holds exactly the cells of those rows, row-major.
pub fn step_rows(src: &Grid, rows: Range<usize>, dst: &mut [bool]) {
    let columns = src.columns();
    debug_assert_eq!(dst.len(), rows.len() * columns);
    for (y, dst_row) in rows.zip(dst.chunks_exact_mut(columns)) {
        let src_row = src.row(y);
        for (x, cell) in dst_row.iter_mut().enumerate() {
            *cell = next_state(src_row[x], alive_neighbors(src, y, x));
        }
    }
}

/// Splits `0..rows` into `chunks` contiguous ranges covering every row once.
///
/// The first `rows % chunks` ranges get one extra row. `chunks` is clamped to `1..=rows`.
pub fn partition(rows: usize, chunks: usize) -> Vec<Range<usize>> {
    let chunks = chunks.clamp(1, rows.max(1));
    let (base, extra) = (rows / chunks, rows % chunks);
    let mut start = 0;
    (0..chunks)
        .map(|i| {
            let len = base + (i < extra) as usize;
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive, n={}", n);
            assert_eq!(next_state(false, n), n == 3, "dead, n={}", n);
        }
    }

    #[test]
    fn neighbors_do_not_wrap() {
        let grid = Grid::from_rows(vec![
            vec![true, false, true],
            vec![false, false, false],
            vec![true, false, true],
        ])
        .unwrap();
        assert_eq!(alive_neighbors(&grid, 0, 0), 0);
        assert_eq!(alive_neighbors(&grid, 1, 1), 4);
        assert_eq!(alive_neighbors(&grid, 0, 1), 2);
        assert_eq!(alive_neighbors(&grid, 1, 0), 2);

        let single = Grid::from_rows(vec![vec![true]]).unwrap();
        assert_eq!(alive_neighbors(&single, 0, 0), 0);
    }

    #[test]
    fn partition_is_exact() {
        for rows in 1..40 {
            for chunks in 1..=rows + 3 {
                let ranges = partition(rows, chunks);
                assert_eq!(ranges.len(), chunks.min(rows));
                assert_eq!(ranges[0].start, 0);
                assert_eq!(ranges.last().unwrap().end, rows);
                for w in ranges.windows(2) {
                    assert_eq!(w[0].end, w[1].start);
                }
                let (min, max) = (
                    ranges.iter().map(|r| r.len()).min().unwrap(),
                    ranges.iter().map(|r| r.len()).max().unwrap(),
                );
                assert!(min >= 1 && max - min <= 1, "rows={} chunks={}", rows, chunks);
            }
        }
    }

    #[test]
    fn step_rows_writes_only_given_rows() {
        let grid = Grid::from_rows(vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ])
        .unwrap();
        let mut dst = [true; 3];
        step_rows(&grid, 2..3, &mut dst);
        assert_eq!(dst, [false, true, false]);
    }
}
