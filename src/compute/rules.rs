//! Transition rule and toroidal neighbourhood for Conway's Game of Life.

/// Moore neighbourhood as `(dx, dy)` offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Next state of a cell under B3/S23.
///
/// - Live cells with 2 or 3 live neighbours survive
/// - Dead cells with exactly 3 live neighbours are born
/// - Every other cell is dead next generation
#[inline]
pub fn next_state(alive: bool, live_count: usize) -> bool {
    matches!((alive, live_count), (true, 2) | (true, 3) | (false, 3))
}

/// Offset `index` by `delta` (-1, 0 or 1) on a ring of length `len`.
#[inline]
pub fn wrap(index: usize, delta: isize, len: usize) -> usize {
    match delta {
        -1 => {
            if index == 0 {
                len - 1
            } else {
                index - 1
            }
        }
        1 => {
            if index + 1 == len {
                0
            } else {
                index + 1
            }
        }
        _ => index,
    }
}

/// Count live Moore neighbours of `(x, y)` in a row-major `rows x columns` buffer.
#[inline]
pub fn count_neighbors(cells: &[bool], rows: usize, columns: usize, x: usize, y: usize) -> usize {
    neighbor_coords(rows, columns, x, y)
        .iter()
        .filter(|&&(nx, ny)| cells[nx * columns + ny])
        .count()
}

/// Wrapped coordinates of the 8 neighbours of `(x, y)`.
pub fn neighbor_coords(rows: usize, columns: usize, x: usize, y: usize) -> [(usize, usize); 8] {
    NEIGHBOR_OFFSETS.map(|(dx, dy)| (wrap(x, dx, rows), wrap(y, dy, columns)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        for count in 0..=8 {
            assert_eq!(next_state(true, count), count == 2 || count == 3, "alive, {}", count);
            assert_eq!(next_state(false, count), count == 3, "dead, {}", count);
        }
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, -1, 5), 1);
        assert_eq!(wrap(2, 1, 5), 3);
        assert_eq!(wrap(3, 0, 5), 3);
    }

    #[test]
    fn test_wrap_single_cell_ring() {
        // Every neighbour of a 1-long ring is the cell itself
        assert_eq!(wrap(0, -1, 1), 0);
        assert_eq!(wrap(0, 1, 1), 0);
    }

    #[test]
    fn test_corner_neighbors() {
        let coords = neighbor_coords(4, 6, 0, 0);
        assert!(coords.contains(&(3, 5)));
        assert!(coords.contains(&(3, 0)));
        assert!(coords.contains(&(0, 5)));
        assert!(coords.contains(&(1, 1)));
    }

    #[test]
    fn test_count_neighbors_wraps() {
        let rows = 3;
        let columns = 4;
        let mut cells = vec![false; rows * columns];
        // Opposite corner, opposite row end, opposite column end
        cells[2 * columns + 3] = true;
        cells[2 * columns] = true;
        cells[3] = true;

        assert_eq!(count_neighbors(&cells, rows, columns, 0, 0), 3);
    }

    #[test]
    fn test_count_neighbors_ignores_self() {
        let cells = vec![true; 9];
        assert_eq!(count_neighbors(&cells, 3, 3, 1, 1), 8);

        let mut only_self = vec![false; 9];
        only_self[4] = true;
        assert_eq!(count_neighbors(&only_self, 3, 3, 1, 1), 0);
    }
}
