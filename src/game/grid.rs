use super::direction::Direction;
use rand::Rng;

/// A cell on the game grid, in grid units (not pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The toroidal coordinate space
///
/// Pure value operations only; the grid holds no mutable state. Every move
/// that leaves one edge re-enters at the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 1 && height >= 1, "grid dimensions must be positive");
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Move a cell one step in a direction, wrapping around the edges
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: (cell.x + dx).rem_euclid(self.width),
            y: (cell.y + dy).rem_euclid(self.height),
        }
    }

    /// Uniformly random cell in [0, W) x [0, H)
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        Cell {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
        }
    }

    /// The fixed starting cell for the snake
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Check if a cell is within the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_wrap_stays_in_bounds() {
        let grid = Grid::new(4, 3);

        for x in 0..4 {
            for y in 0..3 {
                for direction in ALL_DIRECTIONS {
                    let next = grid.wrap(Cell::new(x, y), direction);
                    assert!(grid.contains(next), "{:?} from ({}, {}) left the grid", direction, x, y);
                }
            }
        }
    }

    #[test]
    fn test_wrap_interior_moves() {
        let grid = Grid::new(10, 10);
        let cell = Cell::new(5, 5);

        assert_eq!(grid.wrap(cell, Direction::Up), Cell::new(5, 4));
        assert_eq!(grid.wrap(cell, Direction::Down), Cell::new(5, 6));
        assert_eq!(grid.wrap(cell, Direction::Left), Cell::new(4, 5));
        assert_eq!(grid.wrap(cell, Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_wrap_at_edges() {
        let grid = Grid::new(4, 4);

        // Exiting one edge re-enters at the opposite edge, same row/column
        assert_eq!(grid.wrap(Cell::new(3, 2), Direction::Right), Cell::new(0, 2));
        assert_eq!(grid.wrap(Cell::new(0, 2), Direction::Left), Cell::new(3, 2));
        assert_eq!(grid.wrap(Cell::new(1, 0), Direction::Up), Cell::new(1, 3));
        assert_eq!(grid.wrap(Cell::new(1, 3), Direction::Down), Cell::new(1, 0));
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let grid = Grid::new(5, 7);
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(32, 24).center(), Cell::new(16, 12));
        assert_eq!(Grid::new(4, 4).center(), Cell::new(2, 2));
        assert_eq!(Grid::new(3, 3).center(), Cell::new(1, 1));
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(Grid::new(4, 3).cell_count(), 12);
        assert_eq!(Grid::new(1, 1).cell_count(), 1);
    }
}
