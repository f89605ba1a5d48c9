//! Static obstacle grid
//!
//! The grid is a list of rows; each cell is empty, a wall or lava. Rows may
//! have different lengths: cells past the end of a short row are empty.

use glam::Vec2;

/// A blocking grid feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Obstacle {
    /// Impassable, harmless
    Wall,
    /// Impassable and lethal to the player
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

/// Anything that can answer "what blocks this rectangle?"
///
/// Entities step against this instead of the whole level so the level can
/// hand out its grid while its entity list is mutably borrowed.
pub trait ObstacleMap {
    fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle>;
}

/// Row-major obstacle grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Option<Obstacle>>>,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Longest row length (0 for an empty grid)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Option<Obstacle>>] {
        &self.rows
    }

    /// Cell at (column, row); out-of-range cells are empty
    pub fn cell(&self, x: usize, y: usize) -> Option<Obstacle> {
        self.rows.get(y).and_then(|row| row.get(x).copied().flatten())
    }
}

impl ObstacleMap for Grid {
    /// Out of bounds left, right or above is a wall. Below the last row is
    /// lava, so falling off the level kills. Inside the grid the covered
    /// cells are scanned row by row and the first non-empty one wins.
    fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        let end = pos + size;

        if pos.x < 0.0 || end.x >= self.width as f32 || pos.y < 0.0 {
            return Some(Obstacle::Wall);
        }
        if end.y >= self.height() as f32 {
            return Some(Obstacle::Lava);
        }

        let x_start = pos.x.floor() as usize;
        let x_end = end.x.ceil() as usize;
        let y_start = pos.y.floor() as usize;
        let y_end = end.y.ceil() as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                if let Some(obstacle) = self.cell(x, y) {
                    return Some(obstacle);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: Option<Obstacle> = Some(Obstacle::Wall);
    const L: Option<Obstacle> = Some(Obstacle::Lava);

    fn empty_grid(width: usize, height: usize) -> Grid {
        Grid::new(vec![vec![None; width]; height])
    }

    #[test]
    fn test_dimensions() {
        let grid = Grid::new(vec![vec![None; 3], vec![None; 7], vec![]]);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);

        let empty = Grid::default();
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.height(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = empty_grid(10, 5);
        let one = Vec2::ONE;
        assert_eq!(grid.obstacle_at(Vec2::new(-0.1, 2.0), one), Some(Obstacle::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(9.5, 2.0), one), Some(Obstacle::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(2.0, -0.5), one), Some(Obstacle::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(5.0, 4.5), one), Some(Obstacle::Lava));
        // Touching the right edge exactly already counts as outside
        assert_eq!(grid.obstacle_at(Vec2::new(9.0, 2.0), one), Some(Obstacle::Wall));
    }

    #[test]
    fn test_side_walls_beat_bottom_lava() {
        let grid = empty_grid(10, 5);
        assert_eq!(
            grid.obstacle_at(Vec2::new(-1.0, 4.5), Vec2::ONE),
            Some(Obstacle::Wall)
        );
    }

    #[test]
    fn test_open_space() {
        let grid = empty_grid(10, 5);
        assert_eq!(grid.obstacle_at(Vec2::new(3.0, 1.0), Vec2::ONE), None);
        assert_eq!(grid.obstacle_at(Vec2::new(3.4, 1.2), Vec2::new(0.8, 1.5)), None);
    }

    #[test]
    fn test_cells_covered_by_fractional_rect() {
        let mut rows = vec![vec![None; 6]; 5];
        rows[2][3] = W;
        let grid = Grid::new(rows);

        // Spans columns 2..=3 and rows 1..=2
        assert_eq!(
            grid.obstacle_at(Vec2::new(2.5, 1.5), Vec2::ONE),
            Some(Obstacle::Wall)
        );
        // Ends exactly on the cell boundary: column 3 not covered
        assert_eq!(grid.obstacle_at(Vec2::new(2.0, 1.5), Vec2::ONE), None);
    }

    #[test]
    fn test_row_major_scan_prefers_earlier_row() {
        let mut rows = vec![vec![None; 4]; 4];
        rows[0][1] = W;
        rows[1][1] = L;
        let grid = Grid::new(rows);
        assert_eq!(
            grid.obstacle_at(Vec2::new(1.0, 0.5), Vec2::ONE),
            Some(Obstacle::Wall)
        );
    }

    #[test]
    fn test_row_major_scan_prefers_left_column() {
        let mut rows = vec![vec![None; 4]; 4];
        rows[1][1] = L;
        rows[1][2] = W;
        let grid = Grid::new(rows);
        assert_eq!(
            grid.obstacle_at(Vec2::new(1.5, 1.0), Vec2::ONE),
            Some(Obstacle::Lava)
        );
    }

    #[test]
    fn test_ragged_rows_are_empty_past_their_end() {
        let grid = Grid::new(vec![vec![None; 6], vec![None; 2], vec![None; 6]]);
        assert_eq!(grid.cell(4, 1), None);
        assert_eq!(grid.obstacle_at(Vec2::new(3.0, 1.0), Vec2::new(1.0, 0.5)), None);
    }
}
