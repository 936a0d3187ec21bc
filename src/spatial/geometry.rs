//! Cell positions, distances and board-relative predicates

use crate::actors::Quadrant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell coordinates, `x` is the column and `y` the row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Position {
    /// Create a position
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two cells
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance between two cells
pub fn distance(a: Position, b: Position) -> f64 {
    a.distance(b)
}

/// Board dimensions and the geometric predicates derived from them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardShape {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl BoardShape {
    /// Create a shape
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub const fn cell_count(self) -> usize {
        self.width * self.height
    }

    /// Whether the position lies on the board
    pub const fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Row-major index of a position
    pub const fn index_of(self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    /// Position of a row-major index
    pub const fn position_of(self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }

    /// All positions in row-major order
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.cell_count()).map(move |index| self.position_of(index))
    }

    /// Whether the position is one of the four corners
    pub const fn is_corner(self, pos: Position) -> bool {
        (pos.x == 0 || pos.x + 1 == self.width) && (pos.y == 0 || pos.y + 1 == self.height)
    }

    /// Whether the position lies on the outer rim, corners included
    pub const fn is_border(self, pos: Position) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x + 1 == self.width || pos.y + 1 == self.height
    }

    /// Whether the position lies on the outer rim but is not a corner
    pub const fn is_edge(self, pos: Position) -> bool {
        self.is_border(pos) && !self.is_corner(pos)
    }

    /// Board centre cell, rounding towards the top-left
    pub const fn center(self) -> Position {
        Position::new(
            self.width.saturating_sub(1) / 2,
            self.height.saturating_sub(1) / 2,
        )
    }

    /// Whether the position is the centre cell
    pub const fn is_center(self, pos: Position) -> bool {
        let center = self.center();
        pos.x == center.x && pos.y == center.y
    }

    /// Number of cells between the position and the nearest rim cell
    ///
    /// Rim cells are at distance zero.
    pub fn edge_distance(self, pos: Position) -> usize {
        let right = self.width.saturating_sub(pos.x + 1);
        let bottom = self.height.saturating_sub(pos.y + 1);
        pos.x.min(pos.y).min(right).min(bottom)
    }

    /// Quadrant containing the position, `None` on the centre row or column
    pub const fn quadrant_of(self, pos: Position) -> Option<Quadrant> {
        let center = self.center();
        if pos.x < center.x && pos.y < center.y {
            Some(Quadrant::TopLeft)
        } else if pos.x > center.x && pos.y < center.y {
            Some(Quadrant::TopRight)
        } else if pos.x > center.x && pos.y > center.y {
            Some(Quadrant::BottomRight)
        } else if pos.x < center.x && pos.y > center.y {
            Some(Quadrant::BottomLeft)
        } else {
            None
        }
    }

    /// Positions within `radius` of `origin`, excluding `origin` itself
    ///
    /// Scans only the bounding square of the radius, clipped to the board.
    pub fn within(self, origin: Position, radius: f64) -> impl Iterator<Item = Position> {
        let span = self.width.max(self.height);
        let reach = if radius.is_finite() && radius > 0.0 {
            radius.min(span as f64).floor() as usize
        } else {
            0
        };
        let x_end = origin.x.saturating_add(reach).saturating_add(1).min(self.width);
        let y_end = origin.y.saturating_add(reach).saturating_add(1).min(self.height);
        let x_range = origin.x.saturating_sub(reach)..x_end;
        let y_range = origin.y.saturating_sub(reach)..y_end;
        y_range
            .flat_map(move |y| x_range.clone().map(move |x| Position::new(x, y)))
            .filter(move |&pos| pos != origin && origin.distance(pos) <= radius)
    }
}
