//! Shared data types for the replay simulator.
//!
//! Pure data structures with no external dependencies, usable from the core
//! simulation, the configuration loader, and the trace writer alike.
//!
//! # Coordinate System
//!
//! `x` grows rightward, `y` grows downward: the row index increases toward
//! the bottom of the board. Figure cells are offsets relative to a pivot and
//! may be negative; they only have to land inside the board once the spawn
//! anchor is applied.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Figure, Point};
//!
//! let p = Point::new(2, 1).translate(Point::new(0, 1));
//! assert_eq!(p, Point::new(2, 2));
//!
//! let bar = Figure::new(vec![Point::new(0, 0), Point::new(1, 0)]);
//! assert_eq!(bar.rotated_cw().rotated_ccw(), bar);
//!
//! assert_eq!(Command::from_char('Q'), Some(Command::RotateCw));
//! ```

/// Glyph for a locked board cell in a snapshot.
pub const FILLED_CELL: char = '#';

/// Glyph for a cell covered by the active figure.
pub const ACTIVE_CELL: char = '*';

/// Glyph for an empty cell.
pub const EMPTY_CELL: char = '.';

/// Score penalty when a freshly spawned figure cannot be placed.
pub const SPAWN_OVERFLOW_PENALTY: i64 = 10;

/// An integer cell position, also used as a translation vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise addition.
    pub fn translate(self, v: Point) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }

    /// Rotate 90° clockwise around the pivot: (x, y) → (y, −x).
    pub fn rotated_cw(self) -> Point {
        Point::new(self.y, -self.x)
    }

    /// Rotate 90° counter-clockwise around the pivot: (x, y) → (−y, x).
    pub fn rotated_ccw(self) -> Point {
        Point::new(-self.y, self.x)
    }
}

/// A figure (piece shape): an ordered, non-empty list of cell offsets
/// relative to a pivot.
///
/// Figures come from the configuration palette; palette order determines
/// which shape appears on the Nth spawn (cyclic modulo palette size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    cells: Vec<Point>,
}

impl Figure {
    /// Build a figure from its cell offsets.
    ///
    /// Panics on an empty cell list; configuration validation rejects empty
    /// pieces before they ever reach the simulation.
    pub fn new(cells: Vec<Point>) -> Self {
        assert!(!cells.is_empty(), "figure must have at least one cell");
        Self { cells }
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Clockwise rotation of every cell around the pivot.
    pub fn rotated_cw(&self) -> Figure {
        Figure {
            cells: self.cells.iter().map(|c| c.rotated_cw()).collect(),
        }
    }

    /// Counter-clockwise rotation of every cell around the pivot.
    pub fn rotated_ccw(&self) -> Figure {
        Figure {
            cells: self.cells.iter().map(|c| c.rotated_ccw()).collect(),
        }
    }

    /// Anchor that centers the figure's bounding box in `board_width`
    /// columns and puts its topmost cell on row 0.
    ///
    /// The horizontal bias for odd/even widths comes from the truncating
    /// division; snapshot output depends on it, so it must not be "fixed"
    /// to rounding or euclidean division.
    pub fn spawn_anchor(&self, board_width: i32) -> Point {
        let (mut min_x, mut max_x, mut min_y) = (self.cells[0].x, self.cells[0].x, self.cells[0].y);
        for c in &self.cells[1..] {
            min_x = min_x.min(c.x);
            max_x = max_x.max(c.x);
            min_y = min_y.min(c.y);
        }
        let start_x = (board_width - (1 + max_x - min_x)) / 2;
        Point::new(start_x - min_x, -min_y)
    }
}

/// A single scripted directive.
///
/// `Q` rotates clockwise, `E` counter-clockwise; `A`/`D`/`S` shift left,
/// right, and down; `P` prints a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    RotateCw,
    RotateCcw,
    Print,
}

impl Command {
    /// Parse a command character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Command::MoveLeft),
            'D' => Some(Command::MoveRight),
            'S' => Some(Command::MoveDown),
            'Q' => Some(Command::RotateCw),
            'E' => Some(Command::RotateCcw),
            'P' => Some(Command::Print),
            _ => None,
        }
    }

    /// The wire character for this command.
    pub fn as_char(self) -> char {
        match self {
            Command::MoveLeft => 'A',
            Command::MoveRight => 'D',
            Command::MoveDown => 'S',
            Command::RotateCw => 'Q',
            Command::RotateCcw => 'E',
            Command::Print => 'P',
        }
    }

    /// Translation vector for shift commands, `None` for rotations and print.
    pub fn shift(self) -> Option<Point> {
        match self {
            Command::MoveLeft => Some(Point::new(-1, 0)),
            Command::MoveRight => Some(Point::new(1, 0)),
            Command::MoveDown => Some(Point::new(0, 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_is_componentwise() {
        let p = Point::new(3, -2).translate(Point::new(-1, 5));
        assert_eq!(p, Point::new(2, 3));
    }

    #[test]
    fn rotations_round_trip() {
        let f = Figure::new(vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
        ]);
        assert_eq!(f.rotated_cw().rotated_ccw(), f);
        assert_eq!(f.rotated_ccw().rotated_cw(), f);
    }

    #[test]
    fn four_clockwise_rotations_are_identity() {
        let f = Figure::new(vec![Point::new(1, 0), Point::new(0, 1), Point::new(-1, 2)]);
        let r4 = f.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(r4, f);
    }

    #[test]
    fn spawn_anchor_centers_single_cell() {
        let dot = Figure::new(vec![Point::new(0, 0)]);
        // (4 - 1) / 2 = 1
        assert_eq!(dot.spawn_anchor(4), Point::new(1, 0));
        // (9 - 1) / 2 = 4
        assert_eq!(dot.spawn_anchor(9), Point::new(4, 0));
    }

    #[test]
    fn spawn_anchor_compensates_negative_offsets() {
        let f = Figure::new(vec![Point::new(-1, -1), Point::new(0, -1), Point::new(0, 0)]);
        let anchor = f.spawn_anchor(8);
        // Bounding box is 2 wide: start_x = (8 - 2) / 2 = 3, shifted by -min_x.
        assert_eq!(anchor, Point::new(4, 1));
        // Topmost cell lands on row 0.
        let top = f
            .cells()
            .iter()
            .map(|c| c.translate(anchor).y)
            .min()
            .unwrap();
        assert_eq!(top, 0);
    }

    #[test]
    fn command_chars_round_trip() {
        for c in ['A', 'D', 'S', 'Q', 'E', 'P'] {
            let cmd = Command::from_char(c).unwrap();
            assert_eq!(cmd.as_char(), c);
        }
        assert_eq!(Command::from_char('X'), None);
        assert_eq!(Command::from_char('a'), None);
    }

    #[test]
    fn only_moves_carry_a_shift_vector() {
        assert_eq!(Command::MoveLeft.shift(), Some(Point::new(-1, 0)));
        assert_eq!(Command::MoveRight.shift(), Some(Point::new(1, 0)));
        assert_eq!(Command::MoveDown.shift(), Some(Point::new(0, 1)));
        assert_eq!(Command::RotateCw.shift(), None);
        assert_eq!(Command::RotateCcw.shift(), None);
        assert_eq!(Command::Print.shift(), None);
    }
}
