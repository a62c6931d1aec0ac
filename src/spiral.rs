//! Center-out square spiral numbering.
//!
//! The walk starts at the center cell heading right and turns
//! right -> up -> left -> down. Leg lengths run 1,1,2,2,3,3,... which is
//! tracked with two thresholds instead of precomputed legs: the number at
//! which the direction turns next, and the number at which the leg length
//! grows next.

use tracing::debug;

use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

// Indexed by `Direction as usize`. Up is toward row 0.
const DELTAS: [(isize, isize); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

impl Direction {
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        DELTAS[self as usize]
    }

    #[inline]
    pub fn next(self) -> Direction {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }

    /// Direction following `current`; the walk's first direction when `None`.
    pub fn after(current: Option<Direction>) -> Direction {
        current.map_or(Direction::Right, Direction::next)
    }
}

/// Column `x`, row `y`, origin top-left. Signed so the step past the last
/// written cell can leave the grid without wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    #[inline]
    pub fn step(self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Starting cell. Even sizes take the cell left of the lower-right middle.
pub fn center(size: usize) -> Position {
    let half = (size / 2) as isize;
    let x = if size % 2 == 1 { half } else { half - 1 };
    Position { x, y: half }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkState {
    pub pos: Position,
    pub dir: Direction,
    pub steps_in_one_direction: u64,
    pub next_direction_change: u64,
    pub next_steps_change: u64,
}

impl WalkState {
    pub fn new(size: usize) -> Self {
        let steps_in_one_direction = 1;
        Self {
            pos: center(size),
            dir: Direction::after(None),
            steps_in_one_direction,
            next_direction_change: 2,
            next_steps_change: steps_in_one_direction * 2 + 1,
        }
    }

    /// Bookkeeping after number `n` has been written: grow the leg, turn,
    /// then move one cell. The leg check runs first because the turn
    /// threshold advances by the possibly-grown leg length.
    fn advance(&mut self, n: u64) {
        if n == self.next_steps_change {
            self.steps_in_one_direction += 1;
            self.next_steps_change += 2 * self.steps_in_one_direction;
        }
        if n == self.next_direction_change {
            self.dir = self.dir.next();
            self.next_direction_change += self.steps_in_one_direction;
        }
        self.pos = self.pos.step(self.dir);
    }
}

/// Zeroed `size × size` grid plus the walk state positioned at its center.
pub fn init(size: usize) -> (Grid<u64>, WalkState) {
    let walk = WalkState::new(size);
    debug!(size, x = walk.pos.x, y = walk.pos.y, "spiral center");
    (Grid::square(size), walk)
}

/// Write 1..=size² along the spiral.
pub fn fill(grid: &mut Grid<u64>, mut walk: WalkState) {
    let total = (grid.w * grid.h) as u64;
    for n in 1..=total {
        grid.set(walk.pos.x as usize, walk.pos.y as usize, n);
        walk.advance(n);
    }
}

/// Numbered spiral for `size`.
pub fn spiral(size: usize) -> Grid<u64> {
    let (mut grid, walk) = init(size);
    fill(&mut grid, walk);
    grid
}
