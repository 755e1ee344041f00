//! Four-in-a-row detection anchored on the most recently placed disc.
//!
//! Only lines through the last disc are inspected, so each move costs four
//! short walks outward from one cell instead of a rescan of the board.

use super::board::{Board, COLS, ROWS};
use super::player::Seat;
use tracing::instrument;

/// Discs needed in an unbroken line to win.
pub const WIN_LENGTH: usize = 4;

/// A board coordinate. `y` 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinDirection {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Rising to the right (↗)
    Diagonal,
    /// Falling to the right (↘)
    AntiDiagonal,
}

impl WinDirection {
    /// Precedence used when a move completes more than one line.
    pub const ALL: [WinDirection; 4] = [
        WinDirection::Horizontal,
        WinDirection::Vertical,
        WinDirection::Diagonal,
        WinDirection::AntiDiagonal,
    ];

    /// One step "forward" along the line as `(dx, dy)`.
    fn step(self) -> (isize, isize) {
        match self {
            WinDirection::Horizontal => (1, 0),
            WinDirection::Vertical => (0, 1),
            WinDirection::Diagonal => (1, 1),
            WinDirection::AntiDiagonal => (1, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WinDirection::Horizontal => "horizontal",
            WinDirection::Vertical => "vertical",
            WinDirection::Diagonal => "diagonal",
            WinDirection::AntiDiagonal => "anti-diagonal",
        }
    }
}

/// A completed winning line. `start` and `end` are the inclusive ends of the
/// whole unbroken run; `start` is the end with the smaller `x` (smaller `y`
/// for vertical lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinInfo {
    pub direction: WinDirection,
    pub turn: usize,
    pub start: Coord,
    pub end: Coord,
}

impl WinInfo {
    /// Number of discs in the winning run
    pub fn run_length(&self) -> usize {
        self.start.x.abs_diff(self.end.x).max(self.start.y.abs_diff(self.end.y)) + 1
    }

    /// Every cell of the run, from `start` to `end`
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (dx, dy) = self.direction.step();
        let start = self.start;
        (0..self.run_length() as isize).map(move |i| {
            Coord::new(
                (start.x as isize + dx * i) as usize,
                (start.y as isize + dy * i) as usize,
            )
        })
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }
}

/// Check whether the last disc on the board completed a line for its owner.
///
/// Directions are tried in [`WinDirection::ALL`] order and the first winning
/// one is reported. Returns `None` on an empty board.
#[instrument(level = "trace", skip(board))]
pub fn find_win(board: &Board, turn: usize) -> Option<WinInfo> {
    let last = board.last_disc()?;
    let anchor = Coord::new(last.x, last.y);

    WinDirection::ALL.into_iter().find_map(|direction| {
        let (dx, dy) = direction.step();
        let start = walk(board, anchor, last.owner, (-dx, -dy));
        let end = walk(board, anchor, last.owner, (dx, dy));
        let info = WinInfo {
            direction,
            turn,
            start,
            end,
        };
        (info.run_length() >= WIN_LENGTH).then_some(info)
    })
}

/// Follow same-owner discs from `from` and return the last one reached.
fn walk(board: &Board, from: Coord, owner: Seat, (dx, dy): (isize, isize)) -> Coord {
    let mut at = from;
    loop {
        let x = at.x as isize + dx;
        let y = at.y as isize + dy;
        if x < 0 || y < 0 || x >= COLS as isize || y >= ROWS as isize {
            return at;
        }
        let next = Coord::new(x as usize, y as usize);
        if board.get(next.x, next.y) != Some(owner) {
            return at;
        }
        at = next;
    }
}
