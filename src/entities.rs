/// All game entity types — pure data plus small geometric helpers.

use crate::recorder::InputRecorder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180°-reversed direction, used by the no-instant-reversal rule.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Board geometry ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The neighbouring cell one step in `dir`.  May leave the board;
    /// bounds are the caller's concern (that is how wall collisions are
    /// detected).
    pub fn step(&self, dir: Direction) -> Position {
        match dir {
            Direction::Up => Position { x: self.x, y: self.y - 1 },
            Direction::Down => Position { x: self.x, y: self.y + 1 },
            Direction::Left => Position { x: self.x - 1, y: self.y },
            Direction::Right => Position { x: self.x + 1, y: self.y },
        }
    }
}

// ── Snake & food ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Snake {
    /// Body segments, head at index 0, tail last.
    pub body: Vec<Position>,
    /// Direction the next tick will move the head in.
    pub dir: Direction,
}

impl Snake {
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// True if any segment (head included) occupies `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Food {
    pub pos: Position,
    pub exists: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original; the single live
/// instance is shared between the simulation and render threads behind
/// a mutex.
#[derive(Clone, Debug)]
pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub status: GameStatus,
    pub score: u32,
    /// Board width in cells; head x is valid in `0..width`.
    pub width: i32,
    /// Board height in cells; head y is valid in `0..height`.
    pub height: i32,
    /// Timestamped log of every key pressed (plus synthetic food events).
    pub recorder: InputRecorder,
}
