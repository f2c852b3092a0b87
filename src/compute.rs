/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `Game` (and, where needed, an RNG handle and the elapsed-seconds
/// clock) and returns a brand-new `Game`.  Side effects are limited to
/// the injected RNG, so a seeded `StdRng` and a fixed clock make every
/// transition deterministic in tests.

use rand::Rng;

use crate::entities::{Direction, Food, Game, GameStatus, Position, Snake};
use crate::recorder::{self, InputRecorder};

// ── Board constants ──────────────────────────────────────────────────────────

pub const WIDTH: i32 = 30;
pub const HEIGHT: i32 = 20;
pub const INIT_SNAKE_LENGTH: usize = 3;

/// Score awarded per food eaten.
pub const FOOD_SCORE: u32 = 10;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: a length-3 snake centred on the board,
/// facing right with its body trailing leftward, and one food cell
/// already placed.
pub fn init_state(width: i32, height: i32, rng: &mut impl Rng) -> Game {
    let mid = Position { x: width / 2, y: height / 2 };
    let body: Vec<Position> = (0..INIT_SNAKE_LENGTH as i32)
        .map(|i| Position { x: mid.x - i, y: mid.y })
        .collect();
    let snake = Snake { body, dir: Direction::Right };
    let food = generate_food(&snake, width, height, rng);

    Game {
        snake,
        food,
        status: GameStatus::Playing,
        score: 0,
        width,
        height,
        recorder: InputRecorder::new(),
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Request a direction change.  Reversing 180° in one tick would drive
/// the head straight into the neck, so the exact opposite of the
/// current direction is ignored; anything else (including the current
/// direction itself) is accepted and takes effect next tick.
pub fn set_direction(state: &Game, dir: Direction) -> Game {
    if dir == state.snake.dir.opposite() {
        return state.clone();
    }
    Game {
        snake: Snake { dir, ..state.snake.clone() },
        ..state.clone()
    }
}

/// Feed one raw key through the dispatcher.  Every key is recorded with
/// its timestamp — valid or not — then mapped to a command:
/// W/A/S/D steer, Q quits immediately, everything else is ignored.
pub fn apply_key(state: &Game, key: char, now: f64) -> Game {
    let mut state = state.clone();
    state.recorder.record(key, now);

    match key {
        'w' | 'W' => set_direction(&state, Direction::Up),
        's' | 'S' => set_direction(&state, Direction::Down),
        'a' | 'A' => set_direction(&state, Direction::Left),
        'd' | 'D' => set_direction(&state, Direction::Right),
        'q' | 'Q' => Game { status: GameStatus::GameOver, ..state },
        _ => state,
    }
}

/// One simulation step as the scheduler runs it: dispatch at most one
/// pending key, then advance a tick.  Surplus presses stay queued for
/// later steps, so two quick perpendicular turns (say Up then Left on a
/// Right-facing snake) land on successive ticks and each is validated
/// against the direction actually in effect — they can never compose
/// into a 180° reversal inside a single move.
pub fn step(state: &Game, pending_key: Option<char>, rng: &mut impl Rng, now: f64) -> Game {
    let state = match pending_key {
        Some(key) => apply_key(state, key, now),
        None => state.clone(),
    };
    tick(&state, rng, now)
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  All randomness (food placement)
/// comes through `rng`; `now` is the elapsed-seconds clock used for the
/// synthetic food record.
pub fn tick(state: &Game, rng: &mut impl Rng, now: f64) -> Game {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    let new_head = state.snake.head().step(state.snake.dir);

    // Wall collision: the head left the board.  Snake and score keep
    // their pre-update values; the attempted head is discarded.
    if new_head.x < 0 || new_head.x >= state.width || new_head.y < 0 || new_head.y >= state.height
    {
        return Game { status: GameStatus::GameOver, ..state.clone() };
    }

    // Self collision, checked against the full pre-move body.  The tail
    // cell about to be vacated still counts as occupied this tick.
    if is_collision(new_head, state) {
        return Game { status: GameStatus::GameOver, ..state.clone() };
    }

    let ate = new_head == state.food.pos;

    // Shift every segment one slot tailward and put the new head in
    // front.  Without food the tail cell drops off; with food it stays,
    // which is exactly the +1 growth.
    let mut body = Vec::with_capacity(state.snake.body.len() + 1);
    body.push(new_head);
    if ate {
        body.extend_from_slice(&state.snake.body);
    } else {
        body.extend_from_slice(&state.snake.body[..state.snake.body.len() - 1]);
    }
    let snake = Snake { body, dir: state.snake.dir };

    let mut recorder = state.recorder.clone();
    let (food, score) = if ate {
        recorder.record(recorder::FOOD_KEY, now);
        (
            generate_food(&snake, state.width, state.height, rng),
            state.score + FOOD_SCORE,
        )
    } else {
        (state.food, state.score)
    };

    Game {
        snake,
        food,
        score,
        recorder,
        status: GameStatus::Playing,
        width: state.width,
        height: state.height,
    }
}

// ── Queries & food placement ─────────────────────────────────────────────────

/// True if `pos` lands on any current snake segment.
pub fn is_collision(pos: Position, state: &Game) -> bool {
    state.snake.occupies(pos)
}

/// Rejection-sample a board cell not occupied by the snake.  Loops
/// until a free cell turns up, so a board with no free cell stalls
/// forever — acceptable here because the snake would have to cover all
/// `width * height` cells first.
pub fn generate_food(snake: &Snake, width: i32, height: i32, rng: &mut impl Rng) -> Food {
    loop {
        let pos = Position {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
        };
        if !snake.occupies(pos) {
            return Food { pos, exists: true };
        }
    }
}
