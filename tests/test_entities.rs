use snake_game::entities::*;
use snake_game::recorder::InputRecorder;

#[test]
fn direction_opposites() {
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Down.opposite(), Direction::Up);
    assert_eq!(Direction::Left.opposite(), Direction::Right);
    assert_eq!(Direction::Right.opposite(), Direction::Left);
}

#[test]
fn position_step_unit_vectors() {
    let p = Position { x: 5, y: 5 };
    assert_eq!(p.step(Direction::Up), Position { x: 5, y: 4 });
    assert_eq!(p.step(Direction::Down), Position { x: 5, y: 6 });
    assert_eq!(p.step(Direction::Left), Position { x: 4, y: 5 });
    assert_eq!(p.step(Direction::Right), Position { x: 6, y: 5 });
}

#[test]
fn position_step_may_leave_the_board() {
    // Bounds are the caller's concern — stepping off the origin is fine
    let p = Position { x: 0, y: 0 };
    assert_eq!(p.step(Direction::Left), Position { x: -1, y: 0 });
    assert_eq!(p.step(Direction::Up), Position { x: 0, y: -1 });
}

#[test]
fn snake_head_and_occupancy() {
    let snake = Snake {
        body: vec![
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
        ],
        dir: Direction::Right,
    };
    assert_eq!(snake.head(), Position { x: 3, y: 3 });
    assert!(snake.occupies(Position { x: 3, y: 3 })); // head counts
    assert!(snake.occupies(Position { x: 1, y: 3 })); // tail counts
    assert!(!snake.occupies(Position { x: 4, y: 3 }));
}

#[test]
fn game_clone_is_independent() {
    let original = Game {
        snake: Snake {
            body: vec![Position { x: 3, y: 3 }],
            dir: Direction::Right,
        },
        food: Food { pos: Position { x: 0, y: 0 }, exists: true },
        status: GameStatus::Playing,
        score: 0,
        width: 30,
        height: 20,
        recorder: InputRecorder::new(),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.score = 999;
    cloned.snake.body.push(Position { x: 4, y: 3 });
    cloned.recorder.record('w', 0.1);

    assert_eq!(original.score, 0);
    assert_eq!(original.snake.body.len(), 1);
    assert!(original.recorder.is_empty());
}
