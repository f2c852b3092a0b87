use std::fs;
use std::io::{stdout, BufWriter};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use snake_game::cipher;
use snake_game::compute::{self, step};
use snake_game::display;
use snake_game::entities::{Game, GameStatus};

/// Simulation step — also sets the overall game speed.
const TICK: Duration = Duration::from_millis(100);

/// Render refresh, independent of (not phase-locked to) the tick.
const RENDER_INTERVAL: Duration = Duration::from_millis(100);

/// How long the final game-over frame stays on screen before the
/// alternate screen is torn down.
const GAME_OVER_PAUSE: Duration = Duration::from_millis(1500);

const LOG_PATH: &str = "./input_record.txt";
const ENC_PATH: &str = "./input_record.enc";
const LOG_PASSWORD: &[u8] = b"SnakeGameSecretPassword";

// ── Render thread ─────────────────────────────────────────────────────────────

/// Spawn the render loop: lock, draw a consistent snapshot, unlock,
/// sleep.  Shutdown is cooperative — the flag is checked once per
/// iteration, so worst-case stop latency is one `RENDER_INTERVAL`.
fn spawn_render_thread(
    game: Arc<Mutex<Game>>,
    running: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut out = BufWriter::new(stdout());
        while running.load(Ordering::Relaxed) {
            {
                let state = game.lock().expect("game state mutex poisoned");
                let _ = display::render(&mut out, &state);
            }
            thread::sleep(RENDER_INTERVAL);
        }
    })
}

// ── Simulation loop ───────────────────────────────────────────────────────────

/// Run the fixed-rate simulation until game over.  This thread is the
/// sole writer of game state: it fetches at most one pending key event,
/// applies it, and runs one tick — all inside a single lock hold so the
/// render thread only ever sees completed tick boundaries.  Surplus key
/// presses stay queued in the channel for later ticks; draining them
/// all at once would let two quick perpendicular turns compose into a
/// 180° reversal within a single move.
fn game_loop(game: &Arc<Mutex<Game>>, rx: &mpsc::Receiver<Event>, start: Instant) {
    let mut rng = thread_rng();

    loop {
        {
            let mut state = game.lock().expect("game state mutex poisoned");
            let now = start.elapsed().as_secs_f64();

            // Poll for at most one key event (non-blocking); non-key
            // events are skipped without consuming this tick's slot.
            let mut key: Option<char> = None;
            while let Ok(ev) = rx.try_recv() {
                let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                    continue;
                };
                if kind == KeyEventKind::Release {
                    continue;
                }
                match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        state.status = GameStatus::GameOver;
                    }
                    KeyCode::Esc => {
                        state.status = GameStatus::GameOver;
                    }
                    KeyCode::Char(c) => {
                        key = Some(c);
                    }
                    _ => {}
                }
                break;
            }

            *state = step(&state, key, &mut rng, now);

            if state.status == GameStatus::GameOver {
                break;
            }
        }
        thread::sleep(TICK);
    }
}

// ── Post-game persistence ─────────────────────────────────────────────────────

/// Write the input log, then replace it with its encrypted form.  All
/// single-attempt and best-effort: the game is already over, so a
/// failure here only costs log durability, never correctness.  The
/// plaintext is removed only after encryption succeeds.
fn save_input_record(game: &Game) {
    let log_text = game.recorder.to_log_text();

    if let Err(e) = fs::write(LOG_PATH, &log_text) {
        eprintln!("Error: cannot write {}: {}", LOG_PATH, e);
        return;
    }
    println!("Input record saved to {}", LOG_PATH);

    match cipher::encrypt_to_file(log_text.as_bytes(), Path::new(ENC_PATH), LOG_PASSWORD) {
        Ok(()) => {
            let _ = fs::remove_file(LOG_PATH);
            println!("Input record encrypted and saved to {}", ENC_PATH);
        }
        Err(e) => {
            // Keep the plaintext on disk so nothing is lost
            eprintln!("Failed to encrypt input record: {}", e);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let mut out = stdout();

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending
    // them through a channel so the simulation loop polls without ever
    // blocking on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let start = Instant::now();
    let game = Arc::new(Mutex::new(compute::init_state(
        compute::WIDTH,
        compute::HEIGHT,
        &mut thread_rng(),
    )));

    let running = Arc::new(AtomicBool::new(true));
    let render_handle = spawn_render_thread(Arc::clone(&game), Arc::clone(&running));

    game_loop(&game, &rx, start);

    // Signal the render thread and wait for it before touching the
    // terminal again.
    running.store(false, Ordering::Relaxed);
    let _ = render_handle.join();

    // The render thread may have been parked mid-sleep when the game
    // ended, so draw one deliberate game-over frame and let the player
    // read it before the alternate screen is torn down.
    {
        let state = game.lock().expect("game state mutex poisoned");
        let mut frame_out = BufWriter::new(stdout());
        let _ = display::render(&mut frame_out, &state);
    }
    thread::sleep(GAME_OVER_PAUSE);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let final_state = game.lock().expect("game state mutex poisoned");
    println!("\nGame Over!!! Score is {}", final_state.score);
    save_input_record(&final_state);

    Ok(())
}
