/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  The simulation thread never calls in
/// here, so a render pass can only ever observe a state, not change it.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use crate::entities::{Game, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_SNAKE_HEAD: Color = Color::Green;
const C_SNAKE_BODY: Color = Color::DarkGreen;
const C_FOOD: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Rows of chrome above the board: HUD on row 0, top border on row 1.
const BOARD_TOP: u16 = 2;
/// Columns left of the board: the left border on column 0.
const BOARD_LEFT: u16 = 1;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &Game) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state)?;
    draw_border(out, state)?;
    draw_food(out, state)?;
    draw_snake(out, state)?;
    draw_controls_hint(out, state)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state)?;
    }

    // Park cursor below the frame and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, BOARD_TOP + state.height as u16 + 2))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &Game) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(BOARD_LEFT, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", state.score)))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &Game) -> std::io::Result<()> {
    let w = state.width as usize;
    let h = state.height as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(BOARD_LEFT - 1, BOARD_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    for row in 0..h {
        out.queue(cursor::MoveTo(BOARD_LEFT - 1, BOARD_TOP + row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(BOARD_LEFT + w as u16, BOARD_TOP + row))?;
        out.queue(Print("│"))?;
    }

    out.queue(cursor::MoveTo(BOARD_LEFT - 1, BOARD_TOP + h))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_snake<W: Write>(out: &mut W, state: &Game) -> std::io::Result<()> {
    for (i, seg) in state.snake.body.iter().enumerate() {
        // Segments are always on-board while the game runs; skip any
        // that are not rather than wrap around the terminal.
        if seg.x < 0 || seg.x >= state.width || seg.y < 0 || seg.y >= state.height {
            continue;
        }
        out.queue(cursor::MoveTo(
            BOARD_LEFT + seg.x as u16,
            BOARD_TOP + seg.y as u16,
        ))?;
        if i == 0 {
            out.queue(style::SetForegroundColor(C_SNAKE_HEAD))?;
            out.queue(Print("█"))?;
        } else {
            out.queue(style::SetForegroundColor(C_SNAKE_BODY))?;
            out.queue(Print("o"))?;
        }
    }
    Ok(())
}

fn draw_food<W: Write>(out: &mut W, state: &Game) -> std::io::Result<()> {
    if !state.food.exists {
        return Ok(());
    }
    out.queue(cursor::MoveTo(
        BOARD_LEFT + state.food.pos.x as u16,
        BOARD_TOP + state.food.pos.y as u16,
    ))?;
    out.queue(style::SetForegroundColor(C_FOOD))?;
    out.queue(Print("*"))?;
    Ok(())
}

// ── Controls hint ─────────────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &Game) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(BOARD_LEFT, BOARD_TOP + state.height as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W/A/S/D : Move   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &Game) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);
    let lines: &[&str] = &[
        "╔════════════════════╗",
        "║    GAME  OVER      ║",
        "╚════════════════════╝",
    ];

    let cx = BOARD_LEFT + state.width as u16 / 2;
    let start_row = BOARD_TOP + (state.height as u16 / 2).saturating_sub(2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + lines.len() as u16))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    Ok(())
}
