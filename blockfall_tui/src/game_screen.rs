use std::io::{self, Write};

use blockfall_engine::{Game, Snapshot};
use crossterm::{
    cursor::MoveTo,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::palette::Palette;

// Cells are two characters wide so the board looks roughly square.
const GRID_W: u16 = 2 * Game::WIDTH as u16 + 2;
const SIDEBAR_W: u16 = 18;
const VIEW_W: u16 = GRID_W + 2 + SIDEBAR_W;
const VIEW_H: u16 = Game::HEIGHT as u16 + 2;

/// Where to put the top-left corner of the view to center it.
fn view_origin() -> (u16, u16) {
    let (w_console, h_console) = terminal::size().unwrap_or((0, 0));
    (
        w_console.saturating_sub(VIEW_W) / 2,
        h_console.saturating_sub(VIEW_H) / 2,
    )
}

/// Draws the whole view: bordered grid, sidebar, and status banner.
///
/// The frame is drawn line by line over the previous one, so no clear (and no
/// flicker) is needed between transitions.
pub fn draw<T: Write>(
    term: &mut T,
    snapshot: &Snapshot,
    palette: &Palette,
    legend: &[String],
    seed: u64,
) -> io::Result<()> {
    let (ox, oy) = view_origin();

    term.queue(MoveTo(ox, oy))?
        .queue(Print(format!("┌{}┐", "─".repeat(2 * Game::WIDTH))))?;

    for (y, line) in snapshot.grid.iter().enumerate() {
        term.queue(MoveTo(ox, oy + 1 + y as u16))?.queue(Print("│"))?;
        for cell in line {
            match cell {
                Some(tile_type_id) => {
                    let color = palette
                        .get(&tile_type_id.get())
                        .copied()
                        .unwrap_or(Color::White);
                    term.queue(SetForegroundColor(color))?.queue(Print("██"))?;
                }
                None => {
                    term.queue(SetForegroundColor(Color::DarkGrey))?
                        .queue(Print(" ·"))?;
                }
            }
        }
        term.queue(ResetColor)?.queue(Print("│"))?;
    }

    term.queue(MoveTo(ox, oy + 1 + Game::HEIGHT as u16))?
        .queue(Print(format!("└{}┘", "─".repeat(2 * Game::WIDTH))))?;

    draw_sidebar(term, snapshot, legend, seed, (ox + GRID_W + 2, oy + 1))?;
    draw_banner(term, snapshot, (ox, oy))?;

    term.flush()
}

fn draw_sidebar<T: Write>(
    term: &mut T,
    snapshot: &Snapshot,
    legend: &[String],
    seed: u64,
    (x, y): (u16, u16),
) -> io::Result<()> {
    term.queue(MoveTo(x, y))?
        .queue(SetAttribute(Attribute::Bold))?
        .queue(Print("B L O C K F A L L"))?
        .queue(SetAttribute(Attribute::Reset))?;

    // Pad the numbers so shrinking values leave no stale digits behind.
    term.queue(MoveTo(x, y + 2))?
        .queue(Print(format!("score  {:<10}", snapshot.score)))?;
    term.queue(MoveTo(x, y + 3))?
        .queue(Print(format!("level  {:<10}", snapshot.level)))?;
    term.queue(MoveTo(x, y + 4))?
        .queue(Print(format!("seed   {seed}")))?;

    for (i, line) in legend.iter().enumerate() {
        term.queue(MoveTo(x, y + 6 + i as u16))?
            .queue(Print(line))?;
    }
    let quit_line = legend.len() as u16;
    term.queue(MoveTo(x, y + 6 + quit_line))?
        .queue(Print("esc     quit"))?;

    Ok(())
}

/// Overlays the PAUSED / GAME OVER banner onto the middle of the grid.
fn draw_banner<T: Write>(term: &mut T, snapshot: &Snapshot, (ox, oy): (u16, u16)) -> io::Result<()> {
    let banner = if snapshot.game_over {
        Some(("GAME OVER", "r to reset"))
    } else if snapshot.paused {
        Some(("PAUSED", "enter or p to play"))
    } else {
        None
    };
    let Some((title, hint)) = banner else {
        return Ok(());
    };

    let y_mid = oy + 1 + Game::HEIGHT as u16 / 2;
    for (dy, text) in [(0, title), (1, hint)] {
        let x = ox + 1 + (2 * Game::WIDTH as u16).saturating_sub(text.len() as u16) / 2;
        term.queue(MoveTo(x, y_mid + dy))?
            .queue(SetAttribute(Attribute::Reverse))?
            .queue(Print(text))?
            .queue(SetAttribute(Attribute::Reset))?;
    }

    Ok(())
}
