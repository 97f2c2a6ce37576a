use std::{
    io::{self, Write},
    sync::mpsc,
    time::{Duration, Instant},
};

use blockfall_engine::Game;
use crossterm::{
    cursor, style,
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};

use crate::{
    game_screen,
    input::{self, TermSignal},
    keybinds::{self, Keybinds},
    palette::{self, Palette},
};

/// Owns the terminal, the game, and the main react-and-render loop.
///
/// All state transitions happen on this thread: player commands arrive over a
/// channel from the input thread, and the gravity tick fires when the channel
/// read times out against the current gravity deadline. The game itself is
/// never touched from anywhere else.
pub struct Application<T: Write> {
    term: T,
    game: Game,
    keybinds: Keybinds,
    palette: Palette,
}

impl<T: Write> Drop for Application<T> {
    fn drop(&mut self) {
        // (Try to) undo terminal setup.
        let _ = terminal::disable_raw_mode();
        let _ = self.term.execute(style::ResetColor);
        let _ = self.term.execute(cursor::Show);
        let _ = self.term.execute(terminal::LeaveAlternateScreen);
    }
}

impl<T: Write> Application<T> {
    pub fn new(mut term: T, seed: Option<u64>, vim_keys: bool, basic_colors: bool) -> Self {
        // Console prologue: Initialization.
        let _v = term.execute(terminal::EnterAlternateScreen);
        let _v = term.execute(terminal::SetTitle("Blockfall"));
        let _v = term.execute(cursor::Hide);
        let _v = terminal::enable_raw_mode();

        let mut builder = Game::builder();
        if let Some(seed) = seed {
            builder.seed(seed);
        }

        Self {
            term,
            game: builder.build(),
            keybinds: if vim_keys {
                keybinds::vim_keybinds()
            } else {
                keybinds::default_keybinds()
            },
            palette: if basic_colors {
                palette::color16_palette()
            } else {
                palette::fullcolor_palette()
            },
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        // Input events are read on their own thread so this one can block on
        // the gravity deadline and still react to keys instantly.
        let (sender, receiver) = mpsc::channel();
        let _input_thread = input::spawn(sender, self.keybinds.clone());

        let legend = keybinds::legend(&self.keybinds);

        self.term.execute(Clear(ClearType::All))?;

        // The armed gravity timer: interval and next deadline. Disarmed while
        // the game is paused or over; re-armed whenever the interval the
        // engine reports changes (i.e. on level change and on resume).
        let mut gravity: Option<(Duration, Instant)> = None;

        loop {
            // Hand the presentation its snapshot after every transition.
            game_screen::draw(
                &mut self.term,
                &self.game.snapshot(),
                &self.palette,
                &legend,
                self.game.seed(),
            )?;

            match self.game.gravity_interval() {
                None => gravity = None,
                Some(interval) => match gravity {
                    Some((armed, _)) if armed == interval => {}
                    _ => gravity = Some((interval, Instant::now() + interval)),
                },
            }

            let signal = match gravity {
                Some((interval, deadline)) => {
                    let budget = deadline.saturating_duration_since(Instant::now());
                    match receiver.recv_timeout(budget) {
                        Ok(signal) => signal,
                        Err(mpsc::RecvTimeoutError::Timeout) => {
                            // Deadline reached: this is the gravity tick.
                            self.game.tick();
                            gravity = Some((interval, deadline + interval));
                            continue;
                        }
                        Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    }
                }
                // Timer disarmed: nothing to do but wait for the player.
                None => match receiver.recv() {
                    Ok(signal) => signal,
                    Err(mpsc::RecvError) => break,
                },
            };

            match signal {
                TermSignal::Play(command) => self.game.handle(command),
                TermSignal::Redraw => {
                    self.term.execute(Clear(ClearType::All))?;
                }
                TermSignal::Quit => break,
            }
        }

        Ok(())
    }
}
