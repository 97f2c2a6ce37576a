use std::{
    sync::mpsc::{SendError, Sender},
    thread::{self, JoinHandle},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keybinds::{normalize, Keybinds};

/// What the input thread distills raw terminal events down to.
pub enum TermSignal {
    /// A recognized game input.
    Play(blockfall_engine::Command),
    /// The terminal was resized; the whole view needs redrawing.
    Redraw,
    /// The player asked to leave the program.
    Quit,
}

/// Spawns the thread that owns blocking terminal reads and forwards mapped
/// commands to the game loop.
///
/// The thread stops on its own after sending [`TermSignal::Quit`] or once the
/// receiving end hangs up.
pub fn spawn(sender: Sender<TermSignal>, keybinds: Keybinds) -> JoinHandle<()> {
    thread::spawn(move || {
        'detect_events: loop {
            // Read event.
            match event::read() {
                Ok(event) => {
                    let mut stop_thread = false;

                    let signal = match event {
                        Event::Key(KeyEvent {
                            code,
                            modifiers,
                            kind,
                            ..
                        }) => {
                            // Without keyboard enhancement we only ever see
                            // presses and repeats; skip stray release events
                            // so a key never fires twice.
                            if !matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                                continue 'detect_events;
                            }

                            let escape = matches!(code, KeyCode::Esc);
                            let ctrl_c = matches!(code, KeyCode::Char('c'))
                                && matches!(modifiers, KeyModifiers::CONTROL);
                            if escape || ctrl_c {
                                stop_thread = true;
                                TermSignal::Quit
                            } else {
                                match keybinds.get(&normalize((code, modifiers))) {
                                    Some(&command) => TermSignal::Play(command),
                                    None => continue 'detect_events,
                                }
                            }
                        }

                        Event::Resize(_, _) => TermSignal::Redraw,

                        // Not an event we care about.
                        _ => continue 'detect_events,
                    };

                    // Send signal.
                    match sender.send(signal) {
                        Ok(()) => {}
                        Err(SendError(_signal_which_failed_to_transmit)) => {
                            break 'detect_events;
                        }
                    }

                    if stop_thread {
                        break 'detect_events;
                    }
                }

                Err(_e) => {}
            }
        }
    })
}
