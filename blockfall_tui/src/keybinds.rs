use std::collections::HashMap;

use blockfall_engine::Command;
use crossterm::event::{KeyCode, KeyModifiers};

pub type Keybinds = HashMap<(KeyCode, KeyModifiers), Command>;

/// Normalizes a key event so lookups do not depend on incidental details of
/// how the terminal reported it.
pub fn normalize((mut code, modifiers): (KeyCode, KeyModifiers)) -> (KeyCode, KeyModifiers) {
    // Normalize character keycodes to store a lowercase `char`.
    if let KeyCode::Char(ref mut char) = code {
        *char = char.to_ascii_lowercase();
    }
    (code, modifiers)
}

/// The bindings the original frontend shipped: arrows to steer, space to
/// slam, plus the three session controls.
pub fn default_keybinds() -> Keybinds {
    let binds: [((KeyCode, KeyModifiers), Command); 8] = [
        (KeyCode::Left, Command::MoveLeft),
        (KeyCode::Right, Command::MoveRight),
        (KeyCode::Up, Command::Rotate),
        (KeyCode::Down, Command::SoftDrop),
        (KeyCode::Char(' '), Command::HardDrop),
        (KeyCode::Enter, Command::Start),
        (KeyCode::Char('p'), Command::Pause),
        (KeyCode::Char('r'), Command::Reset),
    ]
    .map(|(k, c)| ((k, KeyModifiers::NONE), c));
    HashMap::from(binds)
}

pub fn vim_keybinds() -> Keybinds {
    let binds: [((KeyCode, KeyModifiers), Command); 8] = [
        (KeyCode::Char('h'), Command::MoveLeft),
        (KeyCode::Char('l'), Command::MoveRight),
        (KeyCode::Char('k'), Command::Rotate),
        (KeyCode::Char('j'), Command::SoftDrop),
        (KeyCode::Char(' '), Command::HardDrop),
        (KeyCode::Enter, Command::Start),
        (KeyCode::Char('p'), Command::Pause),
        (KeyCode::Char('r'), Command::Reset),
    ]
    .map(|(k, c)| ((k, KeyModifiers::NONE), c));
    HashMap::from(binds)
}

/// Renders a "key  action" legend for the sidebar, one line per command.
pub fn legend(keybinds: &Keybinds) -> Vec<String> {
    const ORDER: [(Command, &str); 8] = [
        (Command::MoveLeft, "move left"),
        (Command::MoveRight, "move right"),
        (Command::Rotate, "rotate"),
        (Command::SoftDrop, "soft drop"),
        (Command::HardDrop, "hard drop"),
        (Command::Start, "start"),
        (Command::Pause, "pause"),
        (Command::Reset, "reset"),
    ];
    ORDER
        .iter()
        .map(|(command, label)| {
            let mut keys: Vec<String> = keybinds
                .iter()
                .filter(|(_, bound)| *bound == command)
                .map(|((code, _), _)| key_name(*code))
                .collect();
            keys.sort();
            format!("{:<7} {label}", keys.join("/"))
        })
        .collect()
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Left => "←".to_owned(),
        KeyCode::Right => "→".to_owned(),
        KeyCode::Up => "↑".to_owned(),
        KeyCode::Down => "↓".to_owned(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Char(' ') => "space".to_owned(),
        KeyCode::Char(char) => char.to_string(),
        other => format!("{other:?}").to_lowercase(),
    }
}
