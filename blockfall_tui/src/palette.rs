use std::collections::HashMap;

use crossterm::style::Color;

pub type Palette = HashMap<u8, Color>;

/// Classic piece colors, one per tile id, for truecolor terminals.
pub fn fullcolor_palette() -> Palette {
    #[rustfmt::skip]
    const COLORS_DEFAULT: [(u8, Color); 7] = [
        (1, Color::Rgb { r:   0, g: 240, b: 240 }), // #00F0F0 I
        (2, Color::Rgb { r: 240, g: 240, b:   0 }), // #F0F000 O
        (3, Color::Rgb { r: 160, g:   0, b: 240 }), // #A000F0 T
        (4, Color::Rgb { r:   0, g: 240, b:   0 }), // #00F000 S
        (5, Color::Rgb { r: 240, g:   0, b:   0 }), // #F00000 Z
        (6, Color::Rgb { r:   0, g:   0, b: 240 }), // #0000F0 J
        (7, Color::Rgb { r: 240, g: 160, b:   0 }), // #F0A000 L
    ];
    HashMap::from(COLORS_DEFAULT)
}

/// Fallback for terminals limited to the basic 16 ANSI colors.
pub fn color16_palette() -> Palette {
    const COLORS_COLOR16: [(u8, Color); 7] = [
        (1, Color::Cyan),
        (2, Color::Yellow),
        (3, Color::Magenta),
        (4, Color::Green),
        (5, Color::Red),
        (6, Color::Blue),
        (7, Color::DarkYellow),
    ];
    HashMap::from(COLORS_COLOR16)
}
