//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36), // Background
        bg1: Color::Rgb(0x21, 0x22, 0x2c),
        bg2: Color::Rgb(0x44, 0x47, 0x5a), // Current Line
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2), // Foreground
        fg1: Color::Rgb(0xe9, 0xe9, 0xea),
        muted: Color::Rgb(0x62, 0x72, 0xa4), // Comment
        red: Color::Rgb(0xff, 0x55, 0x55),
        yellow: Color::Rgb(0xf1, 0xfa, 0x8c),
        green: Color::Rgb(0x50, 0xfa, 0x7b),
        blue: Color::Rgb(0x8b, 0xe9, 0xfd),   // Cyan
        purple: Color::Rgb(0xbd, 0x93, 0xf9),
        accent: Color::Rgb(0xff, 0x79, 0xc6), // Pink
        highlight: Color::Rgb(0x44, 0x47, 0x5a),
        progress: Color::Rgb(0xbd, 0x93, 0xf9),
    }
}
