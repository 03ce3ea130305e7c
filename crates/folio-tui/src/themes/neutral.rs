//! Neutral themes, the default look of the site

use ratatui::style::Color;
use crate::theme::Theme;

/// Neutral dark: neutral-950 background, violet to blue accents
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x0a, 0x0a, 0x0a), // neutral-950
        bg1: Color::Rgb(0x17, 0x17, 0x17), // neutral-900
        bg2: Color::Rgb(0x26, 0x26, 0x26), // neutral-800
        fg0: Color::Rgb(0xfa, 0xfa, 0xfa),
        fg1: Color::Rgb(0xd4, 0xd4, 0xd4), // neutral-300
        muted: Color::Rgb(0x73, 0x73, 0x73), // neutral-500
        red: Color::Rgb(0xf8, 0x71, 0x71),
        yellow: Color::Rgb(0xfa, 0xcc, 0x15),
        green: Color::Rgb(0x4a, 0xde, 0x80),
        blue: Color::Rgb(0x3b, 0x82, 0xf6),   // blue-500
        purple: Color::Rgb(0xa8, 0x55, 0xf7), // purple-500
        accent: Color::Rgb(0x8b, 0x5c, 0xf6), // violet-500
        highlight: Color::Rgb(0x26, 0x26, 0x26),
        progress: Color::Rgb(0xa8, 0x55, 0xf7),
    }
}

/// Neutral light: white background, same accents
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xff, 0xff, 0xff),
        bg1: Color::Rgb(0xf5, 0xf5, 0xf5), // neutral-100
        bg2: Color::Rgb(0xe5, 0xe5, 0xe5), // neutral-200
        fg0: Color::Rgb(0x0a, 0x0a, 0x0a),
        fg1: Color::Rgb(0x40, 0x40, 0x40), // neutral-700
        muted: Color::Rgb(0xa3, 0xa3, 0xa3), // neutral-400
        red: Color::Rgb(0xdc, 0x26, 0x26),
        yellow: Color::Rgb(0xca, 0x8a, 0x04),
        green: Color::Rgb(0x16, 0xa3, 0x4a),
        blue: Color::Rgb(0x25, 0x63, 0xeb),
        purple: Color::Rgb(0x93, 0x33, 0xea),
        accent: Color::Rgb(0x7c, 0x3a, 0xed),
        highlight: Color::Rgb(0xe5, 0xe5, 0xe5),
        progress: Color::Rgb(0x93, 0x33, 0xea),
    }
}
