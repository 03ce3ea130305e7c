use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Palette colors, addressable from content style tags
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub purple: Color,

    // Semantic colors
    pub accent: Color,
    /// Background behind highlighted words
    pub highlight: Color,
    /// Filled part of the timeline rail
    pub progress: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::neutral_dark()
    }
}

impl Theme {
    /// Resolve a content style tag to a color
    pub fn role(&self, tag: &str) -> Option<Color> {
        match tag {
            "accent" => Some(self.accent),
            "muted" => Some(self.muted),
            "red" => Some(self.red),
            "yellow" => Some(self.yellow),
            "green" => Some(self.green),
            "blue" => Some(self.blue),
            "purple" => Some(self.purple),
            _ => None,
        }
    }

    /// Foreground for a word with an optional style tag
    pub fn word_color(&self, tag: Option<&str>) -> Color {
        tag.and_then(|t| self.role(t)).unwrap_or(self.fg0)
    }
}

/// Mix two colors; `t = 0` gives `from`, `t = 1` gives `to`
///
/// Only RGB colors can be mixed. Anything else snaps at the halfway point.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        assert_eq!(blend(black, white, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_blend_named_colors_snap() {
        assert_eq!(blend(Color::Red, Color::Blue, 0.2), Color::Red);
        assert_eq!(blend(Color::Red, Color::Blue, 0.8), Color::Blue);
    }

    #[test]
    fn test_roles() {
        let theme = Theme::default();
        assert_eq!(theme.role("accent"), Some(theme.accent));
        assert_eq!(theme.role("sparkle"), None);
        assert_eq!(theme.word_color(Some("sparkle")), theme.fg0);
        assert_eq!(theme.word_color(Some("purple")), theme.purple);
    }
}
