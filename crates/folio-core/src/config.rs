use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::reveal::RevealTiming;
use crate::scroll::{ScrollAnchor, ScrollRange};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Portfolio content file; the bundled content is used when unset
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            content_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Terminal width below which the mobile navigation is shown
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u16,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Page scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            mobile_breakpoint: default_mobile_breakpoint(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve used by scroll and reveal animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Smooth page scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Lines per step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Word reveal timing for animated text blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Offset between consecutive runs starting to reveal
    #[serde(default = "default_stagger")]
    pub stagger_ms: u64,
    /// Wait after the full reveal before highlighted runs are decorated
    #[serde(default = "default_highlight_delay")]
    pub highlight_delay_ms: u64,
    /// Extra wait after the last scheduled run before the block counts as revealed
    #[serde(default = "default_settle")]
    pub settle_ms: u64,
    /// How long one run takes to go from hidden to revealed
    #[serde(default = "default_word_duration")]
    pub word_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Render revealing words dimmed, the terminal stand-in for a blur filter
    #[serde(default = "default_true")]
    pub blur: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_ms: default_stagger(),
            highlight_delay_ms: default_highlight_delay(),
            settle_ms: default_settle(),
            word_duration_ms: default_word_duration(),
            easing: EasingType::default(),
            blur: default_true(),
        }
    }
}

impl RevealConfig {
    pub fn timing(&self) -> RevealTiming {
        RevealTiming {
            stagger: Duration::from_millis(self.stagger_ms),
            highlight_delay: Duration::from_millis(self.highlight_delay_ms),
            settle: Duration::from_millis(self.settle_ms),
            word_duration: Duration::from_millis(self.word_duration_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Scroll offset (in page units) past which the navbar turns compact
    #[serde(default = "default_compact_threshold")]
    pub compact_threshold: f64,
    /// Page units represented by one terminal row
    #[serde(default = "default_units_per_row")]
    pub units_per_row: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            compact_threshold: default_compact_threshold(),
            units_per_row: default_units_per_row(),
        }
    }
}

/// Scroll range of the timeline progress bar, as two anchors like "start 10%"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_timeline_start")]
    pub start: String,
    #[serde(default = "default_timeline_end")]
    pub end: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start: default_timeline_start(),
            end: default_timeline_end(),
        }
    }
}

impl TimelineConfig {
    pub fn range(&self) -> crate::Result<ScrollRange> {
        Ok(ScrollRange {
            start: self.start.parse::<ScrollAnchor>()?,
            end: self.end.parse::<ScrollAnchor>()?,
        })
    }
}

/// Targets of the navbar buttons
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    pub name: String,
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a theme name or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "neutral-dark".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg0: Option<String>,
    pub bg1: Option<String>,
    pub bg2: Option<String>,
    pub fg0: Option<String>,
    pub fg1: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub highlight: Option<String>,
    pub progress: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_move_down")]
    pub move_down: String,
    #[serde(default = "default_key_move_up")]
    pub move_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Follow the focused link or menu entry
    #[serde(default = "default_key_select")]
    pub select: String,
    #[serde(default = "default_key_next_link")]
    pub next_link: String,
    #[serde(default = "default_key_prev_link")]
    pub prev_link: String,
    /// Open the focused link in the browser
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    /// Open/close the mobile navigation menu
    #[serde(default = "default_key_toggle_menu")]
    pub toggle_menu: String,
    /// Restart the hero text animation
    #[serde(default = "default_key_replay")]
    pub replay: String,
    #[serde(default = "default_key_resume")]
    pub resume: String,
    #[serde(default = "default_key_contact")]
    pub contact: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            move_down: default_key_move_down(),
            move_up: default_key_move_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            select: default_key_select(),
            next_link: default_key_next_link(),
            prev_link: default_key_prev_link(),
            open_link: default_key_open_link(),
            toggle_menu: default_key_toggle_menu(),
            replay: default_key_replay(),
            resume: default_key_resume(),
            contact: default_key_contact(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_move_down() -> String { "j".to_string() }
fn default_key_move_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_next_link() -> String { "<Tab>".to_string() }
fn default_key_prev_link() -> String { "<S-Tab>".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_toggle_menu() -> String { "m".to_string() }
fn default_key_replay() -> String { "r".to_string() }
fn default_key_resume() -> String { "R".to_string() }
fn default_key_contact() -> String { "c".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_mobile_breakpoint() -> u16 {
    80
}

fn default_animation_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_stagger() -> u64 {
    150
}

fn default_highlight_delay() -> u64 {
    1000
}

fn default_settle() -> u64 {
    500 // long enough for the last run's word_duration to finish
}

fn default_word_duration() -> u64 {
    500
}

fn default_compact_threshold() -> f64 {
    100.0
}

fn default_units_per_row() -> f64 {
    20.0 // roughly one line of body text in CSS pixels
}

fn default_timeline_start() -> String {
    "start 10%".to_string()
}

fn default_timeline_end() -> String {
    "end 50%".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from a specific file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| crate::Error::Config(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the content file path (with tilde expansion), if one is configured
    pub fn content_path(&self) -> Option<PathBuf> {
        self.general.content_path.as_deref().map(expand_tilde)
    }

    /// Reject values that would make the derived animation state meaningless
    pub fn validate(&self) -> crate::Result<()> {
        self.timeline.range()?;
        if !self.navbar.compact_threshold.is_finite() || self.navbar.compact_threshold < 0.0 {
            return Err(crate::Error::Config(format!(
                "navbar.compact_threshold must be a non-negative number, got {}",
                self.navbar.compact_threshold
            )));
        }
        if self.reveal.settle_ms < self.reveal.word_duration_ms {
            return Err(crate::Error::Config(format!(
                "reveal.settle_ms ({}) must be at least reveal.word_duration_ms ({}) so the last word finishes fading in before the full reveal",
                self.reveal.settle_ms, self.reveal.word_duration_ms
            )));
        }
        if !(self.navbar.units_per_row > 0.0) {
            return Err(crate::Error::Config(format!(
                "navbar.units_per_row must be positive, got {}",
                self.navbar.units_per_row
            )));
        }
        Ok(())
    }
}
