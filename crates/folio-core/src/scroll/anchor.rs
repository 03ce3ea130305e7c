use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A point in the viewport, measured from its top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportPosition {
    /// Fraction of the viewport height (`10%`, `center`, `0.5`)
    Fraction(f64),
    /// Absolute distance in page units (`120px`)
    Units(f64),
}

impl ViewportPosition {
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            ViewportPosition::Fraction(f) => f * viewport_height,
            ViewportPosition::Units(u) => u,
        }
    }
}

/// "Where the container meets the viewport", e.g. `start 10%`
///
/// The first word picks a point on the container (`start`, `center`, `end`
/// or a fraction), the second a point on the viewport. The anchor is reached
/// when the two points line up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnchor {
    /// Fraction of the container height, 0 = top edge
    pub target: f64,
    pub viewport: ViewportPosition,
}

impl ScrollAnchor {
    pub fn new(target: f64, viewport: ViewportPosition) -> Self {
        Self { target, viewport }
    }

    /// Scroll offset at which this anchor is reached
    pub fn resolve(&self, container_top: f64, container_height: f64, viewport_height: f64) -> f64 {
        container_top + self.target * container_height - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for ScrollAnchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(target), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::InvalidAnchor(format!(
                "'{}': expected '<container point> <viewport point>'",
                s
            )));
        };

        let target = parse_edge(target)
            .ok_or_else(|| Error::InvalidAnchor(format!("'{}': unknown container point '{}'", s, target)))?;
        let viewport = parse_viewport(viewport)
            .ok_or_else(|| Error::InvalidAnchor(format!("'{}': unknown viewport point '{}'", s, viewport)))?;

        Ok(Self { target, viewport })
    }
}

impl fmt::Display for ScrollAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match self.target {
            t if t == 0.0 => "start".to_string(),
            t if t == 0.5 => "center".to_string(),
            t if t == 1.0 => "end".to_string(),
            t => t.to_string(),
        };
        match self.viewport {
            ViewportPosition::Fraction(v) => write!(f, "{} {}%", target, v * 100.0),
            ViewportPosition::Units(u) => write!(f, "{} {}px", target, u),
        }
    }
}

fn parse_edge(word: &str) -> Option<f64> {
    match word {
        "start" => Some(0.0),
        "center" => Some(0.5),
        "end" => Some(1.0),
        other => other.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

fn parse_viewport(word: &str) -> Option<ViewportPosition> {
    if let Some(pct) = word.strip_suffix('%') {
        return pct
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| ViewportPosition::Fraction(v / 100.0));
    }
    if let Some(px) = word.strip_suffix("px") {
        return px
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(ViewportPosition::Units);
    }
    parse_edge(word).map(ViewportPosition::Fraction)
}

/// Scroll span over which progress runs from 0 to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollAnchor,
    pub end: ScrollAnchor,
}

impl Default for ScrollRange {
    /// `["start 10%", "end 50%"]`: from the container top reaching 10% of the
    /// viewport to its bottom reaching the middle
    fn default() -> Self {
        Self {
            start: ScrollAnchor::new(0.0, ViewportPosition::Fraction(0.1)),
            end: ScrollAnchor::new(1.0, ViewportPosition::Fraction(0.5)),
        }
    }
}
