//! Style selectors, frame geometry, and default colors for visual timers.
//!
//! Colors are plain strings understood by lipgloss, such as `"#00FF00"` or an
//! ANSI color number. The empty string ([`CLEAR`]) paints nothing, letting the
//! terminal background show through.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Color value that leaves a layer unpainted.
pub const CLEAR: &str = "";

/// Default color of the containing view around the timer shape.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";
/// Default color of the shape's inactive track.
pub const DEFAULT_INACTIVE_COLOR: &str = "#D3D3D3";
/// Default color of the animated part of the shape.
pub const DEFAULT_ACTIVE_COLOR: &str = "#00FF00";
/// Default color of the remaining-time label.
pub const DEFAULT_LABEL_COLOR: &str = "#FFFFFF";

/// Kind of visual timer to construct.
///
/// Only the bar is implemented. The enum is non-exhaustive so further shapes
/// can be added without breaking callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TimerStyle {
    /// Horizontal bar whose filled length follows the remaining time.
    #[default]
    Bar,
}

impl TryFrom<u32> for TimerStyle {
    type Error = Error;

    /// Converts a raw style discriminant, `0` being [`TimerStyle::Bar`].
    fn try_from(raw: u32) -> Result<Self> {
        match raw {
            0 => Ok(TimerStyle::Bar),
            other => Err(Error::UnsupportedStyle(other.to_string())),
        }
    }
}

impl FromStr for TimerStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(TimerStyle::Bar),
            _ => Err(Error::UnsupportedStyle(s.to_string())),
        }
    }
}

impl fmt::Display for TimerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerStyle::Bar => f.write_str("bar"),
        }
    }
}

/// How a bar timer maps elapsed time onto its active segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarAnimationStyle {
    /// A single segment grows from the left end as time elapses.
    #[default]
    Straight,
    /// The full bar shrinks toward the left end as time elapses.
    Backwards,
    /// Two segments grow outward from the center.
    Reflection,
}

impl FromStr for BarAnimationStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight" => Ok(BarAnimationStyle::Straight),
            "backwards" => Ok(BarAnimationStyle::Backwards),
            "reflection" => Ok(BarAnimationStyle::Reflection),
            _ => Err(Error::invalid("bar_animation_style", s)),
        }
    }
}

/// Shape of both ends of the bar and of each active segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapStyle {
    /// Ends stop exactly at the segment bounds.
    Butt,
    /// Ends extend by half a cell.
    #[default]
    Round,
    /// Ends extend by a full cell.
    Square,
}

impl FromStr for CapStyle {
    type Err = Error;

    /// Parses `butt`, `round` or `square`, also accepting the Core Animation
    /// constant names such as `kCALineCapSquare`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        let name = name.strip_prefix("kCALineCap").unwrap_or(name);
        match name.to_ascii_lowercase().as_str() {
            "butt" => Ok(CapStyle::Butt),
            "round" => Ok(CapStyle::Round),
            "square" => Ok(CapStyle::Square),
            _ => Err(Error::invalid("bar_cap_style", s)),
        }
    }
}

/// Frame of a timer view, in terminal cells.
///
/// `x` and `y` locate the view inside its host; the view itself always renders
/// a `width` by `height` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Column of the left edge within the host.
    pub x: u16,
    /// Row of the top edge within the host.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Creates a frame from its origin and size.
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true when the frame covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_style_from_raw() {
        assert_eq!(TimerStyle::try_from(0u32), Ok(TimerStyle::Bar));
        assert_eq!(
            TimerStyle::try_from(1u32),
            Err(Error::UnsupportedStyle("1".to_string()))
        );
    }

    #[test]
    fn test_timer_style_from_str() {
        assert_eq!("Bar".parse::<TimerStyle>(), Ok(TimerStyle::Bar));
        assert!(matches!(
            "circle".parse::<TimerStyle>(),
            Err(Error::UnsupportedStyle(_))
        ));
        assert_eq!(TimerStyle::Bar.to_string(), "bar");
    }

    #[test]
    fn test_cap_style_parsing() {
        assert_eq!("butt".parse::<CapStyle>(), Ok(CapStyle::Butt));
        assert_eq!("ROUND".parse::<CapStyle>(), Ok(CapStyle::Round));
        assert_eq!("kCALineCapSquare".parse::<CapStyle>(), Ok(CapStyle::Square));
        assert!(matches!(
            "pointy".parse::<CapStyle>(),
            Err(Error::InvalidStyle {
                property: "bar_cap_style",
                ..
            })
        ));
    }

    #[test]
    fn test_animation_style_parsing() {
        assert_eq!(
            "reflection".parse::<BarAnimationStyle>(),
            Ok(BarAnimationStyle::Reflection)
        );
        assert!("sideways".parse::<BarAnimationStyle>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TimerStyle::default(), TimerStyle::Bar);
        assert_eq!(BarAnimationStyle::default(), BarAnimationStyle::Straight);
        assert_eq!(CapStyle::default(), CapStyle::Round);
        assert!(Rect::default().is_empty());
        assert!(!Rect::new(0, 0, 10, 3).is_empty());
    }
}
