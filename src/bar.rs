//! Bar shape for visual timers.
//!
//! A bar timer draws an inactive track across the frame and one or two active
//! segments whose length follows the elapsed part of the countdown. How the
//! segments grow is chosen with [`BarAnimationStyle`]; the mapping is purely
//! visual and never touches the countdown itself.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_visual_timer::bar;
//! use bubbletea_visual_timer::style::{BarAnimationStyle, CapStyle, Rect};
//! use std::time::Duration;
//!
//! let mut timer = bar::new(
//!     BarAnimationStyle::Reflection,
//!     Rect::new(0, 0, 40, 3),
//!     Duration::from_secs(5),
//! );
//! timer.set_bar_thickness(1.0).unwrap();
//! timer.set_bar_cap_style(CapStyle::Square).unwrap();
//! let _cmd = timer.start();
//! ```
//!
//! # Terminal Geometry
//!
//! Thickness is measured in rows and padding in columns. A positive thickness
//! always draws at least one row, and the bar is clamped to the frame. Cap
//! styles extend the track and every active segment past their ends: `Butt`
//! not at all, `Square` by a full cell, `Round` by a half-block cell.

use crate::canvas::{Canvas, Layer};
use crate::error::{non_negative, Result};
use crate::style::{BarAnimationStyle, CapStyle, Rect, TimerStyle};
use crate::timer::{self, Model};
use std::ops::Range;
use std::time::Duration;

/// Default bar thickness, in rows.
pub const DEFAULT_BAR_THICKNESS: f64 = 5.0;
/// Default horizontal padding at both bar ends, in columns.
pub const DEFAULT_BAR_PADDING: f64 = 10.0;

const ROUND_CAP_LEFT: char = '▐';
const ROUND_CAP_RIGHT: char = '▌';

/// Creates a bar timer with the given animation style.
///
/// The bar starts with its defaults: thickness 5, padding 10, round caps.
///
/// # Examples
///
/// ```rust
/// use bubbletea_visual_timer::bar;
/// use bubbletea_visual_timer::style::{BarAnimationStyle, Rect};
/// use std::time::Duration;
///
/// let timer = bar::new(
///     BarAnimationStyle::Backwards,
///     Rect::new(0, 0, 30, 7),
///     Duration::from_secs(5),
/// );
/// assert_eq!(timer.bar_animation_style(), Some(BarAnimationStyle::Backwards));
/// assert!(!timer.timer_is_active());
/// ```
pub fn new(animation_style: BarAnimationStyle, frame: Rect, time_remaining: Duration) -> Model {
    timer::Model::with_shape(
        TimerStyle::Bar,
        timer::Shape::Bar(Bar::new(animation_style)),
        frame,
        time_remaining,
    )
}

/// Bar-specific styling and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    animation_style: BarAnimationStyle,
    thickness: f64,
    padding: f64,
    cap_style: CapStyle,

    /// Character drawn for the active segments.
    pub full: char,
    /// Character drawn for the inactive track.
    pub empty: char,
}

/// Rows and columns a bar occupies inside its frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BarLayout {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
    pub label_row: Option<usize>,
}

impl Default for Bar {
    fn default() -> Self {
        Self::new(BarAnimationStyle::default())
    }
}

impl Bar {
    /// Creates bar styling with default geometry for `animation_style`.
    pub fn new(animation_style: BarAnimationStyle) -> Self {
        Self {
            animation_style,
            thickness: DEFAULT_BAR_THICKNESS,
            padding: DEFAULT_BAR_PADDING,
            cap_style: CapStyle::default(),
            full: '█',
            empty: '░',
        }
    }

    /// Current animation style.
    pub fn animation_style(&self) -> BarAnimationStyle {
        self.animation_style
    }

    /// Changes how elapsed time maps onto segments. Takes effect on the next
    /// render.
    pub fn set_animation_style(&mut self, style: BarAnimationStyle) {
        self.animation_style = style;
    }

    /// Bar thickness in rows.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Sets the bar thickness.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStyle`] for negative or non-finite values.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<()> {
        self.thickness = non_negative("bar_thickness", thickness)?;
        Ok(())
    }

    /// Horizontal padding at both ends, in columns.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Sets the horizontal padding.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStyle`] for negative or non-finite values.
    pub fn set_padding(&mut self, padding: f64) -> Result<()> {
        self.padding = non_negative("bar_padding", padding)?;
        Ok(())
    }

    /// Cap style used for the track and segment ends.
    pub fn cap_style(&self) -> CapStyle {
        self.cap_style
    }

    /// Sets the cap style.
    pub fn set_cap_style(&mut self, cap_style: CapStyle) {
        self.cap_style = cap_style;
    }

    /// Places the bar, and the label row if requested, inside a frame.
    ///
    /// The label sits on the row above the bar and is dropped when the frame
    /// has no room for it.
    pub(crate) fn layout(&self, width: usize, height: usize, with_label: bool) -> BarLayout {
        let rows = if self.thickness > 0.0 {
            (self.thickness.round() as usize).max(1).min(height)
        } else {
            0
        };
        let pad = self.padding.round() as usize;
        let cols = if pad.saturating_mul(2) < width {
            pad..width - pad
        } else {
            0..0
        };

        let with_label = with_label && rows < height;
        let content = rows + usize::from(with_label);
        let top = (height - content) / 2;

        if with_label {
            BarLayout {
                rows: top + 1..top + 1 + rows,
                cols,
                label_row: Some(top),
            }
        } else {
            BarLayout {
                rows: top..top + rows,
                cols,
                label_row: None,
            }
        }
    }

    /// Paints the track and the active segments for `fraction` of time
    /// remaining.
    pub(crate) fn paint(&self, canvas: &mut Canvas, fraction: f64, layout: &BarLayout) {
        let BarLayout { rows, cols, .. } = layout;
        if rows.is_empty() || cols.is_empty() {
            return;
        }

        canvas.fill_span(rows.clone(), cols.clone(), Layer::Track, self.empty);
        self.paint_caps(canvas, rows, cols, Layer::Track, self.empty);

        let segments: Vec<Range<usize>> =
            active_segments(self.animation_style, fraction, cols.len())
                .into_iter()
                .map(|s| s.start + cols.start..s.end + cols.start)
                .collect();

        for segment in &segments {
            canvas.fill_span(rows.clone(), segment.clone(), Layer::Active, self.full);
        }
        for segment in &segments {
            self.paint_caps(canvas, rows, segment, Layer::Active, self.full);
        }
    }

    fn paint_caps(
        &self,
        canvas: &mut Canvas,
        rows: &Range<usize>,
        span: &Range<usize>,
        layer: Layer,
        fill: char,
    ) {
        let (left, right) = match self.cap_style {
            CapStyle::Butt => return,
            CapStyle::Square => (fill, fill),
            CapStyle::Round => (ROUND_CAP_LEFT, ROUND_CAP_RIGHT),
        };
        if let Some(col) = span.start.checked_sub(1) {
            canvas.cap(rows.clone(), col, layer, left);
        }
        canvas.cap(rows.clone(), span.end, layer, right);
    }
}

/// Maps the fraction of time remaining onto active segments of a bar that is
/// `length` cells long.
///
/// `fraction` is clamped to `[0, 1]`. Segments are returned in bar-relative
/// cell indices, left to right, and empty segments are omitted.
///
/// # Examples
///
/// ```rust
/// use bubbletea_visual_timer::bar::active_segments;
/// use bubbletea_visual_timer::style::BarAnimationStyle;
///
/// // A quarter of the time has elapsed.
/// assert_eq!(active_segments(BarAnimationStyle::Straight, 0.75, 20), vec![0..5]);
/// assert_eq!(active_segments(BarAnimationStyle::Backwards, 0.75, 20), vec![0..15]);
/// assert_eq!(
///     active_segments(BarAnimationStyle::Reflection, 0.5, 20),
///     vec![5..10, 10..15]
/// );
/// ```
pub fn active_segments(style: BarAnimationStyle, fraction: f64, length: usize) -> Vec<Range<usize>> {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let elapsed = 1.0 - fraction;
    let scaled = |f: f64, n: usize| ((n as f64) * f).round() as usize;

    let segments = match style {
        BarAnimationStyle::Straight => vec![0..scaled(elapsed, length).min(length)],
        BarAnimationStyle::Backwards => vec![0..scaled(fraction, length).min(length)],
        BarAnimationStyle::Reflection => {
            let half = length / 2;
            let grow = scaled(elapsed, half).min(half);
            // An odd bar has a middle cell shared by both halves.
            let middle = usize::from(length % 2 == 1 && grow > 0);
            vec![half - grow..half + middle, length - half..length - half + grow]
        }
    };

    segments.into_iter().filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    fn butt_bar(style: BarAnimationStyle) -> Bar {
        let mut bar = Bar::new(style);
        bar.set_cap_style(CapStyle::Butt);
        bar.set_thickness(1.0).unwrap();
        bar.set_padding(0.0).unwrap();
        bar
    }

    fn render_row(bar: &Bar, fraction: f64, width: usize) -> String {
        let mut canvas = Canvas::new(width, 1);
        let layout = bar.layout(width, 1, false);
        bar.paint(&mut canvas, fraction, &layout);
        let palette = crate::canvas::Palette {
            background: "",
            inactive: "",
            active: "",
            label: "",
        };
        plain(&canvas.render(&palette))
    }

    #[test]
    fn test_bar_defaults() {
        let bar = Bar::default();
        assert_eq!(bar.animation_style(), BarAnimationStyle::Straight);
        assert_eq!(bar.thickness(), DEFAULT_BAR_THICKNESS);
        assert_eq!(bar.padding(), DEFAULT_BAR_PADDING);
        assert_eq!(bar.cap_style(), CapStyle::Round);
        assert_eq!(bar.full, '█');
        assert_eq!(bar.empty, '░');
    }

    #[test]
    fn test_setters_validate_geometry() {
        let mut bar = Bar::default();
        assert!(bar.set_thickness(2.0).is_ok());
        assert_eq!(bar.thickness(), 2.0);

        assert!(matches!(
            bar.set_thickness(-1.0),
            Err(Error::InvalidStyle {
                property: "bar_thickness",
                ..
            })
        ));
        assert_eq!(bar.thickness(), 2.0); // unchanged after rejection

        assert!(bar.set_padding(f64::NAN).is_err());
        assert_eq!(bar.padding(), DEFAULT_BAR_PADDING);
    }

    #[test]
    fn test_straight_segments_grow_from_left() {
        let style = BarAnimationStyle::Straight;
        assert_eq!(active_segments(style, 1.0, 10), Vec::<Range<usize>>::new());
        assert_eq!(active_segments(style, 0.5, 10), vec![0..5]);
        assert_eq!(active_segments(style, 0.0, 10), vec![0..10]);
    }

    #[test]
    fn test_backwards_segments_shrink() {
        let style = BarAnimationStyle::Backwards;
        assert_eq!(active_segments(style, 1.0, 10), vec![0..10]);
        assert_eq!(active_segments(style, 0.3, 10), vec![0..3]);
        assert_eq!(active_segments(style, 0.0, 10), Vec::<Range<usize>>::new());
    }

    #[test]
    fn test_reflection_segments_are_symmetric() {
        let style = BarAnimationStyle::Reflection;
        assert_eq!(active_segments(style, 1.0, 10), Vec::<Range<usize>>::new());
        assert_eq!(active_segments(style, 0.6, 10), vec![3..5, 5..7]);
        assert_eq!(active_segments(style, 0.0, 10), vec![0..5, 5..10]);

        // Odd lengths light the shared middle cell once growth starts.
        assert_eq!(active_segments(style, 0.0, 5), vec![0..3, 3..5]);
        assert_eq!(active_segments(style, 0.5, 5), vec![1..3, 3..4]);
    }

    #[test]
    fn test_fraction_is_clamped() {
        assert_eq!(
            active_segments(BarAnimationStyle::Backwards, 3.0, 8),
            vec![0..8]
        );
        assert_eq!(
            active_segments(BarAnimationStyle::Straight, -1.0, 8),
            vec![0..8]
        );
        assert_eq!(
            active_segments(BarAnimationStyle::Straight, f64::NAN, 8),
            vec![0..8]
        );
        assert!(active_segments(BarAnimationStyle::Reflection, 0.0, 0).is_empty());
    }

    #[test]
    fn test_layout_centers_bar_and_label() {
        let bar = Bar::default(); // thickness 5, padding 10
        let layout = bar.layout(40, 9, true);
        assert_eq!(layout.label_row, Some(1));
        assert_eq!(layout.rows, 2..7);
        assert_eq!(layout.cols, 10..30);

        let layout = bar.layout(40, 9, false);
        assert_eq!(layout.label_row, None);
        assert_eq!(layout.rows, 2..7);
    }

    #[test]
    fn test_layout_drops_label_without_room() {
        let bar = Bar::default();
        let layout = bar.layout(40, 3, true);
        assert_eq!(layout.label_row, None);
        assert_eq!(layout.rows, 0..3);
    }

    #[test]
    fn test_layout_padding_consumes_width() {
        let bar = Bar::default();
        let layout = bar.layout(20, 5, false);
        assert!(layout.cols.is_empty());
    }

    #[test]
    fn test_layout_thin_bar_keeps_one_row() {
        let mut bar = Bar::default();
        bar.set_thickness(0.2).unwrap();
        assert_eq!(bar.layout(10, 5, false).rows.len(), 1);

        bar.set_thickness(0.0).unwrap();
        assert!(bar.layout(10, 5, false).rows.is_empty());
    }

    #[test]
    fn test_paint_straight() {
        let bar = butt_bar(BarAnimationStyle::Straight);
        assert_eq!(render_row(&bar, 0.5, 8), "████░░░░");
    }

    #[test]
    fn test_paint_backwards() {
        let bar = butt_bar(BarAnimationStyle::Backwards);
        assert_eq!(render_row(&bar, 0.25, 8), "██░░░░░░");
    }

    #[test]
    fn test_paint_reflection() {
        let bar = butt_bar(BarAnimationStyle::Reflection);
        assert_eq!(render_row(&bar, 0.5, 8), "░░████░░");
    }

    #[test]
    fn test_square_caps_extend_into_padding() {
        let mut bar = butt_bar(BarAnimationStyle::Straight);
        bar.set_cap_style(CapStyle::Square);
        bar.set_padding(1.0).unwrap();
        // Track spans 1..7; its caps cover columns 0 and 7.
        assert_eq!(render_row(&bar, 1.0, 8), "░░░░░░░░");
        // Active 1..4 with a cap at 0 (over the track cap) and at 4.
        assert_eq!(render_row(&bar, 0.5, 8), "█████░░░");
    }

    #[test]
    fn test_round_caps_use_half_blocks() {
        let mut bar = butt_bar(BarAnimationStyle::Straight);
        bar.set_cap_style(CapStyle::Round);
        bar.set_padding(1.0).unwrap();
        assert_eq!(render_row(&bar, 1.0, 8), "▐░░░░░░▌");
        assert_eq!(render_row(&bar, 0.5, 8), "▐███▌░░▌");
    }
}
