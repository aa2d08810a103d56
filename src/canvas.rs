//! Cell grid shared by every timer shape.
//!
//! A shape paints layers onto the canvas (background, inactive track, active
//! segments, label) and the canvas turns them into a styled string. Colors are
//! resolved only at render time, so styling changes take effect on the next
//! `view` without replaying anything.

use lipgloss_extras::lipgloss::{Color, Style};
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// What painted a cell, in stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Layer {
    Clear,
    Background,
    Track,
    Active,
    Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    pub ch: char,
    pub fg: Layer,
    pub bg: Layer,
    /// Highest layer that covers the whole cell.
    pub rank: Layer,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: Layer::Clear,
        bg: Layer::Clear,
        rank: Layer::Clear,
    };
}

/// Colors for each paintable layer. Empty strings are treated as clear.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette<'a> {
    pub background: &'a str,
    pub inactive: &'a str,
    pub active: &'a str,
    pub label: &'a str,
}

impl<'a> Palette<'a> {
    fn color(&self, layer: Layer) -> Option<&'a str> {
        let color = match layer {
            Layer::Clear => return None,
            Layer::Background => self.background,
            Layer::Track => self.inactive,
            Layer::Active => self.active,
            Layer::Label => self.label,
        };
        if color.is_empty() {
            None
        } else {
            Some(color)
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col < self.width && row < self.height {
            Some(&mut self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Paints the background layer, leaving the rounded-off corners clear.
    ///
    /// Terminal cells are about twice as tall as they are wide, so the vertical
    /// radius is half the horizontal one.
    pub fn fill_background(&mut self, corner_radius: f64) {
        let rx = corner_radius.min(self.width as f64 / 2.0);
        let ry = (corner_radius / 2.0).min(self.height as f64 / 2.0);

        for row in 0..self.height {
            for col in 0..self.width {
                if rx > 0.0 && ry > 0.0 && self.outside_corner(col, row, rx, ry) {
                    continue;
                }
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.bg = Layer::Background;
                    cell.rank = Layer::Background;
                }
            }
        }
    }

    fn outside_corner(&self, col: usize, row: usize, rx: f64, ry: f64) -> bool {
        let x = col as f64 + 0.5;
        let y = row as f64 + 0.5;
        let w = self.width as f64;
        let h = self.height as f64;

        let dx = if x < rx {
            rx - x
        } else if x > w - rx {
            x - (w - rx)
        } else {
            return false;
        };
        let dy = if y < ry {
            ry - y
        } else if y > h - ry {
            y - (h - ry)
        } else {
            return false;
        };

        (dx / rx).powi(2) + (dy / ry).powi(2) > 1.0
    }

    /// Fills `cols` on each row of `rows` with `ch` drawn in `layer`'s color.
    pub fn fill_span(&mut self, rows: Range<usize>, cols: Range<usize>, layer: Layer, ch: char) {
        for row in rows {
            for col in cols.clone() {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.ch = ch;
                    cell.fg = layer;
                    cell.rank = layer;
                }
            }
        }
    }

    /// Draws a cap glyph unless a layer at or above `layer` already covers the
    /// cell. The uncovered part of the glyph shows the layer beneath.
    pub fn cap(&mut self, rows: Range<usize>, col: usize, layer: Layer, ch: char) {
        for row in rows {
            if let Some(cell) = self.cell_mut(col, row) {
                if cell.rank >= layer {
                    continue;
                }
                cell.bg = cell.rank;
                cell.ch = ch;
                cell.fg = layer;
                cell.rank = layer;
            }
        }
    }

    /// Writes `text` centered on `row`, truncated to the canvas width.
    pub fn put_centered(&mut self, row: usize, text: &str, layer: Layer) {
        let text_width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
        let mut col = self.width.saturating_sub(text_width) / 2;

        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if col + w > self.width {
                break;
            }
            if let Some(cell) = self.cell_mut(col, row) {
                cell.ch = ch;
                cell.fg = layer;
            }
            col += w;
        }
    }

    /// Renders the grid, grouping runs of identically colored cells into a
    /// single styled span.
    pub fn render(&self, palette: &Palette<'_>) -> String {
        let mut rows = Vec::with_capacity(self.height);

        for row in 0..self.height {
            let mut line = String::new();
            let mut run = String::new();
            let mut run_colors: (Option<&str>, Option<&str>) = (None, None);

            for col in 0..self.width {
                let cell = self.cells[row * self.width + col];
                let fg = if cell.ch == ' ' {
                    None
                } else {
                    palette.color(cell.fg)
                };
                let colors = (fg, palette.color(cell.bg));

                if colors != run_colors && !run.is_empty() {
                    line.push_str(&styled(&run, run_colors));
                    run.clear();
                }
                run_colors = colors;
                run.push(cell.ch);
            }
            if !run.is_empty() {
                line.push_str(&styled(&run, run_colors));
            }
            rows.push(line);
        }

        rows.join("\n")
    }
}

fn styled(text: &str, (fg, bg): (Option<&str>, Option<&str>)) -> String {
    if fg.is_none() && bg.is_none() {
        return text.to_string();
    }

    let mut style = Style::new();
    if let Some(fg) = fg {
        style = style.foreground(Color::from(fg));
    }
    if let Some(bg) = bg {
        style = style.background(Color::from(bg));
    }
    style.render(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette<'static> {
        Palette {
            background: "#000000",
            inactive: "#D3D3D3",
            active: "#00FF00",
            label: "#FFFFFF",
        }
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(4, 2);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 2);
        assert_eq!(plain(&canvas.render(&palette())), "    \n    ");
    }

    #[test]
    fn test_background_without_radius_covers_everything() {
        let mut canvas = Canvas::new(6, 3);
        canvas.fill_background(0.0);
        for row in 0..3 {
            for col in 0..6 {
                assert_eq!(canvas.cell(col, row).map(|c| c.bg), Some(Layer::Background));
            }
        }
    }

    #[test]
    fn test_background_corner_radius_clears_corners() {
        let mut canvas = Canvas::new(20, 6);
        canvas.fill_background(4.0);

        for (col, row) in [(0, 0), (19, 0), (0, 5), (19, 5)] {
            assert_eq!(
                canvas.cell(col, row).map(|c| c.bg),
                Some(Layer::Clear),
                "corner ({}, {}) should be clear",
                col,
                row
            );
        }
        assert_eq!(canvas.cell(3, 1).map(|c| c.bg), Some(Layer::Background));
        assert_eq!(canvas.cell(10, 0).map(|c| c.bg), Some(Layer::Background));
        assert_eq!(canvas.cell(0, 3).map(|c| c.bg), Some(Layer::Background));
    }

    #[test]
    fn test_cap_does_not_cover_higher_layer() {
        let mut canvas = Canvas::new(5, 1);
        canvas.fill_background(0.0);
        canvas.fill_span(0..1, 1..3, Layer::Active, '█');
        canvas.cap(0..1, 2, Layer::Track, '▌');
        canvas.cap(0..1, 3, Layer::Track, '▌');

        assert_eq!(canvas.cell(2, 0).map(|c| c.ch), Some('█'));
        let capped = canvas.cell(3, 0).expect("cell in range");
        assert_eq!(capped.ch, '▌');
        assert_eq!(capped.fg, Layer::Track);
        assert_eq!(capped.bg, Layer::Background);
    }

    #[test]
    fn test_put_centered() {
        let mut canvas = Canvas::new(9, 1);
        canvas.put_centered(0, "abc", Layer::Label);
        assert_eq!(plain(&canvas.render(&palette())), "   abc   ");

        let mut narrow = Canvas::new(2, 1);
        narrow.put_centered(0, "abcdef", Layer::Label);
        assert_eq!(plain(&narrow.render(&palette())), "ab");
    }

    #[test]
    fn test_clear_palette_emits_plain_text() {
        let mut canvas = Canvas::new(3, 1);
        canvas.fill_background(0.0);
        let clear = Palette {
            background: "",
            inactive: "",
            active: "",
            label: "",
        };
        assert_eq!(canvas.render(&clear), "   ");
    }

    #[test]
    fn test_out_of_range_cell() {
        let canvas = Canvas::new(2, 2);
        assert!(canvas.cell(2, 0).is_none());
        assert!(canvas.cell(0, 2).is_none());
    }
}
