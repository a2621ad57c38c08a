/// Half-block pixel canvas for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;
use wirecube_core::{LineSink, Rgb};

const UPPER_HALF: char = '▀';
const LOWER_HALF: char = '▄';

/// Background colour behind unset pixels
const CLEAR_COLOR: Rgb = Rgb::BLACK;

/// One terminal cell: a glyph and its colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// Pixel buffer where every terminal cell holds two stacked pixels
pub struct Canvas {
    columns: usize,
    rows: usize,
    pixels: Vec<Option<Rgb>>,
}

impl Canvas {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            pixels: vec![None; columns * rows * 2],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.columns
    }

    /// Height in pixels, two per row
    pub fn height(&self) -> usize {
        self.rows * 2
    }

    pub fn resize(&mut self, columns: usize, rows: usize) {
        self.columns = columns;
        self.rows = rows;
        self.pixels = vec![None; columns * rows * 2];
    }

    pub fn clear(&mut self) {
        self.pixels.fill(None);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width() && y < self.height() {
            self.pixels[y * self.columns + x]
        } else {
            None
        }
    }

    /// Set a pixel, ignoring anything outside the canvas
    pub fn plot(&mut self, x: isize, y: isize, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height() {
            let offset = y as usize * self.columns + x as usize;
            self.pixels[offset] = Some(color);
        }
    }

    /// Compose the two pixels of a cell into a glyph
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        let top = self.pixel(column, row * 2);
        let bottom = self.pixel(column, row * 2 + 1);
        match (top, bottom) {
            (Some(top), Some(bottom)) => Cell {
                glyph: UPPER_HALF,
                fg: top,
                bg: bottom,
            },
            (Some(top), None) => Cell {
                glyph: UPPER_HALF,
                fg: top,
                bg: CLEAR_COLOR,
            },
            (None, Some(bottom)) => Cell {
                glyph: LOWER_HALF,
                fg: bottom,
                bg: CLEAR_COLOR,
            },
            (None, None) => Cell {
                glyph: ' ',
                fg: CLEAR_COLOR,
                bg: CLEAR_COLOR,
            },
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<(Rgb, Rgb)> = None;
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for column in 0..self.columns {
                let cell = self.cell(column, row);
                if current != Some((cell.fg, cell.bg)) {
                    writer.queue(SetForegroundColor(to_color(cell.fg)))?;
                    writer.queue(SetBackgroundColor(to_color(cell.bg)))?;
                    current = Some((cell.fg, cell.bg));
                }
                writer.queue(Print(cell.glyph))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineSink for Canvas {
    /// Bresenham between the rounded endpoints
    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb) {
        let (mut x0, mut y0, x1, y1) = (
            from.x.round() as isize,
            from.y.round() as isize,
            to.x.round() as isize,
            to.y.round() as isize,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, color);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::gray(255);

    #[test]
    fn test_dimensions() {
        let mut canvas = Canvas::new(80, 24);
        assert_eq!(canvas.width(), 80);
        assert_eq!(canvas.height(), 48);

        canvas.resize(10, 5);
        assert_eq!((canvas.columns(), canvas.rows()), (10, 5));
        assert_eq!(canvas.height(), 10);
    }

    #[test]
    fn test_horizontal_line_endpoints() {
        let mut canvas = Canvas::new(10, 5);
        canvas.draw_line(Point2::new(1.2, 3.0), Point2::new(6.6, 3.4), WHITE);
        for x in 1..=7 {
            assert_eq!(canvas.pixel(x, 3), Some(WHITE));
        }
        assert_eq!(canvas.pixel(0, 3), None);
        assert_eq!(canvas.pixel(8, 3), None);
    }

    #[test]
    fn test_diagonal_line() {
        let mut canvas = Canvas::new(10, 5);
        canvas.draw_line(Point2::new(5.0, 5.0), Point2::new(0.0, 0.0), WHITE);
        for i in 0..=5 {
            assert_eq!(canvas.pixel(i, i), Some(WHITE));
        }
        assert_eq!(canvas.pixel(1, 0), None);
    }

    #[test]
    fn test_line_is_clipped() {
        let mut canvas = Canvas::new(4, 2);
        canvas.draw_line(Point2::new(-10.0, 1.0), Point2::new(20.0, 1.0), WHITE);
        for x in 0..4 {
            assert_eq!(canvas.pixel(x, 1), Some(WHITE));
        }
        assert_eq!(canvas.pixel(4, 1), None);
    }

    #[test]
    fn test_cell_composition() {
        let gray = Rgb::gray(100);
        let mut canvas = Canvas::new(3, 1);
        canvas.plot(0, 0, WHITE);
        canvas.plot(0, 1, gray);
        canvas.plot(1, 0, WHITE);
        canvas.plot(2, 1, gray);

        assert_eq!(
            canvas.cell(0, 0),
            Cell { glyph: UPPER_HALF, fg: WHITE, bg: gray }
        );
        assert_eq!(
            canvas.cell(1, 0),
            Cell { glyph: UPPER_HALF, fg: WHITE, bg: CLEAR_COLOR }
        );
        assert_eq!(
            canvas.cell(2, 0),
            Cell { glyph: LOWER_HALF, fg: gray, bg: CLEAR_COLOR }
        );

        canvas.clear();
        assert_eq!(canvas.cell(0, 0).glyph, ' ');
    }

    #[test]
    fn test_draw_writes_glyphs() {
        let mut canvas = Canvas::new(2, 1);
        canvas.plot(1, 0, WHITE);
        let mut out = Vec::new();
        canvas.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(UPPER_HALF));
        assert!(text.contains("38;2;255;255;255"));
    }
}
