//! Character-cell canvas the game view paints into.
//!
//! Everything is clipped: writes that land outside the canvas are dropped,
//! so callers can paint partially visible boards and previews without
//! bounds checks of their own.

use std::ops::Range;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb(220, 220, 220), Rgb(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub fn blank() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// The area strictly inside a one-cell border.
    pub const fn inner(self) -> Self {
        Self::new(
            self.x.saturating_add(1),
            self.y.saturating_add(1),
            self.w.saturating_sub(2),
            self.h.saturating_sub(2),
        )
    }

    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.w)
    }

    fn cols(self) -> Range<u16> {
        self.x..self.right()
    }

    fn rows(self) -> Range<u16> {
        self.y..self.y.saturating_add(self.h)
    }
}

/// Row-major grid of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reuses the existing allocation when the area shrinks or stays put.
    pub fn resize(&mut self, width: u16, height: u16) {
        let area = usize::from(width) * usize::from(height);
        self.cells.resize(area, Cell::blank());
        self.width = width;
        self.height = height;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Paint `rect` with one cell, clipped to the canvas.
    pub fn paint(&mut self, rect: Rect, cell: Cell) {
        for y in rect.rows() {
            for x in rect.cols() {
                self.put(x, y, cell);
            }
        }
    }

    /// Box-drawing border along the edge of `rect`.
    pub fn outline(&mut self, rect: Rect, style: CellStyle) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.right() - 1, rect.y + rect.h - 1);
        for x in left + 1..right {
            self.put(x, top, style.into_cell('─'));
            self.put(x, bottom, style.into_cell('─'));
        }
        for y in top + 1..bottom {
            self.put(left, y, style.into_cell('│'));
            self.put(right, y, style.into_cell('│'));
        }
        for (x, y, ch) in [
            (left, top, '┌'),
            (right, top, '┐'),
            (left, bottom, '└'),
            (right, bottom, '┘'),
        ] {
            self.put(x, y, style.into_cell(ch));
        }
    }

    /// Left-aligned text on one row; stops at the right edge.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(text.chars()) {
            self.put(cx, y, style.into_cell(ch));
        }
    }

    /// Decimal number on one row, without allocating.
    pub fn print_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [b'0'; 10];
        let mut start = digits.len();
        let mut rest = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        for (cx, &d) in (x..self.width).zip(&digits[start..]) {
            self.put(cx, y, style.into_cell(char::from(d)));
        }
    }

    /// Row `y` as text, for tests and debugging.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
