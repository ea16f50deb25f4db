//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Layout, left to right: score panel, bordered board, next-piece preview.
//! With 2x1 board cells the whole layout is 38 columns wide. On narrower
//! viewports every section is clipped cell by cell, never dropped.
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color_of, shape_of, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::{ColorToken, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BOX};

/// Columns reserved for the score panel.
const LEFT_PANEL_W: u16 = 6;
/// Gap between sections.
const GAP: u16 = 1;

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_FG: Rgb = Rgb::new(0x3b, 0x3b, 0x3b);
const BOX_FG: Rgb = Rgb::new(0xff, 0x00, 0x00);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where each section lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub panel_x: u16,
    /// Top-left corner of the board border
    pub board_x: u16,
    pub board_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub preview_x: u16,
}

impl Layout {
    /// Board border, including the frame itself.
    pub fn frame(&self) -> Rect {
        Rect::new(self.board_x, self.board_y, self.frame_w, self.frame_h)
    }

    /// Total width from the panel's left edge to the preview's right edge.
    pub fn total_width(&self, cell_w: u16) -> u16 {
        self.preview_x + PIECE_BOX as u16 * cell_w - self.panel_x
    }
}

/// Terminal colour for a catalog colour token.
pub const fn color_rgb(token: ColorToken) -> Rgb {
    match token {
        ColorToken::Background => Rgb::new(0, 0, 0),
        ColorToken::Cyan => Rgb::new(0, 255, 255),
        ColorToken::Yellow => Rgb::new(255, 255, 0),
        ColorToken::Orange => Rgb::new(255, 165, 0),
        ColorToken::Magenta => Rgb::new(255, 0, 255),
        ColorToken::BlueViolet => Rgb::new(138, 43, 226),
        ColorToken::Lime => Rgb::new(0, 255, 0),
        ColorToken::Red => Rgb::new(255, 0, 0),
    }
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    debug_grid: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            debug_grid: false,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Draw empty cells as dots and mark the active piece's bounding box.
    pub fn with_debug_grid(mut self, enabled: bool) -> Self {
        self.debug_grid = enabled;
        self
    }

    pub fn debug_grid(&self) -> bool {
        self.debug_grid
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let preview_w = (PIECE_BOX as u16) * self.cell_w;
        let total_w = LEFT_PANEL_W + GAP + frame_w + GAP + preview_w;

        let panel_x = viewport.width.saturating_sub(total_w) / 2;
        let board_x = panel_x + LEFT_PANEL_W + GAP;
        let board_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            panel_x,
            board_x,
            board_y,
            frame_w,
            frame_h,
            preview_x: board_x + frame_w + GAP,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::blank());

        let layout = self.layout(viewport);
        let board_bg = CellStyle::new(GRID_FG, color_rgb(ColorToken::Background));
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        // Long scores may run into the gap; the frame is painted over them.
        self.draw_score_panel(fb, snap, &layout);
        fb.paint(layout.frame().inner(), board_bg.into_cell(' '));
        fb.outline(layout.frame(), border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let rect = self.cell_rect(&layout, x as u16, y as u16);
                if value != 0 {
                    fb.paint(rect, block(value, color_rgb(ColorToken::Background)));
                } else if self.debug_grid {
                    fb.paint(rect, board_bg.into_cell('·'));
                }
            }
        }

        if let Some(active) = snap.active {
            for (row, cells) in active.shape.iter().enumerate() {
                for (col, &value) in cells.iter().enumerate() {
                    let x = active.x + col as i32;
                    let y = active.y + row as i32;
                    if !in_board(x, y) {
                        continue;
                    }
                    let rect = self.cell_rect(&layout, x as u16, y as u16);
                    if value != 0 {
                        fb.paint(rect, block(value, color_rgb(ColorToken::Background)));
                    } else if self.debug_grid {
                        self.mark_box_cell(fb, rect);
                    }
                }
            }
        }

        self.draw_preview(fb, snap.next, &layout);

        if snap.game_over {
            draw_overlay_text(fb, &layout, "GAME OVER");
        } else if !snap.running {
            draw_overlay_text(fb, &layout, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Screen area of board cell `(x, y)`.
    fn cell_rect(&self, layout: &Layout, x: u16, y: u16) -> Rect {
        let inner = layout.frame().inner();
        Rect::new(
            inner.x + x * self.cell_w,
            inner.y + y * self.cell_h,
            self.cell_w,
            self.cell_h,
        )
    }

    fn mark_box_cell(&self, fb: &mut FrameBuffer, rect: Rect) {
        let style = CellStyle::new(BOX_FG, color_rgb(ColorToken::Background)).dim();
        if rect.w < 2 {
            fb.paint(rect, style.into_cell('+'));
            return;
        }
        fb.paint(rect, style.into_cell(' '));
        fb.paint(Rect { w: 1, ..rect }, style.into_cell('['));
        fb.paint(
            Rect {
                x: rect.right() - 1,
                w: 1,
                ..rect
            },
            style.into_cell(']'),
        );
    }

    fn draw_score_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let mut y = layout.board_y.saturating_add(1);
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.print(layout.panel_x, y, name, LABEL);
            fb.print_u32(layout.panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, next: PieceKind, layout: &Layout) {
        let top = layout.board_y.saturating_add(1);
        fb.print(layout.preview_x, top, "NEXT", LABEL);

        let origin_y = top.saturating_add(2);
        for (row, cells) in shape_of(next).iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let rect = Rect::new(
                    layout.preview_x + col as u16 * self.cell_w,
                    origin_y + row as u16 * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                );
                fb.paint(rect, block(value, PANEL_BG));
            }
        }
    }
}

/// Solid block in the catalog colour for piece id `value`.
fn block(value: u8, bg: Rgb) -> Cell {
    CellStyle::new(color_rgb(color_of(value)), bg)
        .bold()
        .into_cell('█')
}

fn in_board(x: i32, y: i32) -> bool {
    (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y)
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: &Layout, text: &str) {
    let mid_y = layout.board_y.saturating_add(layout.frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = layout
        .board_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.print(x, mid_y, text, style);
}
