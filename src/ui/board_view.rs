//! Board rendering for the GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Player, Pos, BOARD_SIZE};
use crate::rules::WinLine;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 64.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Occupied cells are still reported on click; the game state decides
    /// whether the move is legal.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        human_mark: Mark,
        last_move: Option<Pos>,
        winning_line: Option<&WinLine>,
        input_enabled: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y) - 16.0;
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        // Board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Cell separators
        self.draw_grid(&painter);

        // Placed marks
        self.draw_marks(&painter, board);

        // Last move marker
        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Winning line highlight
        if let Some(win) = winning_line {
            self.draw_winning_line(&painter, win);
        }

        // Hover preview and click
        let mut clicked = None;
        if input_enabled {
            if let Some(pointer) = response.hover_pos() {
                if let Some(pos) = self.screen_to_cell(pointer) {
                    if board.get(pos) == Mark::Empty {
                        self.draw_glyph(&painter, pos, human_mark, hover_ghost(glyph_color(human_mark)));
                    }
                    if response.clicked() {
                        clicked = Some(pos);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the cell separators, `BOARD_SIZE + 1` lines each way
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            let end = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            let end = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let mark = board.get(pos);
                if mark != Mark::Empty {
                    self.draw_glyph(painter, pos, mark, glyph_color(mark));
                }
            }
        }
    }

    /// Draw a single X or O glyph centered in its cell
    fn draw_glyph(&self, painter: &Painter, pos: Pos, mark: Mark, color: Color32) {
        let glyph = match mark {
            Mark::Cross => "X",
            Mark::Nought => "O",
            Mark::Empty => return,
        };
        painter.text(
            self.cell_center(pos),
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(self.cell_size * GLYPH_SIZE_RATIO),
            color,
        );
    }

    /// Draw last move marker in the cell corner
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let offset = Vec2::new(self.cell_size * 0.34, -self.cell_size * 0.34);
        painter.circle_filled(
            self.cell_center(pos) + offset,
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    /// Highlight the winning triple: two segments through the cell
    /// centers plus a ring around each cell.
    ///
    /// A line that wraps the board edge is drawn straight across the
    /// board, the wrap being implicit in which cells are ringed.
    fn draw_winning_line(&self, painter: &Painter, win: &WinLine) {
        let color = match win.winner {
            Player::Human => HUMAN_WIN_LINE,
            Player::Computer => COMPUTER_WIN_LINE,
        };
        let stroke = Stroke::new(WIN_LINE_WIDTH, color);

        for i in 0..2 {
            let start = self.cell_center(win.line[i]);
            let end = self.cell_center(win.line[i + 1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in win.line {
            painter.circle_stroke(
                self.cell_center(pos),
                self.cell_size * 0.42,
                Stroke::new(2.0, color),
            );
        }
    }

    /// Convert screen coordinates to a cell by dividing the board area
    /// by the board size
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32 {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + (f32::from(pos.col) + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + (f32::from(pos.row) + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

fn glyph_color(mark: Mark) -> Color32 {
    match mark {
        Mark::Cross => CROSS_COLOR,
        Mark::Nought => NOUGHT_COLOR,
        Mark::Empty => Color32::TRANSPARENT,
    }
}
