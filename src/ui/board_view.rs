//! Board rendering for the skill Gomoku GUI

use std::time::Instant;

use crate::session::{PendingOp, Piece, SkillKind};
use crate::{Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::game_state::GameState;
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
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState, now: Instant) -> Option<Pos> {
        let session = &state.session;
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);

        // pieces being removed or swept fade out over the pending delay
        let fade = match state.pending_progress(now) {
            Some((PendingOp::Remove { .. } | PendingOp::Clear, progress)) => 1.0 - progress,
            _ => 1.0,
        };
        for piece in session.pieces() {
            let alpha = if piece.removing || piece.clearing { fade } else { 1.0 };
            self.draw_stone(&painter, piece.pos, piece.stone, alpha);
        }

        if let Some(pos) = session.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = session.winning_line() {
            self.draw_winning_line(&painter, line);
        }

        if session.status().is_over() || session.is_processing() || session.is_ai_turn() {
            return None;
        }

        let board_pos = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_board(pointer))?;
        let removal_armed = session.active_skill() == Some(SkillKind::Delete);

        match (removal_armed, session.piece_at(board_pos)) {
            (true, Some(piece)) => self.draw_remove_target(&painter, piece),
            (false, None) => self.draw_hover_preview(&painter, board_pos, session.current_player()),
            _ => {}
        }

        response.clicked().then_some(board_pos)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = BOARD_MARGIN + (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters A-M, row numbers 13-1 top to bottom
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
            let bottom = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(bottom, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..BOARD_SIZE {
            let label = (BOARD_SIZE - row).to_string();
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let left = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            let right = Pos2::new(self.board_rect.max.x - 12.0, y);
            painter.text(right, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone, alpha: f32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60).gamma_multiply(alpha),
                );
                painter.circle_filled(center, radius, BLACK_STONE.gamma_multiply(alpha));
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT.gamma_multiply(alpha),
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40).gamma_multiply(alpha),
                );
                painter.circle_filled(center, radius, WHITE_STONE.gamma_multiply(alpha));
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW.gamma_multiply(alpha)),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Ring around the piece the removal skill would take
    fn draw_remove_target(&self, painter: &Painter, piece: &Piece) {
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        painter.circle_stroke(
            self.board_to_screen(piece.pos),
            radius,
            Stroke::new(3.0, REMOVE_TARGET),
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, hover_stone(turn));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }
        Pos::checked(y.floor() as usize, x.floor() as usize)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
