//! Board rendering for the Gomoku GUI

use crate::{Board, Coord, Stone};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Half extent of the board last drawn
    half: i32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            half: 7,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Stone,
        last_move: Option<Coord>,
        winning_line: Option<&[Coord]>,
        game_over: bool,
    ) -> Option<Coord> {
        let available_size = ui.available_size();
        self.half = board.half_extent();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        let lines = (board.size().max(2) - 1) as f32;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / lines;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(at) = last_move {
            self.draw_last_move_marker(&painter, at);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(at) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.get(at) == Stone::Empty;
                    self.draw_hover_preview(&painter, at, to_move, is_valid);

                    // Occupied cells are forwarded too so the engine reports why
                    if response.clicked() {
                        clicked = Some(at);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = 2.0 * self.half as f32 * self.cell_size;

        for i in 0..=2 * self.half {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points: the center plus four corner points on larger boards
    fn draw_star_points(&self, painter: &Painter) {
        let mut points = vec![Coord::ORIGIN];
        let k = self.half - STAR_POINT_INSET;
        if k > 1 {
            points.extend([(-k, -k), (k, -k), (-k, k), (k, k)].map(Coord::from));
        }
        for at in points {
            painter.circle_filled(self.board_to_screen(at), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (engine coordinates, origin at center)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for v in -self.half..=self.half {
            let label = v.to_string();
            let x = self.board_to_screen(Coord::new(v, 0)).x;
            let y = self.board_to_screen(Coord::new(0, v)).y;

            // Columns (top, bottom)
            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            let bottom = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(bottom, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            // Rows (left, right)
            let left = Pos2::new(self.board_rect.min.x + 14.0, y);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            let right = Pos2::new(self.board_rect.max.x - 14.0, y);
            painter.text(right, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (at, stone) in board.stones() {
            self.draw_stone(painter, at, stone);
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, at: Coord, stone: Stone) {
        let center = self.board_to_screen(at);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, at: Coord) {
        let center = self.board_to_screen(at);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Coord]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &at in line {
            painter.circle_stroke(self.board_to_screen(at), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, at: Coord, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(at);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Coord> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).round() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).round() as i32;
        let at = Coord::new(col - self.half, row - self.half);

        let range = -self.half..=self.half;
        (range.contains(&at.x) && range.contains(&at.y)).then_some(at)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, at: Coord) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (at.x + self.half) as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (at.y + self.half) as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
