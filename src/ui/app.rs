//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{Coord, GomokuEngine, Stone};
use super::board_view::BoardView;
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    engine: GomokuEngine,
    board_view: BoardView,
    show_moves: bool,
}

impl GomokuApp {
    /// Create the app around an already configured engine
    pub fn new(_cc: &eframe::CreationContext<'_>, engine: GomokuEngine) -> Self {
        Self {
            engine,
            board_view: BoardView::default(),
            show_moves: true,
        }
    }

    fn undo(&mut self) {
        if self.engine.rollback().is_none() {
            tracing::debug!("nothing to undo");
        }
    }

    fn new_game(&mut self) {
        self.engine.reset();
    }

    /// Forward a board click to the engine; finished games ignore clicks
    fn handle_click(&mut self, at: Coord) {
        if self.engine.is_over() {
            return;
        }
        // Rejections land in the engine's error slot, shown in the side panel
        if let Err(err) = self.engine.play(at) {
            tracing::debug!(%err, "click rejected");
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_moves, "Move List (M)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.engine.size();
                    ui.label(format!("{size}x{size} - Hotseat"));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_moves {
                    ui.add_space(10.0);
                    self.render_moves_card(ui);
                }

                if let Some(winner) = self.engine.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(err) = self.engine.last_error() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &err.to_string());
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.engine.to_move() == Stone::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { BLACK_STONE };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.engine.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let undo = RichText::new("↩ Undo").size(12.0).color(TEXT_PRIMARY);
                    if ui
                        .add(egui::Label::new(undo).sense(egui::Sense::click()))
                        .clicked()
                    {
                        self.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let new_game = RichText::new("New Game").size(12.0).color(TEXT_PRIMARY);
                    if ui
                        .add(egui::Label::new(new_game).sense(egui::Sense::click()))
                        .clicked()
                    {
                        self.new_game();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.engine.moves().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the move log, newest last
    fn render_moves_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if self.engine.moves().is_empty() {
                ui.label(RichText::new("No moves yet").size(10.0).color(TEXT_MUTED));
                return;
            }

            egui::ScrollArea::vertical()
                .max_height(220.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (ply, at) in self.engine.moves().iter().enumerate() {
                        let symbol = if Stone::for_ply(ply) == Stone::Black { "●" } else { "○" };
                        ui.label(
                            RichText::new(format!("{:>3}. {symbol} {at}", ply + 1))
                                .size(11.0)
                                .monospace()
                                .color(TEXT_SECONDARY),
                        );
                    }
                });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Stone) {
        let (name, symbol, accent) = if winner == Stone::Black {
            ("BLACK", "●", egui::Color32::from_rgb(70, 70, 75))
        } else {
            ("WHITE", "○", egui::Color32::from_rgb(220, 220, 225))
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });

                    ui.add_space(4.0);
                    ui.label(RichText::new("by 5-in-a-row").size(11.0).color(TEXT_SECONDARY));

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui.add(egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY)
                            ).sense(egui::Sense::click())).clicked() {
                                self.new_game();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(ERROR_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG))
            .show(ctx, |ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.engine.board(),
                    self.engine.to_move(),
                    self.engine.last_move(),
                    self.engine.victory().map(|v| v.line.as_slice()),
                    self.engine.is_over(),
                );

                if let Some(at) = clicked {
                    self.handle_click(at);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, new_game, toggle_moves) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::M),
            )
        });

        if undo {
            self.undo();
        }
        if new_game {
            self.new_game();
        }
        if toggle_moves {
            self.show_moves = !self.show_moves;
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
