//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::{Mark, Player};

use super::board_view::BoardView;
use super::game_state::{GameState, RoundOutcome};
use super::theme::*;

/// Main application
pub struct TorusApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TorusApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl TorusApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Round (N)").clicked() {
                        self.state.start_next_round();
                        ui.close_menu();
                    }
                    if ui.button("Reset Scores (R)").clicked() {
                        self.state.reset_match();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Round {}", self.state.round));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.round_over {
                    ui.add_space(10.0);
                    self.render_outcome_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
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

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("XO").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TORUS")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("6x6 wrap-around, three in a row")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (glyph, glyph_color) = match self.state.marks.mark_of(self.state.current_turn) {
                Mark::Cross => ("X", CROSS_COLOR),
                _ => ("O", NOUGHT_COLOR),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(glyph).size(30.0).strong().color(glyph_color));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let (status, status_color) = if self.state.round_over.is_some() {
                        ("Round over", STATUS_WARNING)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(15.0).strong().color(status_color));
                    ui.label(
                        RichText::new(format!("{} marks placed", self.state.board.mark_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    /// Render the running score card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            self.render_score_row(ui, "You", "O", NOUGHT_COLOR, self.state.scores.human);
            ui.add_space(6.0);
            self.render_score_row(ui, "Computer", "X", CROSS_COLOR, self.state.scores.computer);
        });
    }

    /// Render a single score row
    fn render_score_row(
        &self,
        ui: &mut egui::Ui,
        name: &str,
        glyph: &str,
        color: egui::Color32,
        score: u32,
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(glyph).size(18.0).color(color));
            ui.add_space(4.0);
            ui.label(RichText::new(name).size(13.0).color(TEXT_PRIMARY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{score}"))
                        .size(16.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("New round").clicked() {
                    self.state.start_next_round();
                }
                ui.add_space(4.0);
                if ui.button("Reset scores").clicked() {
                    self.state.reset_match();
                }
            });
        });
    }

    /// Render search debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Score: {}", result.score))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}ms", result.time_ms))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    let col = (b'A' + pos.col) as char;
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("-> {}{}", col, pos.row + 1))
                            .size(12.0)
                            .strong()
                            .color(STATUS_OK),
                    );
                }
            } else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render round outcome card
    fn render_outcome_card(&self, ui: &mut egui::Ui, outcome: RoundOutcome) {
        let (headline, accent) = match outcome {
            RoundOutcome::Win(win) => match win.winner {
                Player::Human => ("You win the round!", HUMAN_WIN_LINE),
                Player::Computer => ("Computer wins the round", COMPUTER_WIN_LINE),
            },
            RoundOutcome::Draw => ("Draw", STATUS_WARNING),
        };

        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(headline).size(14.0).strong().color(accent));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("Next round starting...")
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_WARNING));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.winning_line();
            let human_mark = self.state.marks.mark_of(Player::Human);

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                human_mark,
                self.state.last_move,
                winning_line.as_ref(),
                self.state.round_over.is_none(),
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::N) {
                self.state.start_next_round();
            }
            if i.key_pressed(egui::Key::R) {
                self.state.reset_match();
            }
        });
    }
}

impl eframe::App for TorusApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // A concluded round stays on screen briefly, then the board clears
        self.state.clear_expired_result();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep repainting while the round result is displayed so the
        // timed reset fires without further input
        if self.state.round_over.is_some() {
            ctx.request_repaint();
        }
    }
}
