//! Main application for the skill Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::session::{GameMode, GameStatus, Session, SkillKind};
use crate::{AppConfig, Stone, BOARD_SIZE};

/// Main skill Gomoku application
pub struct SkillGomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl SkillGomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: GameState::new(Session::with_config(GameMode::default(), config)),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Player vs AI").clicked() {
                        self.state.set_mode(GameMode::PvAI);
                        ui.close_menu();
                    }
                    if ui.button("Player vs Player").clicked() {
                        self.state.set_mode(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.session.mode() {
                        GameMode::PvAI => "PvAI - You: Black",
                        GameMode::PvP => "PvP - Hotseat",
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context, now: Instant) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_skills_card(ui, now);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.session.status().is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("SKILL GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("技能五子棋").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let session = &self.state.session;
        Self::card_frame().show(ui, |ui| {
            let is_black = session.current_player() == Stone::Black;
            let (stone_char, accent) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { egui::Color32::from_rgb(30, 30, 35) };
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
                    let name = session.current_player().name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_WARN)
                    } else if session.status().is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if session.is_processing() {
                        ("Casting...", STATUS_WARN)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_skills_card(&mut self, ui: &mut egui::Ui, now: Instant) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SKILLS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for (i, kind) in SkillKind::ALL.into_iter().enumerate() {
                let armed = self.state.session.active_skill() == Some(kind);
                // an armed skill can always be disarmed
                let enabled = armed || self.state.session.can_use(kind);
                let accent = skill_color(kind);
                let fill = if armed { accent } else { egui::Color32::from_rgb(50, 53, 58) };
                let text_color = if enabled { TEXT_PRIMARY } else { TEXT_MUTED };

                let button = egui::Button::new(
                    RichText::new(format!("{}  {}", i + 1, skill_label(kind)))
                        .size(13.0)
                        .strong()
                        .color(text_color),
                )
                .fill(fill)
                .stroke(egui::Stroke::new(1.0, accent))
                .corner_radius(CornerRadius::same(6))
                .min_size(Vec2::new(ui.available_width(), 30.0));

                if ui.add_enabled(enabled, button).on_hover_text(skill_hint(kind)).clicked() {
                    self.state.press_skill(kind, now);
                }
                ui.add_space(4.0);
            }

            if self.state.session.active_skill() == Some(SkillKind::Delete) {
                ui.label(RichText::new("Pick a piece to remove").size(11.0).color(REMOVE_TARGET));
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
                let (label, next) = match self.state.session.mode() {
                    GameMode::PvAI => ("Switch to PvP", GameMode::PvP),
                    GameMode::PvP => ("Switch to PvAI", GameMode::PvAI),
                };
                if ui.button(label).clicked() {
                    self.state.set_mode(next);
                }
            });

            ui.add_space(8.0);
            let session = &self.state.session;
            ui.label(
                RichText::new(format!(
                    "Pieces {}  ·  Undo depth {}",
                    session.pieces().len(),
                    session.history_len()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = self.state.session.last_ai_result() else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(STATUS_OK));
                        ui.label(RichText::new(format!("Score: {:.1}", result.combined_score())).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(
                                RichText::new(format!("{} cand / {} tied", result.candidates, result.ties))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    let col = (b'A' + pos.col) as char;
                    let row = BOARD_SIZE - pos.row as usize;
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("→ {}{}", col, row)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (headline, symbol, accent) = match self.state.session.status() {
            GameStatus::Won(Stone::Black) => ("BLACK WINS!", "●", egui::Color32::from_rgb(70, 70, 75)),
            GameStatus::Won(_) => ("WHITE WINS!", "○", egui::Color32::from_rgb(220, 220, 225)),
            _ => ("DRAW", "◐", TEXT_SECONDARY),
        };
        let how = match self.state.session.winning_line() {
            Some(_) => "by 5-in-a-row",
            None if self.state.session.status() == GameStatus::Draw => "board is full",
            None => "by 力拔山兮",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 70.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                    ui.add_space(4.0);
                    ui.label(RichText::new(how).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
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

    fn render_board(&mut self, ctx: &Context, now: Instant) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            if let Some(pos) = self.board_view.show(ui, &self.state, now) {
                self.state.click_cell(pos, now);
            }
        });
    }

    /// Keyboard shortcuts: N new game, D debug panel, 1-4 skills
    fn handle_input(&mut self, ctx: &Context, now: Instant) {
        let keys = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3, egui::Key::Num4];
        let (new_game, toggle_debug, skill) = ctx.input(|i| {
            let skill = keys
                .iter()
                .position(|k| i.key_pressed(*k))
                .map(|idx| SkillKind::ALL[idx]);
            (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D), skill)
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.state.reset();
        }
        if let Some(kind) = skill {
            self.state.press_skill(kind, now);
        }
    }
}

impl eframe::App for SkillGomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.handle_input(ctx, now);
        self.state.tick(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx, now);
        self.render_board(ctx, now);

        if self.state.wants_repaint() {
            ctx.request_repaint();
        }
    }
}
