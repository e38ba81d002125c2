// ui.rs - eframe front end: controls, grid painting and click handling

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use torus_life::PATTERNS;

use crate::config::{MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND};
use crate::game::GameOfLife;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Generations follow the tick interval, not the frame rate
        self.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let run_label = if self.is_running { "Pause" } else { "Run" };
                if ui.button(run_label).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("Next generation")).clicked() {
                    self.step();
                }

                if ui.button("Wipe").clicked() {
                    self.clear();
                }

                if ui.button("Scatter").clicked() {
                    self.randomize(rand::random());
                }

                ui.separator();

                egui::ComboBox::from_label("Seed")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Stamp").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Gen {}", self.generation));
            });

            ui.horizontal(|ui| {
                let mut rate = self.ticks_per_second();
                let slider = egui::Slider::new(&mut rate, MIN_TICKS_PER_SECOND..=MAX_TICKS_PER_SECOND)
                    .logarithmic(true)
                    .suffix(" ticks/s")
                    .text("Rate");
                if ui.add(slider).changed() {
                    self.set_ticks_per_second(rate);
                }

                ui.separator();

                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("alive");
                ui.color_edit_button_srgba(&mut self.dead_color);
                ui.label("empty");
            });

            ui.label("While paused, click a square to flip it. Opposite edges touch.");

            ui.separator();

            let (width, height) = (self.board().width(), self.board().height());
            let cell_size = self.cell_size;
            let total_size = Vec2::new(width as f32 * cell_size, height as f32 * cell_size);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            for y in 0..height {
                for x in 0..width {
                    let rect = Rect::from_min_size(
                        egui::pos2(origin.x + x as f32 * cell_size, origin.y + y as f32 * cell_size),
                        Vec2::splat(cell_size),
                    );

                    if self.board().get(x, y) {
                        painter.rect_filled(rect, 0.0, self.live_color);
                    }

                    // Faint grid lines while editing
                    if !self.is_running {
                        painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }
                }
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    self.click(offset.x, offset.y);
                }
            }

            ui.separator();

            let alive = self.board().population();
            let total = width * height;
            ui.label(format!(
                "{alive} of {total} alive ({:.1}%) on a {width}x{height} torus",
                alive as f32 / total as f32 * 100.0
            ));
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
