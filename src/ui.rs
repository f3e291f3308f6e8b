// ui.rs - egui presentation for the Life grid

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::{LifeApp, MAX_GRID_SIZE, MIN_GRID_SIZE};

// Pixel budget for the painted grid; cells shrink as the grid grows.
const GRID_AREA: f32 = 780.0;
const CELL_SPACING: f32 = 0.5;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.maybe_tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.running { "⏹ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if self.running {
                        self.stop();
                    } else {
                        self.start();
                    }
                }

                // Clear, Random and the size slider only apply while
                // stopped.
                ui.add_enabled_ui(!self.running, |ui| {
                    if ui.button("Clear").clicked() {
                        self.clear();
                    }

                    if ui.button("🎲 Random").clicked() {
                        self.randomize();
                    }

                    ui.separator();

                    let mut size = self.size;
                    ui.label("Size:");
                    ui.add(egui::Slider::new(&mut size, MIN_GRID_SIZE..=MAX_GRID_SIZE));
                    ui.label(format!("{size}×{size}"));
                    if size != self.size {
                        self.resize(size);
                    }
                });

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Use Start/Stop to run the simulation.");

            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            // Statistics
            let live_cells = self.grid.population();
            let total_cells = self.grid.size() * self.grid.size();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total_cells - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total_cells as f32) * 100.0
                ));
            });
        });

        // Keep ticks firing while running.
        if self.running {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let grid_size = self.grid.size();
        let box_size = (GRID_AREA / grid_size as f32 - CELL_SPACING).min(15.0);

        let start_pos = ui.cursor().min;
        let total_size =
            Vec2::splat((box_size + CELL_SPACING) * grid_size as f32 - CELL_SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(
            Rect::from_min_size(start_pos, total_size),
            0.0,
            Color32::BLACK,
        );

        let mut clicked_cell = None;

        for row in 0..grid_size {
            for col in 0..grid_size {
                let x = start_pos.x + col as f32 * (box_size + CELL_SPACING);
                let y = start_pos.y + row as f32 * (box_size + CELL_SPACING);

                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let cell_color = if self.grid.get(row, col).is_alive() {
                    self.live_color
                } else {
                    self.dead_color
                };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                // A click between ticks just flips the value the next
                // tick will read, so toggling is allowed while running.
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if rect.contains(pos) {
                            clicked_cell = Some((row, col));
                        }
                    }
                }
            }
        }

        if let Some((row, col)) = clicked_cell {
            self.toggle_cell(row, col);
        }
    }
}
