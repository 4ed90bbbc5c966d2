// ui.rs - The driver loop: interval-throttled evolution, frame-capped
// geometry, and a single composited paint pass.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Pos2, Stroke, Vec2};
use life_core::{Grid, GridError, LifeConfig, PATTERNS};

/// Line segments per quarter arc when flattening cell contours.
const ARC_SEGMENTS: usize = 6;

pub struct LifeApp {
    config: LifeConfig,
    grid: Grid,
    is_running: bool,
    /// Clock origin; all core timestamps are milliseconds since this.
    started: Instant,
    /// Timestamp of the last `evaluate` call.
    last_evolution: f64,
    /// Timestamp of the last geometry pass.
    last_geometry: f64,
    /// Cached cell contours (relative to the grid origin), rebuilt at
    /// most `max_fps` times per second. Excess update callbacks repaint
    /// this batch unchanged.
    contours: Vec<Vec<Pos2>>,
    fill_color: Color32,
    bg_color: Color32,
    selected_pattern: usize,
}

impl LifeApp {
    pub fn new(config: LifeConfig) -> Result<Self, GridError> {
        let grid = Grid::random(
            config.grid_width,
            config.grid_height,
            config.seed_radius,
            &mut rand::rng(),
        )?;
        Ok(Self {
            config,
            grid,
            is_running: true,
            started: Instant::now(),
            last_evolution: 0.0,
            last_geometry: f64::NEG_INFINITY,
            contours: Vec::new(),
            fill_color: Color32::from_rgb(0, 200, 0),
            bg_color: Color32::BLACK,
            selected_pattern: 0,
        })
    }

    /// Milliseconds since app start: the shared clock domain for
    /// evolution, transition stamps, and the morph animation.
    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn reseed_random(&mut self, now: f64) {
        match Grid::random(
            self.config.grid_width,
            self.config.grid_height,
            self.config.seed_radius,
            &mut rand::rng(),
        ) {
            Ok(grid) => {
                self.grid = grid;
                self.last_evolution = now;
            }
            Err(err) => tracing::error!(%err, "failed to reseed random grid"),
        }
    }

    fn apply_selected_pattern(&mut self, now: f64) {
        let pattern = &PATTERNS[self.selected_pattern];
        match Grid::with_pattern(
            self.config.grid_width,
            self.config.grid_height,
            pattern,
            self.config.pattern_offset,
        ) {
            Ok(grid) => {
                self.grid = grid;
                self.last_evolution = now;
            }
            Err(err) => tracing::error!(%err, pattern = pattern.name, "failed to apply pattern"),
        }
    }

    fn rebuild_contours(&mut self, now: f64) {
        let style = self.config.style;
        self.contours.clear();
        for cell in self.grid.cells() {
            let outline = cell.shape(now, &style).outline(ARC_SEGMENTS);
            self.contours
                .push(outline.iter().map(|p| egui::pos2(p.x, p.y)).collect());
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now_ms();

        // Discrete step, no more often than the evolution interval.
        if self.is_running && now - self.last_evolution >= self.config.evolution_interval {
            self.grid.evaluate(now);
            self.last_evolution = now;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Morphing Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_evolution = now;
                    }
                }

                if ui.button("🎲 Random").clicked() {
                    self.reseed_random(now);
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern(now);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.grid.generation()));
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.config.evolution_interval;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.2..=10.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.config.evolution_interval = 1000.0 / speed;
                }

                ui.separator();

                ui.label("Fill:");
                ui.color_edit_button_srgba(&mut self.fill_color);
                ui.label("Background:");
                ui.color_edit_button_srgba(&mut self.bg_color);
            });

            ui.separator();

            // Drawable surface: one rect per grid, one shape batch per
            // frame.
            let style = self.config.style;
            let total = Vec2::new(
                style.pitch() * self.config.grid_width as f32 - style.padding,
                style.pitch() * self.config.grid_height as f32 - style.padding,
            );
            let (response, painter) = ui.allocate_painter(total, egui::Sense::hover());
            let origin = response.rect.min.to_vec2();

            // Geometry pass, capped at max_fps. Callbacks arriving
            // faster than the cap repaint the cached contours.
            let frame_interval = 1000.0 / self.config.max_fps;
            if now - self.last_geometry >= frame_interval {
                self.rebuild_contours(now);
                self.last_geometry = now;
            }

            painter.rect_filled(response.rect, 0.0, self.bg_color);
            let shapes: Vec<egui::Shape> = self
                .contours
                .iter()
                .filter(|contour| contour.len() >= 3)
                .map(|contour| {
                    let points = contour.iter().map(|&p| p + origin).collect();
                    egui::Shape::convex_polygon(points, self.fill_color, Stroke::NONE)
                })
                .collect();
            painter.extend(shapes);

            ui.separator();

            // Statistics
            let total_cells = self.config.grid_width * self.config.grid_height;
            let live_cells = self.grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total_cells - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total_cells as f32 * 100.0
                ));
            });
        });

        // Reschedule at the frame cap; the morph animation needs repaints
        // even while the discrete simulation is idle.
        ctx.request_repaint_after(Duration::from_secs_f64(1.0 / self.config.max_fps));
    }
}
