//! Interactive viewer for the text black-hole effect built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (particle field, attractor cell, configuration) and implements
//! [`eframe::App`] to lay out, advance, and render the effect every frame.

use blackhole_core::{
    attractor::Attractor,
    bounds::Bounds,
    config::Config,
    frame::{self, DrawCommand},
    layout,
    particle::ParticleField,
};
use eframe::App;
use glam::Vec2;
use rand::rng;

/// Text rendered by the effect.
const DEFAULT_TEXT: &str = "\
Far from any charted shore, light itself leans toward the dark\n\
and traces slow arcs around a point that gives nothing back.\n\
Words rest in quiet rows on the page until the current finds them.\n\
A passing pull is enough to set every letter adrift, spiraling\n\
inward along paths that no reader was ever meant to follow.\n\
When the pull moves on, each stray glyph remembers its place\n\
and settles home again, a little slower with every step it takes.\n\
Nothing here is lost. The page keeps what the dark lets go.";

/// Alpha of the square outline stroke (30% black).
const OUTLINE_ALPHA: u8 = 77;

/// Number of translucent discs approximating the pointer's radial shading.
const HALO_STEPS: u32 = 12;

/// Peak accumulated alpha of the pointer shading at its center.
const HALO_PEAK_ALPHA: f32 = 0.3;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`ParticleField`], [`Attractor`], [`Config`].
/// - eframe/egui callbacks for drawing and pointer tracking.
///
/// The typical per-frame update is:
/// 1. Rebuild the field if the viewport size changed since the last frame.
/// 2. Record the latest pointer sample into the attractor cell.
/// 3. If `running`, advance the whole field by one frame.
/// 4. Draw the backdrop, pointer shading, square outline, and every glyph.
pub struct Viewer {
    text: String,
    field: ParticleField,
    attractor: Attractor,
    cfg: Config,

    rng: rand::rngs::ThreadRng,

    /// Viewport size the current field was laid out for.
    viewport: Vec2,
    /// Draw commands from the most recent advanced frame.
    draw_buf: Vec<DrawCommand>,
    running: bool,
}

impl Viewer {
    /// Creates a viewer with the built-in text and default configuration.
    ///
    /// The field starts empty; the first frame observes the real viewport
    /// size and triggers the initial layout through the resize path.
    pub fn new() -> Self {
        let cfg = Config::default();
        let field = ParticleField::empty(Bounds::centered_in(Vec2::ZERO, cfg.square_size));

        Self {
            text: DEFAULT_TEXT.to_owned(),
            field,
            attractor: Attractor::new(),
            cfg,
            rng: rng(),
            viewport: Vec2::ZERO,
            draw_buf: Vec::new(),
            running: true,
        }
    }

    /// Discards the current field and lays the text out for `viewport`.
    ///
    /// The attractor cell is left untouched: the pointer sample recorded
    /// before a resize stays valid afterwards.
    fn relayout(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.field = layout::layout_text(&self.text, viewport, &self.cfg, &mut self.rng);
        log::info!(
            "laid out {} particles for {:.0}x{:.0} viewport",
            self.field.particles.len(),
            viewport.x,
            viewport.y
        );
    }

    /// Rebuilds the field at the current viewport, dropping all motion.
    fn reset(&mut self) {
        self.relayout(self.viewport);
    }

    /// Builds the top panel UI (run control, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (particle count, last pointer sample).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.attractor.position() {
                    Some(p) => ui.label(format!("pointer = ({:.0}, {:.0})", p.x, p.y)),
                    None => ui.label("pointer = none"),
                };
                ui.separator();
                ui.label(format!("particles = {}", self.field.particles.len()));
            });
        });
    }

    /// Draws the translucent shading well under the pointer.
    ///
    /// The painter has no radial gradient fill, so stacked equal-alpha
    /// discs approximate a falloff from `HALO_PEAK_ALPHA` black at the
    /// center to transparent at the influence radius.
    fn draw_pointer_shading(&self, painter: &egui::Painter, origin: egui::Pos2, center: Vec2) {
        let screen = egui::pos2(origin.x + center.x, origin.y + center.y);
        let step_alpha = (HALO_PEAK_ALPHA * 255.0 / HALO_STEPS as f32) as u8;

        for i in 1..=HALO_STEPS {
            let r = self.cfg.max_distance * i as f32 / HALO_STEPS as f32;
            painter.circle_filled(screen, r, egui::Color32::from_black_alpha(step_alpha));
        }
    }

    /// Draws one glyph baseline-anchored at its simulated position.
    fn draw_glyph(&self, painter: &egui::Painter, origin: egui::Pos2, glyph: char, pos: Vec2) {
        painter.text(
            egui::pos2(origin.x + pos.x, origin.y + pos.y),
            egui::Align2::LEFT_BOTTOM,
            glyph,
            egui::FontId::proportional(self.cfg.font_size),
            egui::Color32::BLACK,
        );
    }

    /// Builds the central panel where the effect is simulated and drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // A viewport change discards the field wholesale and lays the
            // text out again; nothing is carried over but the attractor.
            let viewport = Vec2::new(rect.width(), rect.height());
            if viewport != self.viewport {
                self.relayout(viewport);
            }

            // Latest pointer sample wins; egui already collapses the
            // samples that arrived since the previous frame.
            if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
                self.attractor
                    .record(Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y));
            }

            painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::WHITE);

            if let Some(center) = self.attractor.position() {
                self.draw_pointer_shading(&painter, rect.min, center);
            }

            // Square boundary.
            let b = self.field.bounds;
            let square = egui::Rect::from_min_size(
                egui::pos2(rect.min.x + b.min.x, rect.min.y + b.min.y),
                egui::vec2(b.size, b.size),
            );
            painter.rect_stroke(
                square,
                egui::CornerRadius::ZERO,
                egui::Stroke::new(2.0, egui::Color32::from_black_alpha(OUTLINE_ALPHA)),
                egui::StrokeKind::Middle,
            );

            if self.running {
                frame::advance_frame(
                    &mut self.field,
                    &self.attractor,
                    &self.cfg,
                    &mut self.draw_buf,
                );
                for cmd in &self.draw_buf {
                    self.draw_glyph(&painter, rect.min, cmd.glyph, cmd.pos);
                }

                ctx.request_repaint();
            } else {
                // Paused: redraw the field where it stopped.
                for p in &self.field.particles {
                    self.draw_glyph(&painter, rect.min, p.glyph, p.pos);
                }
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_viewer_starts_running_with_an_empty_field() {
        let viewer = Viewer::new();

        assert!(viewer.running);
        assert!(viewer.field.particles.is_empty());
        assert_eq!(viewer.attractor.position(), None);
    }

    #[test]
    fn relayout_builds_the_field_for_the_viewport() {
        let mut viewer = Viewer::new();
        viewer.text = "ab\ncd".to_owned();

        viewer.relayout(Vec2::new(1000.0, 1000.0));

        // Cardinality is deterministic: it only depends on the layout, not
        // on the per-particle randomized parameters.
        assert_eq!(viewer.field.particles.len(), 4);
        assert_eq!(viewer.viewport, Vec2::new(1000.0, 1000.0));
        assert_eq!(viewer.field.bounds.min, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn relayout_discards_the_previous_collection() {
        let mut viewer = Viewer::new();
        viewer.text = "one line\nand another".to_owned();
        viewer.relayout(Vec2::new(1000.0, 1000.0));
        let before = viewer.field.particles.len();
        assert!(before > 0);

        // Scatter the particles, then resize: the new field starts at rest.
        for p in &mut viewer.field.particles {
            p.pos += Vec2::new(37.0, -19.0);
        }
        viewer.relayout(Vec2::new(1200.0, 900.0));

        assert_eq!(viewer.field.particles.len(), before);
        for p in &viewer.field.particles {
            assert_eq!(p.pos, p.rest);
        }
    }

    #[test]
    fn resize_preserves_the_attractor_sample() {
        let mut viewer = Viewer::new();
        viewer.attractor.record(Vec2::new(123.0, 456.0));

        viewer.relayout(Vec2::new(1000.0, 1000.0));

        assert_eq!(viewer.attractor.position(), Some(Vec2::new(123.0, 456.0)));
    }

    #[test]
    fn reset_returns_particles_to_rest_at_the_same_viewport() {
        let mut viewer = Viewer::new();
        viewer.text = "reset me".to_owned();
        viewer.relayout(Vec2::new(1000.0, 1000.0));

        // Within influence range of the single text row at y = 140.
        let mut attractor = Attractor::new();
        attractor.record(Vec2::new(500.0, 140.0));
        frame::advance_frame(
            &mut viewer.field,
            &attractor,
            &viewer.cfg,
            &mut viewer.draw_buf,
        );
        assert!(viewer.field.particles.iter().any(|p| p.pos != p.rest));

        viewer.reset();

        assert_eq!(viewer.viewport, Vec2::new(1000.0, 1000.0));
        for p in &viewer.field.particles {
            assert_eq!(p.pos, p.rest);
        }
    }

    #[test]
    fn default_text_fills_the_default_square() {
        let mut viewer = Viewer::new();
        viewer.relayout(Vec2::new(1920.0, 1080.0));

        // Every line of the built-in text fits the 800-wide square at the
        // default 11-point advance, so no glyph is dropped.
        let expected: usize = DEFAULT_TEXT.split('\n').map(|l| l.chars().count()).sum();
        assert_eq!(viewer.field.particles.len(), expected);
    }
}
