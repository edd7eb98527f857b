// ui.rs - eframe host: samples pointer and keys, ticks the sandbox, paints the grid

use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Rect, Vec2};
use std::time::Instant;

use crate::config::SandboxConfig;
use crate::render::{self, Canvas};
use crate::sandbox::{Sandbox, TickInput};
use crate::stroke::Pixel;

pub struct PaintApp {
    config: SandboxConfig,
    sandbox: Sandbox,
}

impl PaintApp {
    pub fn new(config: SandboxConfig, width: usize, height: usize) -> Self {
        let sandbox = Sandbox::new(width, height, config.cell_size, config.step_interval, Instant::now());
        log::info!(
            "Grid {}x{} cells of {}px, stepping every {:?}",
            width, height, config.cell_size, sandbox.step_interval()
        );
        Self { config, sandbox }
    }

    fn to_pixel(&self, pos: egui::Pos2) -> Pixel {
        Pixel::new(
            (pos.x / self.config.pixel_scale).floor() as i32,
            (pos.y / self.config.pixel_scale).floor() as i32,
        )
    }

    fn sample_input(&self, ctx: &egui::Context) -> TickInput {
        ctx.input(|i| TickInput {
            pointer     : i.pointer.latest_pos().map(|pos| self.to_pixel(pos)),
            held        : i.pointer.primary_down() || i.pointer.primary_pressed(),
            released    : i.pointer.primary_released(),
            toggle_mode : i.key_pressed(self.config.toggle_key),
            reset       : i.key_pressed(self.config.reset_key),
        })
    }
}

/// Canvas over an egui painter; logical pixels are scaled up to window points.
struct PainterCanvas<'a> {
    painter: &'a Painter,
    scale: f32,
}

impl Canvas for PainterCanvas<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color32) {
        let rect = Rect::from_min_size(
            egui::pos2(x as f32 * self.scale, y as f32 * self.scale),
            Vec2::new(w as f32 * self.scale, h as f32 * self.scale),
        );
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color32) {
        self.painter.text(
            egui::pos2(x as f32 * self.scale, y as f32 * self.scale),
            Align2::LEFT_TOP,
            text,
            FontId::monospace(8.0 * self.scale),
            color,
        );
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let input = self.sample_input(ctx);
        self.sandbox.tick(&input, Instant::now());

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.config.background))
            .show(ctx, |ui| {
                let mut canvas = PainterCanvas { painter: ui.painter(), scale: self.config.pixel_scale };
                render::draw(&self.sandbox, &self.config, &mut canvas);
            });

        // Keep ticking even without input events
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_input(app: &PaintApp, events: Vec<egui::Event>) -> TickInput {
        let ctx = egui::Context::default();
        ctx.begin_frame(egui::RawInput { events, ..Default::default() });
        let input = app.sample_input(&ctx);
        let _ = ctx.end_frame();
        input
    }

    fn button(pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(100.0, 100.0),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn click_within_one_frame_still_paints() {
        let config = SandboxConfig::default();
        let mut app = PaintApp::new(config, 120, 60);

        let input = frame_input(
            &app,
            vec![egui::Event::PointerMoved(egui::pos2(100.0, 100.0)), button(true), button(false)],
        );
        assert!(input.held);
        assert!(input.released);
        assert_eq!(input.pointer, Some(Pixel::new(50, 50)));

        app.sandbox.tick(&input, Instant::now());
        assert!(app.sandbox.state().is_alive(10, 10));
    }
}
