// render.rs - Composes one frame of the sandbox onto any pixel canvas

use egui::Color32;

use crate::config::SandboxConfig;
use crate::sandbox::Sandbox;

/// Drawing primitives the host provides, in logical surface pixels.
pub trait Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color32);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color32);
}

pub fn status_line(sandbox: &Sandbox) -> String {
    format!(
        "{}  gen {}  live {}",
        sandbox.mode().label(),
        sandbox.generation(),
        sandbox.state().population()
    )
}

/// Fills every cell once (border ring, live or dead) and then draws the status line.
pub fn draw(sandbox: &Sandbox, config: &SandboxConfig, canvas: &mut impl Canvas) {
    let state = sandbox.state();
    let size = config.cell_size;

    for y in 0..state.height() {
        for x in 0..state.width() {
            let color = if !state.is_interior(x as i64, y as i64) {
                config.border_color
            } else if state.is_alive(x, y) {
                config.live_color
            } else {
                config.background
            };
            canvas.fill_rect(x as i32 * size, y as i32 * size, size, size, color);
        }
    }

    canvas.draw_text(10, 10, &status_line(sandbox), config.text_color);
}
