// config.rs - Window, grid, timing and color settings for the sandbox

use egui::{Color32, Key};
use std::time::Duration;

pub const SURFACE_WIDTH: i32 = 600;                        // Logical pixels
pub const SURFACE_HEIGHT: i32 = 300;
pub const PIXEL_SCALE: f32 = 2.0;                          // Window points per logical pixel
pub const CELL_SIZE: i32 = 5;                              // Logical pixels per cell edge
pub const STEP_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct SandboxConfig {
    pub title          : &'static str,
    pub surface_width  : i32,
    pub surface_height : i32,
    pub pixel_scale    : f32,
    pub cell_size      : i32,
    pub step_interval  : Duration,
    pub background     : Color32,
    pub live_color     : Color32,
    pub border_color   : Color32,
    pub text_color     : Color32,
    pub toggle_key     : Key,
    pub reset_key      : Key,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            title          : "Conway Paint",
            surface_width  : SURFACE_WIDTH,
            surface_height : SURFACE_HEIGHT,
            pixel_scale    : PIXEL_SCALE,
            cell_size      : CELL_SIZE,
            step_interval  : STEP_INTERVAL,
            background     : Color32::BLACK,
            live_color     : Color32::from_rgb(255, 253, 208),
            border_color   : Color32::from_rgb(100, 10, 10),
            text_color     : Color32::WHITE,
            toggle_key     : Key::Space,
            reset_key      : Key::C,
        }
    }
}

impl SandboxConfig {
    /// Grid dimensions in cells, derived once from the surface size.
    pub fn grid_size(&self) -> Result<(usize, usize), String> {
        if self.cell_size <= 0 {
            return Err(format!("cell size must be positive, got {}", self.cell_size));
        }
        if !(self.pixel_scale > 0.0) {
            return Err(format!("pixel scale must be positive, got {}", self.pixel_scale));
        }

        let width = self.surface_width / self.cell_size;
        let height = self.surface_height / self.cell_size;
        if width < 3 || height < 3 {
            return Err(format!(
                "a {}x{} surface with {}px cells gives a {}x{} grid with no interior",
                self.surface_width, self.surface_height, self.cell_size, width, height
            ));
        }

        Ok((width as usize, height as usize))
    }

    /// Window inner size in points.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.surface_width as f32 * self.pixel_scale,
            self.surface_height as f32 * self.pixel_scale,
        ]
    }
}
