// sandbox.rs - Editing/Playing mode switch that owns the grid and drives each tick

use std::time::{Duration, Instant};

use crate::engine;
use crate::grid::GridState;
use crate::stroke::{Pixel, StrokeMapper};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    Playing,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Editing => Mode::Playing,
            Mode::Playing => Mode::Editing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Editing => "Editing",
            Mode::Playing => "Playing",
        }
    }
}

/// Everything the host samples once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub pointer     : Option<Pixel>,
    pub held        : bool,
    pub released    : bool,
    pub toggle_mode : bool,
    pub reset       : bool,
}

pub struct Sandbox {
    state         : GridState,
    stroke        : StrokeMapper,
    mode          : Mode,
    step_interval : Duration,
    last_step     : Instant,
    generation    : u64,
}

impl Sandbox {
    pub fn new(width: usize, height: usize, cell_size: i32, step_interval: Duration, now: Instant) -> Self {
        Self {
            state: GridState::new(width, height),
            stroke: StrokeMapper::new(cell_size),
            mode: Mode::default(),
            step_interval,
            last_step: now,
            generation: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn toggle_mode(&mut self, now: Instant) {
        self.mode = self.mode.toggled();
        self.stroke.forget_trace();
        // A release seen while Playing never reaches the mapper
        self.state.clear_markers();
        if self.mode == Mode::Playing {
            self.last_step = now;
        }
        log::info!("Mode switched to {} at generation {}", self.mode.label(), self.generation);
    }

    /// Clears the grid. Only honoured while editing; returns whether it happened.
    pub fn reset(&mut self) -> bool {
        if self.mode != Mode::Editing {
            log::debug!("Ignoring reset while {}", self.mode.label());
            return false;
        }
        self.state.reset();
        self.generation = 0;
        log::info!("Grid reset");
        true
    }

    /// Runs one tick. Returns true if a generation was computed.
    pub fn tick(&mut self, input: &TickInput, now: Instant) -> bool {
        if input.toggle_mode {
            self.toggle_mode(now);
        }
        if input.reset {
            self.reset();
        }

        let stepped = match self.mode {
            Mode::Editing => {
                self.stroke.apply(&mut self.state, input.pointer, input.held, input.released);
                false
            }
            Mode::Playing if now.duration_since(self.last_step) >= self.step_interval => {
                self.last_step = now;
                engine::step(&mut self.state);
                self.generation += 1;
                log::trace!("Generation {} population {}", self.generation, self.state.population());
                true
            }
            Mode::Playing => false,
        };

        debug_assert!(self.state.in_sync());
        stepped
    }
}
