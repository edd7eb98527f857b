// stroke.rs - Turns per-tick pointer samples into a continuous painted stroke

use crate::grid::GridState;

/// Pointer position in logical surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Remembers where the pointer was last tick so fast drags can be filled in.
#[derive(Debug, Clone)]
pub struct StrokeMapper {
    cell_size: i32,
    previous: Option<Pixel>,
    previous_held: bool,
}

impl StrokeMapper {
    pub fn new(cell_size: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self { cell_size, previous: None, previous_held: false }
    }

    pub fn cell_at(&self, pixel: Pixel) -> (i64, i64) {
        (
            pixel.x.div_euclid(self.cell_size) as i64,
            pixel.y.div_euclid(self.cell_size) as i64,
        )
    }

    /// Drops the pointer trace so the next sample starts a fresh segment.
    pub fn forget_trace(&mut self) {
        self.previous = None;
        self.previous_held = false;
    }

    pub fn apply(&mut self, state: &mut GridState, pointer: Option<Pixel>, held: bool, released: bool) {
        let Some(pointer) = pointer else {
            if released {
                state.clear_markers();
            }
            self.forget_trace();
            return;
        };

        if held {
            let (cx, cy) = self.cell_at(pointer);
            if state.is_interior(cx, cy) && !state.painted().get(cx as usize, cy as usize) {
                state.paint(cx as usize, cy as usize);
            }
        }

        if let Some(previous) = self.previous.filter(|_| self.previous_held) {
            self.fill_gap(state, previous, pointer);
        }

        // End of stroke re-arms every marker
        if released {
            state.clear_markers();
        }

        self.previous = Some(pointer);
        self.previous_held = held;
    }

    /// Walks unit steps from `from` towards `to`, painting every cell crossed.
    /// Steps that map outside the interior are pulled back onto its edge.
    fn fill_gap(&self, state: &mut GridState, from: Pixel, to: Pixel) {
        let dx = (to.x - from.x) as f32;
        let dy = (to.y - from.y) as f32;
        let magnitude = dx.hypot(dy);
        let steps = magnitude as i32;
        if steps == 0 {
            return;
        }

        let (ux, uy) = (dx / magnitude, dy / magnitude);
        for i in 0..steps {
            let along = Pixel::new(
                (from.x as f32 + ux * i as f32) as i32,
                (from.y as f32 + uy * i as f32) as i32,
            );
            let (cx, cy) = self.cell_at(along);
            if let Some((x, y)) = state.clamp_to_interior(cx, cy) {
                state.paint(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: i32 = 5;

    /// Centre pixel of a cell.
    fn px(cx: i32, cy: i32) -> Option<Pixel> {
        Some(Pixel::new(cx * CELL + 2, cy * CELL + 2))
    }

    #[test]
    fn single_press_paints_one_cell() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(5, 5), true, false);

        assert_eq!(state.population(), 1);
        assert!(state.is_alive(5, 5));
        assert!(state.painted().get(5, 5));
        assert!(state.in_sync());
    }

    #[test]
    fn repress_after_release_paints_again() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(5, 5), true, false);
        mapper.apply(&mut state, px(5, 5), false, true);
        assert!(!state.painted().get(5, 5));

        // Kill it behind the mapper's back, as a simulation step would
        crate::engine::step(&mut state);
        assert!(!state.is_alive(5, 5));

        mapper.apply(&mut state, px(5, 5), true, false);
        assert!(state.is_alive(5, 5));
        assert_eq!(state.population(), 1);
    }

    #[test]
    fn held_cell_is_not_repainted_while_marked() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(5, 5), true, false);
        state.current.set(5, 5, false);
        state.shadow.set(5, 5, false);

        // Same pixel, zero-length segment: the marker keeps the cell from being rewritten
        mapper.apply(&mut state, px(5, 5), true, false);
        assert!(!state.is_alive(5, 5));
    }

    #[test]
    fn gap_fill_repaints_marked_cells() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(2, 2), true, false);
        state.current.set(2, 2, false);
        state.shadow.set(2, 2, false);
        assert!(state.painted().get(2, 2));

        // The segment starts on the marked cell and walks through it
        mapper.apply(&mut state, px(2, 6), true, false);
        assert!(state.is_alive(2, 2));
        assert!(state.in_sync());
    }

    #[test]
    fn press_on_border_paints_nothing() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(0, 7), true, false);
        mapper.apply(&mut state, Some(Pixel::new(-12, -40)), true, false);
        mapper.apply(&mut state, px(19, 19), true, false);

        assert!(state.border_is_dead());
    }

    #[test]
    fn fast_drag_fills_every_cell_between_samples() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(2, 2), true, false);
        mapper.apply(&mut state, px(2, 6), true, false);

        for y in 2..=6 {
            assert!(state.is_alive(2, y), "cell (2, {y}) should be painted");
        }
        assert_eq!(state.population(), 5);
        assert!(state.in_sync());
    }

    #[test]
    fn diagonal_drag_leaves_no_gaps() {
        let mut state = GridState::new(30, 30);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(2, 2), true, false);
        mapper.apply(&mut state, px(20, 20), true, false);

        for i in 2..=20 {
            assert!(state.is_alive(i, i), "cell ({i}, {i}) should be painted");
        }
    }

    #[test]
    fn no_fill_when_previous_tick_was_up() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(2, 2), false, false);
        mapper.apply(&mut state, px(2, 8), true, false);

        assert_eq!(state.population(), 1);
        assert!(state.is_alive(2, 8));
    }

    #[test]
    fn release_tick_finishes_segment_then_clears_markers() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(3, 3), true, false);
        mapper.apply(&mut state, px(3, 7), false, true);

        for y in 3..7 {
            assert!(state.is_alive(3, y));
        }
        assert_eq!(state.painted().population(), 0);
    }

    #[test]
    fn drag_off_grid_is_clamped_to_interior() {
        let mut state = GridState::new(10, 10);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(5, 5), true, false);
        mapper.apply(&mut state, Some(Pixel::new(5 * CELL + 2, 200)), true, false);

        assert!(state.border_is_dead());
        for y in 5..=8 {
            assert!(state.is_alive(5, y));
        }
    }

    #[test]
    fn forgotten_trace_does_not_bridge() {
        let mut state = GridState::new(20, 20);
        let mut mapper = StrokeMapper::new(CELL);

        mapper.apply(&mut state, px(2, 2), true, false);
        mapper.forget_trace();
        mapper.apply(&mut state, px(2, 10), true, false);

        assert_eq!(state.population(), 2);
    }
}
