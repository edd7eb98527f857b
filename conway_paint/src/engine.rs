// engine.rs - One generation of classic Life (B3/S23) over the interior cells

use crate::grid::{Grid, GridState};

pub const BIRTH: usize = 3;                   // Dead cell with exactly this many neighbours is born
pub const SURVIVE_MIN: usize = 2;             // Live cell survives with SURVIVE_MIN..=SURVIVE_MAX
pub const SURVIVE_MAX: usize = 3;

/// Counts live Moore neighbours of an interior cell.
pub fn count_alive_neighbours(grid: &Grid, x: usize, y: usize) -> usize {
    debug_assert!(x >= 1 && y >= 1 && x + 1 < grid.width() && y + 1 < grid.height());

    let neighbours = [
        (x-1,y-1),(x,y-1),(x+1,y-1),(x-1,y),
        (x+1,y),(x-1,y+1),(x,y+1),(x+1,y+1)
    ];

    neighbours.iter().filter(|&&(nx, ny)| grid.get(nx, ny)).count()
}

pub fn next_state(alive: bool, neighbours: usize) -> bool {
    match (alive, neighbours) {
        (true, n) if n < SURVIVE_MIN || n > SURVIVE_MAX => false,   // Under/overpopulation
        (false, BIRTH)                                  => true,    // Birth
        (alive, _)                                      => alive,   // Unchanged
    }
}

/// Advances the authoritative grid one generation, reading only from the shadow grid,
/// then resynchronises the shadow. The border ring is never evaluated.
pub fn step(state: &mut GridState) {
    let GridState { current, shadow, .. } = &mut *state;
    let (width, height) = (shadow.width(), shadow.height());

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let count = count_alive_neighbours(shadow, x, y);
            current.set(x, y, next_state(shadow.get(x, y), count));
        }
    }

    debug_assert!(state.border_is_dead(), "border ring came alive during a step");
    state.shadow.copy_from(&state.current);
}
