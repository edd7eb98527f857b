// grid.rs - Cell buffers: authoritative grid, shadow grid and stroke markers

/// Fixed-size, row-major buffer of cell flags addressed as `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![false; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid", self.width, self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!((self.width, self.height), (other.width, other.height), "grid size mismatch");
        self.cells.copy_from_slice(&other.cells);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// The three co-sized buffers the sandbox works on.
///
/// `current` is what gets drawn, `shadow` is the frozen previous generation the
/// engine reads from, `painted` marks cells already set during the current stroke.
/// Outside of a step `current` and `shadow` are identical.
#[derive(Debug, Clone)]
pub struct GridState {
    pub(crate) current: Grid,
    pub(crate) shadow: Grid,
    pub(crate) painted: Grid,
}

impl GridState {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            current: Grid::new(width, height),
            shadow: Grid::new(width, height),
            painted: Grid::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn painted(&self) -> &Grid {
        &self.painted
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current.get(x, y)
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// True when `(x, y)` lies strictly inside the border ring.
    pub fn is_interior(&self, x: i64, y: i64) -> bool {
        x >= 1 && y >= 1 && x < self.width() as i64 - 1 && y < self.height() as i64 - 1
    }

    /// Nearest interior cell to `(x, y)`, or `None` if the grid has no interior.
    pub fn clamp_to_interior(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let (max_x, max_y) = (self.width() as i64 - 2, self.height() as i64 - 2);
        if max_x < 1 || max_y < 1 {
            return None;
        }
        Some((x.clamp(1, max_x) as usize, y.clamp(1, max_y) as usize))
    }

    /// Sets the cell alive in both buffers and marks it painted.
    pub fn paint(&mut self, x: usize, y: usize) {
        self.current.set(x, y, true);
        self.shadow.set(x, y, true);
        self.painted.set(x, y, true);
    }

    pub fn clear_markers(&mut self) {
        self.painted.clear();
    }

    pub fn reset(&mut self) {
        self.current.clear();
        self.shadow.copy_from(&self.current);
        self.painted.clear();
    }

    pub fn in_sync(&self) -> bool {
        self.current == self.shadow
    }

    pub fn border_is_dead(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        let ring_dead = |grid: &Grid| {
            (0..w).all(|x| !grid.get(x, 0) && !grid.get(x, h - 1))
                && (0..h).all(|y| !grid.get(0, y) && !grid.get(w - 1, y))
        };
        w == 0 || h == 0 || (ring_dead(&self.current) && ring_dead(&self.shadow))
    }
}
