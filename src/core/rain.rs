//! Falling-glyph rain state
//!
//! [`RainGrid`] owns one drop offset per column and advances them every tick.
//! Painting goes through the [`RainSurface`] trait so the grid can be driven
//! against a real canvas in the browser or a recording surface in tests.

use rand::Rng;

/// Glyphs the rain draws from
pub const RAIN_GLYPHS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Offset given to columns that did not exist before
pub const INITIAL_DROP: u32 = 1;

/// Drawing operations the rain needs from its target surface
pub trait RainSurface {
    /// Paint the translucent overlay that makes older glyphs fade out
    fn fade(&self, width: f64, height: f64);

    /// Draw one glyph with its baseline at (`x`, `y`)
    fn draw_glyph(&self, glyph: char, x: f64, y: f64);
}

/// Per-column drop offsets for a surface of a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct RainGrid {
    glyph_size: u32,
    width: u32,
    height: u32,
    reset_chance: f64,
    drops: Vec<u32>,
}

impl RainGrid {
    /// Create a grid covering `width` x `height` pixels
    pub fn new(width: u32, height: u32, glyph_size: u32, reset_chance: f64) -> Self {
        let glyph_size = glyph_size.max(1);
        let columns = (width / glyph_size) as usize;
        Self {
            glyph_size,
            width,
            height,
            reset_chance: reset_chance.clamp(0.0, 1.0),
            drops: vec![INITIAL_DROP; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Adapt to a new surface size.
    ///
    /// Existing offsets are kept up to the new column count; extra columns
    /// start at [`INITIAL_DROP`].
    pub fn resize(&mut self, width: u32, height: u32) {
        let columns = (width / self.glyph_size) as usize;
        self.width = width;
        self.height = height;
        self.drops.resize(columns, INITIAL_DROP);
        tracing::debug!(width, height, columns, "rain grid resized");
    }

    /// Whether column `index` has moved past the bottom edge
    fn past_bottom(&self, index: usize) -> bool {
        u64::from(self.drops[index]) * u64::from(self.glyph_size) > u64::from(self.height)
    }

    /// Advance the rain by one tick, painting onto `surface`.
    pub fn tick<R: Rng + ?Sized>(&mut self, surface: &impl RainSurface, rng: &mut R) {
        surface.fade(f64::from(self.width), f64::from(self.height));

        let size = f64::from(self.glyph_size);
        for i in 0..self.drops.len() {
            let glyph = RAIN_GLYPHS[rng.gen_range(0..RAIN_GLYPHS.len())] as char;
            surface.draw_glyph(glyph, i as f64 * size, f64::from(self.drops[i]) * size);

            self.drops[i] = self.drops[i].saturating_add(1);
            if self.past_bottom(i) && rng.gen_bool(self.reset_chance) {
                self.drops[i] = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        fades: RefCell<usize>,
        glyphs: RefCell<Vec<(char, f64, f64)>>,
    }

    impl RainSurface for Recorder {
        fn fade(&self, _width: f64, _height: f64) {
            *self.fades.borrow_mut() += 1;
        }

        fn draw_glyph(&self, glyph: char, x: f64, y: f64) {
            self.glyphs.borrow_mut().push((glyph, x, y));
        }
    }

    #[test]
    fn test_column_count_from_width() {
        let grid = RainGrid::new(1000, 600, 14, 0.025);
        assert_eq!(grid.columns(), 71);
        assert!(grid.drops().iter().all(|&d| d == INITIAL_DROP));
    }

    #[test]
    fn test_zero_glyph_size_is_clamped() {
        let grid = RainGrid::new(10, 10, 0, 0.5);
        assert_eq!(grid.columns(), 10);
    }

    #[test]
    fn test_resize_preserves_offsets() {
        let surface = Recorder::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = RainGrid::new(140, 1000, 14, 0.0);
        for _ in 0..5 {
            grid.tick(&surface, &mut rng);
        }
        let before = grid.drops().to_vec();

        grid.resize(280, 1000);
        assert_eq!(grid.columns(), 20);
        assert_eq!(&grid.drops()[..10], &before[..]);
        assert!(grid.drops()[10..].iter().all(|&d| d == INITIAL_DROP));

        grid.resize(70, 500);
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.drops(), &before[..5]);
    }

    #[test]
    fn test_resize_matches_floor_division() {
        let mut grid = RainGrid::new(100, 100, 14, 0.0);
        for width in [0u32, 13, 14, 15, 799, 1920, 2561] {
            grid.resize(width, 100);
            assert_eq!(grid.columns(), (width / 14) as usize);
        }
    }

    #[test]
    fn test_tick_paints_one_fade_and_one_glyph_per_column() {
        let surface = Recorder::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = RainGrid::new(70, 200, 14, 0.0);

        grid.tick(&surface, &mut rng);

        assert_eq!(*surface.fades.borrow(), 1);
        let glyphs = surface.glyphs.borrow();
        assert_eq!(glyphs.len(), 5);
        for (i, (glyph, x, y)) in glyphs.iter().enumerate() {
            assert!(RAIN_GLYPHS.contains(&(*glyph as u8)));
            assert_eq!(*x, i as f64 * 14.0);
            assert_eq!(*y, 14.0);
        }
    }

    #[test]
    fn test_offsets_only_decrease_via_reset() {
        let surface = Recorder::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = RainGrid::new(280, 140, 14, 0.3);
        let mut saw_reset = false;

        for _ in 0..500 {
            let before = grid.drops().to_vec();
            grid.tick(&surface, &mut rng);
            for (old, new) in before.iter().zip(grid.drops()) {
                if new < old {
                    assert_eq!(*new, 0);
                    saw_reset = true;
                } else {
                    assert_eq!(*new, old + 1);
                }
            }
        }
        assert!(saw_reset);
    }

    #[test]
    fn test_no_reset_before_bottom() {
        let surface = Recorder::default();
        let mut rng = StdRng::seed_from_u64(3);
        // 10 rows; with a certain reset the column restarts right after row 10
        let mut grid = RainGrid::new(14, 140, 14, 1.0);

        for expected in 2..=10 {
            grid.tick(&surface, &mut rng);
            assert_eq!(grid.drops()[0], expected);
        }
        grid.tick(&surface, &mut rng);
        assert_eq!(grid.drops()[0], 0);
    }

    #[test]
    fn test_zero_chance_never_resets() {
        let surface = Recorder::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = RainGrid::new(28, 28, 14, 0.0);
        for _ in 0..100 {
            grid.tick(&surface, &mut rng);
        }
        assert!(grid.drops().iter().all(|&d| d == 101));
    }
}
