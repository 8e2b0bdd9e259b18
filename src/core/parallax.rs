//! Pointer and scroll parallax transforms
//!
//! Both offsets are recomputed from the latest input and composed into one
//! transform per element, so neither accumulates nor clobbers the other.

/// Orbs react to pointer and scroll
pub const ORB_SELECTOR: &str = ".orb";

/// Every element that follows the scroll offset, in document order
pub const SCROLL_LAYER_SELECTOR: &str = ".background-effects, .orb";

/// Map a client coordinate to 0..=1 across a viewport extent
pub fn normalize(client: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (client / extent).clamp(0.0, 1.0)
}

/// Pointer offset of the orb at `index` for normalized pointer (`nx`, `ny`)
pub fn orb_offset(index: usize, nx: f64, ny: f64, factor: f64) -> (f64, f64) {
    let speed = (index + 1) as f64 * factor;
    (nx * 100.0 * speed, ny * 100.0 * speed)
}

/// Vertical scroll offset of the layer at `index`
pub fn scroll_offset(index: usize, scroll_y: f64) -> f64 {
    let speed = 0.5 + index as f64 * 0.1;
    -(scroll_y * speed)
}

/// Latest parallax inputs of one element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayerTransform {
    pub scroll_y: f64,
    pub pointer: (f64, f64),
}

impl LayerTransform {
    pub fn with_pointer(self, pointer: (f64, f64)) -> Self {
        Self { pointer, ..self }
    }

    pub fn with_scroll(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "translateY({:.2}px) translate({:.2}px, {:.2}px)",
            self.scroll_y, self.pointer.0, self.pointer.1
        )
    }
}

/// Pointer-driven state for a set of orbs
#[derive(Debug, Clone)]
pub struct PointerParallax {
    factor: f64,
    layers: Vec<LayerTransform>,
}

impl PointerParallax {
    pub fn new(layers: usize, factor: f64) -> Self {
        Self {
            factor,
            layers: vec![LayerTransform::default(); layers],
        }
    }

    pub fn layers(&self) -> &[LayerTransform] {
        &self.layers
    }

    /// Apply a pointer position, replacing previous pointer offsets.
    /// `orb_indices` maps each layer to its orb index, `None` for non-orb layers.
    pub fn pointer_moved(
        &mut self,
        client: (f64, f64),
        viewport: (f64, f64),
        orb_indices: &[Option<usize>],
    ) {
        let nx = normalize(client.0, viewport.0);
        let ny = normalize(client.1, viewport.1);
        for (layer, orb) in self.layers.iter_mut().zip(orb_indices) {
            if let Some(index) = orb {
                *layer = layer.with_pointer(orb_offset(*index, nx, ny, self.factor));
            }
        }
    }

    /// Apply a scroll position, replacing previous scroll offsets
    pub fn scrolled(&mut self, scroll_y: f64) {
        for (index, layer) in self.layers.iter_mut().enumerate() {
            *layer = layer.with_scroll(scroll_offset(index, scroll_y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(0.0, 800.0), 0.0);
        assert_eq!(normalize(400.0, 800.0), 0.5);
        assert_eq!(normalize(900.0, 800.0), 1.0);
        assert_eq!(normalize(-5.0, 800.0), 0.0);
        assert_eq!(normalize(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_orb_offset_grows_with_index() {
        let (x0, y0) = orb_offset(0, 1.0, 0.5, 0.05);
        let (x2, y2) = orb_offset(2, 1.0, 0.5, 0.05);

        assert!((x0 - 5.0).abs() < 1e-9);
        assert!((y0 - 2.5).abs() < 1e-9);
        assert!((x2 - 15.0).abs() < 1e-9);
        assert!((y2 - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 100.0), -50.0);
        assert!((scroll_offset(2, 100.0) + 70.0).abs() < 1e-9);
        assert_eq!(scroll_offset(3, 0.0), 0.0);
    }

    #[test]
    fn test_pointer_parallax_does_not_accumulate() {
        let orbs = [Some(0), Some(1), Some(2)];
        let mut parallax = PointerParallax::new(3, 0.05);

        parallax.pointer_moved((300.0, 200.0), (1200.0, 800.0), &orbs);
        let first: Vec<String> = parallax.layers().iter().map(|l| l.css()).collect();

        for _ in 0..10 {
            parallax.pointer_moved((300.0, 200.0), (1200.0, 800.0), &orbs);
        }
        let again: Vec<String> = parallax.layers().iter().map(|l| l.css()).collect();

        assert_eq!(first, again);
    }

    #[test]
    fn test_pointer_skips_non_orb_layers() {
        let mut parallax = PointerParallax::new(2, 0.05);
        parallax.pointer_moved((600.0, 400.0), (1200.0, 800.0), &[None, Some(0)]);

        assert_eq!(parallax.layers()[0].pointer, (0.0, 0.0));
        assert!(parallax.layers()[1].pointer.0 > 0.0);
    }

    #[test]
    fn test_scroll_and_pointer_compose() {
        let mut parallax = PointerParallax::new(1, 0.05);
        parallax.pointer_moved((1200.0, 800.0), (1200.0, 800.0), &[Some(0)]);
        parallax.scrolled(100.0);

        assert_eq!(
            parallax.layers()[0].css(),
            "translateY(-50.00px) translate(5.00px, 5.00px)"
        );

        // a later pointer move keeps the scroll part
        parallax.pointer_moved((0.0, 0.0), (1200.0, 800.0), &[Some(0)]);
        assert_eq!(
            parallax.layers()[0].css(),
            "translateY(-50.00px) translate(0.00px, 0.00px)"
        );
    }
}
