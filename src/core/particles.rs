//! Floating particle parameters
//!
//! Particles are created once and animated purely by the `fx-float` motion
//! preset, so everything about a particle is decided here at creation time.

use rand::Rng;

use super::motion::MotionPreset;

/// CSS class given to every floating particle
pub const PARTICLE_CLASS: &str = "particle";

/// Randomized look and timing of one floating particle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    /// Diameter in pixels (1..4)
    pub size_px: f64,
    /// Horizontal position in percent of the container
    pub left_pct: f64,
    /// Vertical position in percent of the container
    pub top_pct: f64,
    /// Fill opacity (0.2..0.7)
    pub opacity: f64,
    /// Blur radius in pixels (0..1)
    pub blur_px: f64,
    /// Animation start delay in seconds (0..20)
    pub delay_s: f64,
    /// Loop duration in seconds (10..20)
    pub duration_s: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(1.0..4.0),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            opacity: rng.gen_range(0.2..0.7),
            blur_px: rng.gen_range(0.0..1.0),
            delay_s: rng.gen_range(0.0..20.0),
            duration_s: rng.gen_range(10.0..20.0),
        }
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size:.2}px; height: {size:.2}px; \
             background: rgba(255, 255, 255, {opacity:.2}); border-radius: 50%; \
             left: {left:.2}%; top: {top:.2}%; filter: blur({blur:.2}px); \
             animation: {anim} {duration:.2}s ease-in-out {delay:.2}s infinite;",
            size = self.size_px,
            opacity = self.opacity,
            left = self.left_pct,
            top = self.top_pct,
            blur = self.blur_px,
            anim = MotionPreset::Float.name(),
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// Generate `count` independent particles
pub fn particle_field<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_field_has_requested_count() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(particle_field(25, &mut rng).len(), 25);
        assert_eq!(particle_field(0, &mut rng).len(), 0);
    }

    #[test]
    fn test_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for p in particle_field(500, &mut rng) {
            assert!((1.0..4.0).contains(&p.size_px));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.2..0.7).contains(&p.opacity));
            assert!((0.0..1.0).contains(&p.blur_px));
            assert!((0.0..20.0).contains(&p.delay_s));
            assert!((10.0..20.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn test_particles_are_independent() {
        let mut rng = StdRng::seed_from_u64(99);
        let field = particle_field(2, &mut rng);
        assert_ne!(field[0], field[1]);
    }

    #[test]
    fn test_style_uses_float_preset() {
        let spec = ParticleSpec {
            size_px: 2.0,
            left_pct: 10.0,
            top_pct: 20.0,
            opacity: 0.5,
            blur_px: 0.25,
            delay_s: 3.0,
            duration_s: 12.5,
        };
        let style = spec.style();

        assert!(style.contains("width: 2.00px"));
        assert!(style.contains("left: 10.00%"));
        assert!(style.contains("rgba(255, 255, 255, 0.50)"));
        assert!(style.contains("animation: fx-float 12.50s ease-in-out 3.00s infinite"));
    }
}
