use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{Document, HtmlElement};

use super::dom::{HeadStyles, styled_element};
use crate::core::motion::register_motion_presets;
use crate::core::particles::{PARTICLE_CLASS, particle_field};
use crate::core::FxError;

/// Append `count` floating particles to `container`.
///
/// Returns the number of particles created.
pub fn spawn_particles(
    document: &Document,
    container: &HtmlElement,
    count: usize,
) -> Result<usize, FxError> {
    register_motion_presets(&HeadStyles(document));

    let mut rng = SmallRng::from_entropy();
    let specs = particle_field(count, &mut rng);
    for spec in &specs {
        let particle = styled_element(document, "div", &spec.style())?;
        particle.set_class_name(PARTICLE_CLASS);
        container.append_child(&particle)?;
    }
    Ok(specs.len())
}
