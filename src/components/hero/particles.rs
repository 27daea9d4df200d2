//! Decorative drifting dots behind the hero.

use leptos::prelude::*;

use folio_core::Particle;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

/// Renders `count` particles with randomized placement and timing.
///
/// Layout is rolled once per mount; particles never re-randomize.
#[component]
pub fn Particles(count: usize) -> impl IntoView {
    let particles = folio_core::particles::generate(count, &mut rand::thread_rng());

    view! {
        <div class=css::particles aria-hidden="true">
            {particles
                .iter()
                .map(|p| view! { <span class=css::particle style=particle_style(p) /> })
                .collect_view()}
        </div>
    }
}

fn particle_style(p: &Particle) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; \
         animation-duration: {:.2}s; animation-delay: {:.2}s;",
        p.x, p.y, p.size, p.size, p.duration, p.delay
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_style() {
        let p = Particle {
            id: 0,
            x: 12.5,
            y: 40.0,
            size: 2.25,
            duration: 15.0,
            delay: 3.5,
        };
        assert_eq!(
            particle_style(&p),
            "left: 12.50%; top: 40.00%; width: 2.25px; height: 2.25px; \
             animation-duration: 15.00s; animation-delay: 3.50s;"
        );
    }
}
