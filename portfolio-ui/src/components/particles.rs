use leptos::*;
use portfolio_core::particles::Particle;

/// Renders the landing particle ring. Geometry comes in as data; idle drift
/// and the warp fly-out are CSS keyframes driven by per-particle custom
/// properties.
#[component]
pub fn ParticleField(
    particles: Vec<Particle>,
    #[prop(into)] warped: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="particle-field" class=("particle-field-warp", move || warped.get())>
            <For
                each=move || particles.clone()
                key=|particle| particle.id
                children=|particle| {
                    let style = format!(
                        "--origin-x:{:.2}px;--origin-y:{:.2}px;--drift-x:{:.2}px;\
                         --drift-y:{:.2}px;--idle:{:.2}s",
                        particle.origin_x,
                        particle.origin_y,
                        particle.drift_x,
                        particle.drift_y,
                        particle.idle_secs,
                    );
                    view! { <div class="particle" style=style></div> }
                }
            />
        </div>
    }
}
