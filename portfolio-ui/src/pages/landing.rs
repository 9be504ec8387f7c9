use leptos::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos_router::use_navigate;
use portfolio_core::hero::{HeroEffect, HeroEvent, HeroSequencer, HeroTimeline};
use portfolio_core::particles;
use portfolio_core::route::Route;
use std::time::Duration;

use crate::app::RouteTransition;
use crate::components::particles::ParticleField;
use crate::components::typewriter::TypewriterText;

const TYPEWRITER_TEXT: &str = "WHY\nNOT\nTAKE\nA\n[ BREAK ]";
const TYPEWRITER_SPEED: Duration = Duration::from_millis(100);
const TYPEWRITER_START_DELAY: Duration = Duration::from_millis(2000);

/// Interprets sequencer effects against browser timers.
///
/// Every scheduled handle lands in one store and is cleared as a unit, so an
/// unmount mid-sequence can never leave a timer alive. Callbacks go through
/// `try_update`: a stray timer that outlives the view degrades to a no-op.
#[derive(Clone, Copy)]
struct HeroDriver {
    sequencer: RwSignal<HeroSequencer>,
    timers: StoredValue<Vec<TimeoutHandle>>,
    transitioning: RwSignal<bool>,
    pending_route: RwSignal<Option<Route>>,
}

impl HeroDriver {
    fn apply(self, effects: Vec<HeroEffect>) {
        for effect in effects {
            match effect {
                HeroEffect::Schedule { event, delay } => self.schedule(event, delay),
                HeroEffect::CancelTimers => self.cancel_all(),
                HeroEffect::BeginFade => self.transitioning.set(true),
                HeroEffect::EndFade => {
                    let _ = self.transitioning.try_set(false);
                }
                HeroEffect::Navigate(route) => {
                    let _ = self.pending_route.try_set(Some(route));
                }
            }
        }
    }

    fn schedule(self, event: HeroEvent, delay: Duration) {
        let driver = self;
        let scheduled = set_timeout_with_handle(
            move || {
                if let Some(effects) = driver.sequencer.try_update(|seq| seq.handle(event)) {
                    driver.apply(effects);
                }
            },
            delay,
        );
        match scheduled {
            Ok(handle) => self.timers.update_value(|timers| timers.push(handle)),
            Err(err) => log::warn!("failed to schedule {event:?}: {err:?}"),
        }
    }

    fn cancel_all(self) {
        self.timers.update_value(|timers| {
            for handle in timers.drain(..) {
                handle.clear();
            }
        });
    }
}

#[component]
pub fn LandingHero() -> impl IntoView {
    let transitioning = expect_context::<RouteTransition>().0;
    let sequencer = create_rw_signal(HeroSequencer::new(HeroTimeline::default()));
    let timers = store_value(Vec::<TimeoutHandle>::new());
    let pending_route = create_rw_signal(None::<Route>);
    let driver = HeroDriver {
        sequencer,
        timers,
        transitioning,
        pending_route,
    };

    let field = store_value(particles::scatter(particles::PARTICLE_COUNT, || {
        js_sys::Math::random()
    }));

    driver.apply(
        sequencer
            .try_update(|seq| seq.mount())
            .unwrap_or_default(),
    );

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(route) = pending_route.get() {
            navigate(&route.path(), Default::default());
        }
    });

    on_cleanup(move || match sequencer.try_update(|seq| seq.unmount()) {
        Some(effects) => driver.apply(effects),
        None => {
            driver.cancel_all();
            let _ = transitioning.try_set(false);
        }
    });

    let warped = move || sequencer.with(|seq| seq.warped());
    let show_particles = move || sequencer.with(|seq| seq.particles_visible());

    view! {
        <section class="hero">
            <Show when=show_particles>
                <ParticleField
                    particles=field.get_value()
                    warped=Signal::derive(warped)
                />
            </Show>

            <div class="hero-frame">
                <div class="hero-stage" class=("hero-stage-warp", warped)>
                    <span class="pixel-font hero-copy hero-copy-stop">"[ STOP ]"</span>
                    <span class="pixel-font hero-copy hero-copy-aside">"THIS ONE IS"</span>
                    <span class="pixel-font hero-copy hero-copy-checkpoint">
                        "A" <br/> "CHECKPOINT"
                    </span>

                    <div class="hero-typewriter">
                        <TypewriterText
                            text=TYPEWRITER_TEXT
                            speed=TYPEWRITER_SPEED
                            start_delay=TYPEWRITER_START_DELAY
                        />
                    </div>

                    <div class="hero-control-slot">
                        <Show when=move || !warped()>
                            <button
                                type="button"
                                class="hero-control"
                                aria-label="Initiate warp"
                                on:click=move |_| {
                                    if let Some(effects) =
                                        sequencer.try_update(|seq| seq.trigger())
                                    {
                                        driver.apply(effects);
                                    }
                                }
                            >
                                "\u{25B6}"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>

            <Show when=warped>
                <div class="hero-blackout"></div>
            </Show>
        </section>
    }
}
