use leptos::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use portfolio_core::typewriter::{Typewriter, TypewriterEffect};
use std::time::Duration;

/// Drives the character-reveal machine with the same cancellable-timer
/// discipline as the hero driver: every handle is owned here and cleared on
/// cleanup.
#[component]
pub fn TypewriterText(
    #[prop(into)] text: String,
    #[prop(default = Duration::from_millis(150))] speed: Duration,
    #[prop(default = Duration::ZERO)] start_delay: Duration,
) -> impl IntoView {
    let machine = create_rw_signal(Typewriter::new(text, speed, start_delay));
    let timers = store_value(Vec::<TimeoutHandle>::new());

    fn run(
        machine: RwSignal<Typewriter>,
        timers: StoredValue<Vec<TimeoutHandle>>,
        effects: Vec<TypewriterEffect>,
    ) {
        for TypewriterEffect::Schedule { delay } in effects {
            let scheduled = set_timeout_with_handle(
                move || {
                    if let Some(next) = machine.try_update(|m| m.tick()) {
                        run(machine, timers, next);
                    }
                },
                delay,
            );
            match scheduled {
                Ok(handle) => timers.update_value(|t| t.push(handle)),
                Err(err) => log::warn!("failed to schedule typewriter tick: {err:?}"),
            }
        }
    }

    run(
        machine,
        timers,
        machine.try_update(|m| m.start()).unwrap_or_default(),
    );

    on_cleanup(move || {
        timers.update_value(|t| {
            for handle in t.drain(..) {
                handle.clear();
            }
        });
    });

    view! {
        <span class="typewriter">
            <span class="typewriter-text">
                {move || machine.with(|m| m.visible().to_string())}
            </span>
            <Show when=move || machine.with(Typewriter::is_active)>
                <span class="typewriter-cursor">"|"</span>
            </Show>
        </span>
    }
}
