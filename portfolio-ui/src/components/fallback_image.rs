use leptos::*;
use portfolio_core::image::ImageFallback;

const DEFAULT_FALLBACK: &str = "/imgs/profile.png";

/// Image that retries once against a fallback source, then gives up and
/// renders nothing. Each instance owns its own attempt state, so cards in a
/// list degrade independently.
#[component]
pub fn FallbackImage(
    #[prop(into)] primary: String,
    #[prop(into, default = DEFAULT_FALLBACK.to_string())] fallback: String,
    #[prop(into)] alt: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let source = create_rw_signal(ImageFallback::new(primary, fallback));

    move || {
        source.with(|state| state.src().map(str::to_string)).map(|src| {
            view! {
                <img
                    src=src
                    alt=alt.clone()
                    loading="lazy"
                    class=class
                    on:error=move |_| source.update(ImageFallback::mark_failed)
                />
            }
        })
    }
}
