use leptos::*;
use leptos_router::use_params_map;
use std::collections::HashSet;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    // Unknown or malformed identifiers resolve to the placeholder record; the
    // detail page never 404s.
    let project = create_memo(move |_| {
        params.with(|map| project_registry::resolve(map.get("id").map(String::as_str)))
    });

    let loaded = create_rw_signal(HashSet::<String>::new());

    view! {
        <div class="project-detail page-enter">
            <section class="detail-header">
                <h1 class="pixel-font detail-title">{move || project.get().title}</h1>
                <p class="detail-description">{move || project.get().description}</p>
                <div class="tech-tags">
                    <For
                        each=move || project.get().technologies.into_iter().enumerate()
                        key=|(_, tech)| tech.clone()
                        children=move |(index, tech)| {
                            let reveal = format!("--reveal-delay:{:.2}s", 0.3 + index as f64 * 0.05);
                            view! { <span class="tech-tag" style=reveal>{tech}</span> }
                        }
                    />
                </div>
            </section>

            <section class="gallery">
                <For
                    each=move || project.get().gallery.into_iter().enumerate()
                    key=|(_, src)| src.clone()
                    children=move |(index, src)| {
                        let reveal = format!("--reveal-delay:{:.2}s", 0.4 + index as f64 * 0.1);
                        let alt = format!("{} preview {}", project.get().title, index + 1);
                        let is_loaded = {
                            let src = src.clone();
                            move || loaded.with(|set| set.contains(&src))
                        };
                        // Both outcomes settle the frame: a broken gallery
                        // image just drops its placeholder shimmer.
                        let mark_settled = {
                            let src = src.clone();
                            move || {
                                loaded.update(|set| {
                                    set.insert(src.clone());
                                });
                            }
                        };
                        let settled_on_load = {
                            let mark = mark_settled.clone();
                            move |_| mark()
                        };
                        let settled_on_error = {
                            let mark = mark_settled.clone();
                            move |_| mark()
                        };
                        view! {
                            <figure class="gallery-item" style=reveal>
                                <img
                                    src=src
                                    alt=alt
                                    loading="lazy"
                                    class="gallery-img"
                                    class=("gallery-img-loaded", is_loaded.clone())
                                    on:load=settled_on_load
                                    on:error=settled_on_error
                                />
                                <Show when=move || !is_loaded()>
                                    <div class="gallery-placeholder" aria-hidden="true"></div>
                                </Show>
                            </figure>
                        }
                    }
                />
            </section>

            <div class="detail-back">
                <a href="/portfolio" class="back-link">
                    <span class="back-arrow">"\u{2190}"</span>
                    <span>"Back to portfolio"</span>
                </a>
            </div>
        </div>
    }
}
