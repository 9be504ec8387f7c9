use leptos::*;
use leptos_router::{use_location, Route, Router, Routes};
use portfolio_core::route::TransitionGroup;

use crate::components::layout::PageLayout;
use crate::pages::landing::LandingHero;
use crate::pages::portfolio::PortfolioPage;
use crate::pages::project_detail::ProjectDetailPage;

/// Router-owned transition state: true while the full-screen fade covers the
/// landing -> listing handoff. Views read it via context instead of mutating
/// document-level state.
#[derive(Clone, Copy)]
pub struct RouteTransition(pub RwSignal<bool>);

#[component]
pub fn App() -> impl IntoView {
    let transitioning = create_rw_signal(false);
    provide_context(RouteTransition(transitioning));

    view! {
        <Router>
            <AppShell/>
        </Router>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let pathname = use_location().pathname;
    let transitioning = expect_context::<RouteTransition>().0;

    // Landing and the shared-layout pages animate as separate groups; the
    // shell class scopes their enter animations apart.
    let shell_class =
        create_memo(move |_| TransitionGroup::of_path(&pathname.get()).shell_class());

    create_effect(move |_| {
        log::debug!("route: {}", pathname.get());
    });

    view! {
        <div class=move || shell_class.get()>
            <Routes>
                <Route path="/" view=LandingHero/>
                <Route path="" view=PageLayout>
                    <Route path="portfolio" view=PortfolioPage/>
                    <Route path="projects/:id" view=ProjectDetailPage/>
                </Route>
            </Routes>
            <Show when=move || transitioning.get()>
                <div class="fade-overlay"></div>
            </Show>
        </div>
    }
}
