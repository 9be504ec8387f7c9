use leptos::*;
use leptos_router::Outlet;

const LAST_UPDATE: &str = "07.10.2025";

struct ContactLink {
    href: &'static str,
    label: &'static str,
    glyph: &'static str,
    text: &'static str,
    external: bool,
}

fn contact_links() -> Vec<ContactLink> {
    vec![
        ContactLink {
            href: "mailto:mickeyshide@gmail.com",
            label: "Email mickeyshide@gmail.com",
            glyph: "\u{2709}",
            text: "mickeyshide@gmail.com",
            external: false,
        },
        ContactLink {
            href: "https://t.me/mickeyshide",
            label: "Open Telegram profile mickeyshide",
            glyph: "\u{2708}",
            text: "mickeyshide",
            external: true,
        },
    ]
}

/// Persistent chrome for the listing and detail pages. The landing route does
/// not use this layout, so header and footer never flash during the hero.
#[component]
pub fn PageLayout() -> impl IntoView {
    view! {
        <div class="page-frame">
            <SiteHeader/>
            <main class="page-main">
                <div class="page-main-inner">
                    <Outlet/>
                </div>
            </main>
            <SiteFooter/>
        </div>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <img src="/imgs/shide.png" alt="Shide logo" loading="lazy" class="site-logo"/>
                <nav aria-label="Contact channels" class="contact-nav">
                    {contact_links()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    aria-label=link.label
                                    class="contact-link"
                                    target=link.external.then_some("_blank")
                                    rel=link.external.then_some("noopener noreferrer")
                                >
                                    <span class="contact-glyph">{link.glyph}</span>
                                    <span class="contact-text">{link.text}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <span>{format!("\u{a9} {year} mickeyshide")}</span>
                <span class="site-footer-updated">{format!("Updated: {LAST_UPDATE}")}</span>
            </div>
        </footer>
    }
}
