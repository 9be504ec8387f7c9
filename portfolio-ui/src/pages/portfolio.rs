use leptos::*;
use project_registry::ProjectSummary;

use crate::components::fallback_image::FallbackImage;

const PROFILE_STACK: &str = "fastapi / sqlalchemy / postgresql / redis / docker / pytest / celery";

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="portfolio page-enter">
            <h1 class="pixel-font portfolio-headline">"python backend developer"</h1>

            <div class="profile">
                <div class="profile-row">
                    <img
                        src="/imgs/profile.png"
                        alt="Nikita avatar"
                        class="profile-avatar"
                    />
                    <div class="profile-facts">
                        <span class="pixel-font">"Nikita"</span>
                        <span class="pixel-font">"23yo"</span>
                        <span class="pixel-font">"Moscow, RU"</span>
                    </div>
                </div>
                <span class="profile-stack">{PROFILE_STACK}</span>
            </div>

            <div class="project-grid">
                <For
                    each=move || project_registry::summaries().into_iter().enumerate()
                    key=|(_, project)| project.slug.clone()
                    children=move |(index, project)| {
                        view! { <ProjectCard project=project index=index/> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: ProjectSummary, index: usize) -> impl IntoView {
    let href = format!("/projects/{}", project.slug);
    let reveal = format!("--reveal-delay:{:.2}s", 0.18 + index as f64 * 0.08);

    view! {
        <a href=href class="project-card" style=reveal>
            <FallbackImage
                primary=project.cover_image
                alt=project.title.clone()
                class="project-card-cover"
            />
            <h3 class="project-card-title">{project.title}</h3>
            <p class="project-card-tagline">{project.tagline}</p>
        </a>
    }
}
