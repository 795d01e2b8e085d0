//! Built-in portfolio content panes. Content is static; the shell only mounts it.

use desktop_app_contract::{AppModule, ApplicationId};
use leptos::*;

pub(super) fn content_module(app_id: &ApplicationId) -> Option<AppModule> {
    let mount: fn() -> View = match app_id.as_str() {
        "about" => mount_about_pane,
        "experience" => mount_experience_pane,
        "skills" => mount_skills_pane,
        "projects" => mount_projects_pane,
        "contact" => mount_contact_pane,
        "resume" => mount_resume_pane,
        _ => return None,
    };
    Some(AppModule::new(mount))
}

fn pane(slug: &'static str, heading: &'static str, items: &'static [&'static str]) -> View {
    view! {
        <div class=format!("app-pane app-pane-{slug}")>
            <h2 class="app-pane-heading">{heading}</h2>
            <ul class="app-pane-list">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
    .into_view()
}

fn mount_about_pane() -> View {
    pane(
        "about",
        "About Me",
        &[
            "Software engineer building web platforms and data tooling.",
            "Based in the United States, open to remote roles.",
        ],
    )
}

fn mount_experience_pane() -> View {
    pane(
        "experience",
        "Experience",
        &[
            "Software Engineer: full-stack product work on customer-facing dashboards.",
            "Engineering Intern: internal tooling and CI pipelines.",
        ],
    )
}

fn mount_skills_pane() -> View {
    pane(
        "skills",
        "Skills",
        &[
            "Languages: Rust, TypeScript, Python, SQL",
            "Frameworks: Leptos, React, Next.js",
            "Infrastructure: Docker, PostgreSQL, GitHub Actions",
        ],
    )
}

fn mount_projects_pane() -> View {
    pane(
        "projects",
        "Projects",
        &[
            "Desktop portfolio shell: this site.",
            "Arcade canvas prototype: unfinished.",
        ],
    )
}

fn mount_contact_pane() -> View {
    pane(
        "contact",
        "Contact",
        &["Email and LinkedIn links are listed on the resume."],
    )
}

fn mount_resume_pane() -> View {
    view! {
        <div class="app-pane app-pane-resume">
            <h2 class="app-pane-heading">"Resume"</h2>
            <a class="app-action" href="/resume.pdf" download="resume.pdf">"Download PDF"</a>
        </div>
    }
    .into_view()
}
