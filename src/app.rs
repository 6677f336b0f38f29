mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile::profile;
use contact::ContactSection;
use footer::Footer;
use header::Header;
use hero::HeroSection;
use projects::ProjectsSection;
use skills::SkillsSection;
use theme::ThemeController;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-50 dark:bg-gray-900 font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = ThemeController::new();
    let name = profile().user.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        // the theme class on <html> drives every `dark:` variant
        <Html {..} class=move || theme.theme().as_str() />
        <Meta name="description" content=profile().user.bio.clone() />

        <Router>
            <div class="text-gray-900 dark:text-gray-100 transition-colors duration-500">
                <Header user=&profile().user theme />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
                <Footer user=&profile().user />
            </div>
        </Router>
    }
}

/// The single portfolio page.
#[component]
fn HomePage() -> impl IntoView {
    let profile = profile();
    view! {
        <Title text="Portfolio" />
        <main>
            <HeroSection user=&profile.user />
            <SkillsSection skills=profile.skills.as_slice() />
            <ProjectsSection projects=profile.projects.as_slice() />
            <ContactSection />
        </main>
    }
}
