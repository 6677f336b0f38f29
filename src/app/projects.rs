use leptos::prelude::*;

use super::reveal::Reveal;
use crate::gallery::{vocabulary, ProjectGallery, TagFilter};
use crate::profile::Project;

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    let gallery = RwSignal::new(ProjectGallery::new(projects));
    // the project list never changes, so neither do the buttons
    let vocabulary = vocabulary(projects);

    let select = move |filter: TagFilter| {
        gallery.update(|g| match g.select(filter) {
            Ok(()) => log::debug!("showing projects for {}", g.selection()),
            Err(e) => log::warn!("{e}"),
        });
    };

    view! {
        <section id="projects" class="py-20">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <h2 class="text-3xl font-bold text-center mb-4 text-gray-800 dark:text-white">
                        "Projects"
                    </h2>
                    <div class="flex flex-wrap justify-center gap-2 mb-12">
                        {vocabulary
                            .into_iter()
                            .map(|filter| {
                                let label = filter.label().to_string();
                                let is_active = {
                                    let filter = filter.clone();
                                    move || gallery.with(|g| g.is_selected(&filter))
                                };
                                view! {
                                    <button
                                        on:click=move |_| select(filter.clone())
                                        class=move || {
                                            if is_active() {
                                                "px-4 py-2 text-sm font-semibold rounded-full transition-colors duration-300 bg-blue-600 text-white"
                                            } else {
                                                "px-4 py-2 text-sm font-semibold rounded-full transition-colors duration-300 bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200 hover:bg-blue-200 dark:hover:bg-blue-800"
                                            }
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <For
                            each=move || gallery.with(|g| g.visible())
                            key=|project| project.id
                            children=move |project: &'static Project| view! { <ProjectCard project /> }
                        />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="card-enter bg-white dark:bg-gray-800 rounded-lg shadow-lg overflow-hidden flex flex-col">
            <div class="p-6 flex-grow">
                <h3 class="text-xl font-bold mb-2 text-gray-800 dark:text-white">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-600 dark:text-gray-400 mb-4 flex-grow">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs font-semibold bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200 px-2 py-1 rounded-full">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="p-6 bg-gray-50 dark:bg-gray-700">
                <a
                    href=project.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="font-semibold text-blue-600 dark:text-blue-400 hover:underline"
                >
                    "View Project →"
                </a>
            </div>
        </div>
    }
}
