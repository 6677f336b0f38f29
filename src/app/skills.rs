use leptos::prelude::*;

use super::reveal::Reveal;
use crate::profile::SkillCategory;

#[component]
pub fn SkillsSection(skills: &'static [SkillCategory]) -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <h2 class="text-3xl font-bold text-center mb-12 text-gray-800 dark:text-white">
                        "Tech Stack"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {skills
                            .iter()
                            .map(|category| {
                                view! {
                                    <div class="bg-gray-100 dark:bg-gray-700 p-6 rounded-lg shadow-md">
                                        <h3 class="text-xl font-semibold mb-4 text-blue-600 dark:text-blue-400">
                                            {category.category.clone()}
                                        </h3>
                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="bg-blue-100 dark:bg-blue-900 text-blue-800 dark:text-blue-200 text-sm font-medium px-3 py-1 rounded-full transition duration-300 transform hover:scale-110 hover:shadow-lg">
                                                            {skill.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
