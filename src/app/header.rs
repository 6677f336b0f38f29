use leptos::{either::Either, prelude::*};

use super::theme::ThemeController;
use crate::profile::User;

const NAV_LINKS: [(&str, &str); 3] = [
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header(user: &'static User, theme: ThemeController) -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm shadow-md">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#hero" class="text-2xl font-bold text-gray-800 dark:text-white">
                        {user.name.clone()}
                    </a>
                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-gray-600 dark:text-gray-300 hover:text-blue-500 dark:hover:text-blue-400"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <button
                        on:click=move |_| theme.toggle()
                        aria-label="Toggle dark mode"
                        class="p-2 rounded-full text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 focus:outline-none"
                    >
                        {move || {
                            if theme.theme().is_dark() {
                                Either::Left(view! { <SunIcon /> })
                            } else {
                                Either::Right(view! { <MoonIcon /> })
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="h-6 w-6"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
            />
        </svg>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="h-6 w-6"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"
            />
        </svg>
    }
}
