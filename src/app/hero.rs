use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use super::reveal::Reveal;
use crate::profile::User;
use crate::typing::{TypingEffect, TYPING_INTERVAL_MS};

#[component]
pub fn HeroSection(user: &'static User) -> impl IntoView {
    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center pt-16">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <Reveal zoom=true>
                    <img
                        src=user.avatar.clone()
                        alt=user.name.clone()
                        class="w-40 h-40 rounded-full mx-auto mb-6 border-4 border-blue-500 shadow-lg"
                    />
                    <h1 class="text-4xl md:text-6xl font-extrabold text-gray-800 dark:text-white">
                        {user.name.clone()}
                    </h1>
                    <p class="text-xl md:text-2xl mt-4 text-blue-600 dark:text-blue-400 font-mono h-8">
                        <TypedText text=user.title.clone() />
                        <span class="animate-ping">"|"</span>
                    </p>
                    <p class="mt-6 max-w-2xl mx-auto text-lg text-gray-600 dark:text-gray-300">
                        {user.bio.clone()}
                    </p>
                    <div class="mt-8">
                        <a
                            href="#projects"
                            class="bg-blue-600 text-white font-bold py-3 px-8 rounded-full hover:bg-blue-700 transition duration-300 transform hover:scale-105 shadow-lg"
                        >
                            "View Projects"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// Types `text` out one character at a time. A new `text` restarts the
/// animation from an empty display.
#[component]
fn TypedText(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let typing = RwSignal::new(TypingEffect::new(text.get_untracked()));

    // the interval is torn down with the component
    let Pausable { pause, resume, .. } = use_interval_fn(
        move || {
            typing.update(|t| {
                t.tick();
            });
        },
        TYPING_INTERVAL_MS,
    );

    Effect::new(move |_| {
        if typing.with(|t| t.is_complete()) {
            pause();
        }
    });

    Effect::watch(
        move || text.get(),
        move |text, _, _| {
            typing.update(|t| t.retarget(text.clone()));
            resume();
        },
        false,
    );

    view! { <span>{move || typing.with(|t| t.visible().to_string())}</span> }
}
