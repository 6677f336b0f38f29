use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::reveal::Reveal;
use crate::contact::{ContactForm, Field, SUBMIT_RESET_DELAY_MS};

const INPUT_CLASS: &str = "mt-1 block w-full px-3 py-2 bg-white dark:bg-gray-700 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500";

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    // stopped automatically if the section is torn down first
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| form.update(|f| f.finish_submission()),
        SUBMIT_RESET_DELAY_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(())) => {
                log::info!("contact form submitted");
                start(());
            }
            Some(Err(errors)) => log::debug!("contact form has {} errors", errors.len()),
            None => {}
        }
    };

    view! {
        <section id="contact" class="py-20 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="max-w-3xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-8 text-gray-800 dark:text-white">
                        "Get In Touch"
                    </h2>
                    <p class="text-center text-gray-600 dark:text-gray-300 mb-12">
                        "Have a question or want to work together? Feel free to reach out."
                    </p>
                    <form on:submit=on_submit class="space-y-6" novalidate=true>
                        {Field::ALL
                            .into_iter()
                            .map(|field| view! { <FormField form field /> })
                            .collect_view()}
                        <div class="text-center">
                            <button
                                type="submit"
                                class="w-full sm:w-auto inline-flex justify-center py-3 px-8 border border-transparent shadow-sm text-base font-medium rounded-full text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 transition duration-300"
                            >
                                "Send Message"
                            </button>
                        </div>
                    </form>
                    <Show when=move || form.with(|f| f.is_submitted())>
                        <div class="reveal-zoom reveal-shown mt-6 p-4 text-center bg-green-100 dark:bg-green-900 text-green-800 dark:text-green-200 rounded-md">
                            "Thank you! Your message has been sent."
                        </div>
                    </Show>
                </Reveal>
            </div>
        </section>
    }
}

/// One labelled input bound to `field`, with its inline error.
#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set_field(field, value));
    };

    let input = if field == Field::Message {
        Either::Left(view! {
            <textarea
                name=field.id()
                id=field.id()
                rows="4"
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            ></textarea>
        })
    } else {
        let kind = if field == Field::Email { "email" } else { "text" };
        Either::Right(view! {
            <input
                type=kind
                name=field.id()
                id=field.id()
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            />
        })
    };

    view! {
        <div>
            <label
                for=field.id()
                class="block text-sm font-medium text-gray-700 dark:text-gray-200"
            >
                {field.label()}
            </label>
            {input}
            {move || {
                form.with(|f| f.error(field))
                    .map(|err| {
                        view! { <p class="mt-1 text-sm text-red-500">{err.to_string()}</p> }
                    })
            }}
        </div>
    }
}
