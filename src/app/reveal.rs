use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view. With `zoom`
/// the content scales up instead of sliding.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] zoom: bool,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let is_visible = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    // once shown, stay shown
    Effect::new(move |_| {
        if is_visible.get() && !shown.get_untracked() {
            set_shown.set(true);
        }
    });

    let base = if zoom { "reveal-zoom" } else { "reveal-slide" };
    view! {
        <div
            node_ref=target
            class=move || {
                let state = if shown.get() { "reveal-shown" } else { "" };
                format!("{base} {state} {class}")
            }
        >
            {children()}
        </div>
    }
}
