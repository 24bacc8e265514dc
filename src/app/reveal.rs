use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{Motion, Trigger};

/// Wraps its children in a block that plays `motion` once, either right after
/// mount or the first time the block scrolls into view.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional, into)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = RwSignal::new(false);

    match motion.trigger {
        Trigger::Mount => {
            // wait a frame so the starting pose is painted before the swap
            Effect::new(move |_| {
                request_animation_frame(move || revealed.set(true));
            });
        }
        Trigger::InView => {
            let visible = use_element_visibility(node_ref);
            Effect::new(move |_| {
                if visible.get() && !revealed.get_untracked() {
                    revealed.set(true);
                }
            });
        }
    }

    view! {
        <div node_ref=node_ref class=class style=move || motion.style(revealed.get())>
            {children.map(|c| c())}
        </div>
    }
}
