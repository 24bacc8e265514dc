use leptos::prelude::*;

use crate::content::Icon;

/// Glyph from the icon font, keyed by the icon's name.
#[component]
pub fn Glyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true"></i> }
}
