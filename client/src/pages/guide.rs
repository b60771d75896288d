//! Static usage guide.

#[cfg(test)]
#[path = "guide_test.rs"]
mod guide_test;

use leptos::prelude::*;

use crate::util::markdown;

const GUIDE: &str = include_str!("guide.md");

#[component]
pub fn GuidePage() -> impl IntoView {
    let html = markdown::render(GUIDE);
    view! { <article class="guide" inner_html=html></article> }
}
