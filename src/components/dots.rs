//! Dot Group Component
//!
//! Visual projection of a dot track: `dot` cells under a `dot-group`,
//! filled up to the score.

use leptos::prelude::*;

/// Class for a points counter; negative balances are highlighted.
pub fn counter_class(remaining: i32) -> &'static str {
    if remaining < 0 { "text-accent" } else { "" }
}

#[component]
pub fn DotGroup(
    #[prop(into)] score: Signal<u8>,
    len: u8,
    /// Receives the clicked cell index
    #[prop(into)] on_click: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="dot-group">
            {(0..usize::from(len)).map(|index| {
                view! {
                    <span
                        class=move || if index < usize::from(score.get()) { "dot filled" } else { "dot" }
                        on:click=move |_| on_click.run(index)
                    ></span>
                }
            }).collect_view()}
        </div>
    }
}
