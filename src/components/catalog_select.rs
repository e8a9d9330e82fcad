//! Catalog Select Component
//!
//! A `<select>` fed from a loaded catalog, with placeholder styling and
//! duplicate-guarded options.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::catalog::{Catalog, Choice, Population};
use crate::guard;

/// Select styling: muted while the placeholder shows.
pub fn placeholder_class(value: Option<&str>) -> &'static str {
    match value {
        Some(value) if !value.is_empty() => "dropdown-custom text-textPrimary",
        _ => "dropdown-custom text-textSecondary",
    }
}

/// Read a select's new value; the placeholder maps to `None`.
pub fn selected_value(ev: &web_sys::Event) -> Option<String> {
    let value = event_target::<web_sys::HtmlSelectElement>(ev).value();
    Some(value).filter(|value| !value.is_empty())
}

#[component]
pub fn CatalogSelect(
    name: &'static str,
    placeholder: &'static str,
    catalog: RwSignal<Population>,
    #[prop(into)] value: Signal<Option<String>>,
    /// Values held by sibling selects of the same group
    #[prop(optional)] taken: Option<Signal<BTreeSet<String>>>,
    #[prop(into)] on_change: Callback<Option<String>>,
    #[prop(into)] enabled: Signal<bool>,
) -> impl IntoView {
    let is_taken = move |option: &str| {
        taken.is_some_and(|taken| taken.with(|set| guard::is_disabled(set, option)))
    };

    let render_choice = move |choice: Choice| {
        let for_selected = choice.value.clone();
        let for_disabled = choice.value.clone();
        let for_class = choice.value.clone();
        view! {
            <option
                value=choice.value
                data-cost=choice.cost.map(|cost| cost.to_string())
                data-dots=choice.dots.map(|dots| dots.to_string())
                prop:selected=move || value.with(|v| v.as_deref() == Some(for_selected.as_str()))
                disabled=move || is_taken(&for_disabled)
                class=move || if is_taken(&for_class) { "option-taken" } else { "" }
            >
                {choice.label}
            </option>
        }
    };

    let options = move || match catalog.get() {
        Population::Failed => view! {
            <option value="" disabled=true selected=true>"Error loading options"</option>
        }
        .into_any(),
        Population::Loading => view! {
            <option value="" disabled=true hidden=true prop:selected=true>{placeholder}</option>
        }
        .into_any(),
        Population::Ready(loaded) => {
            let data = match loaded {
                Catalog::Flat(choices) => choices.into_iter().map(render_choice).collect_view().into_any(),
                Catalog::Grouped(groups) => groups
                    .into_iter()
                    .map(|group| view! {
                        <optgroup label=group.label>
                            {group.choices.into_iter().map(render_choice).collect_view()}
                        </optgroup>
                    })
                    .collect_view()
                    .into_any(),
            };
            view! {
                <option
                    value=""
                    disabled=true
                    hidden=true
                    prop:selected=move || value.with(Option::is_none)
                >
                    {placeholder}
                </option>
                {data}
            }
            .into_any()
        }
    };

    view! {
        <select
            name=name
            class=move || value.with(|v| placeholder_class(v.as_deref()))
            prop:value=move || value.get().unwrap_or_default()
            disabled=move || !enabled.get()
            on:change=move |ev| on_change.run(selected_value(&ev))
        >
            {options}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_class() {
        assert_eq!(placeholder_class(None), "dropdown-custom text-textSecondary");
        assert_eq!(placeholder_class(Some("")), "dropdown-custom text-textSecondary");
        assert_eq!(placeholder_class(Some("brujah")), "dropdown-custom text-textPrimary");
    }
}
