//! Priority Section Component
//!
//! Attributes and abilities: three categories, each with a priority select,
//! a `(remaining/allocated)` counter and a dot group per trait.

use dot_pool::Priority;
use leptos::prelude::*;

use super::catalog_select::{placeholder_class, selected_value};
use super::dots::{counter_class, DotGroup};
use crate::context::use_catalogs;
use crate::store::{self, use_sheet_store, GroupKind};

#[component]
pub fn PrioritySection(
    kind: GroupKind,
    id: &'static str,
    title: &'static str,
    /// `name` of the priority selects
    select_name: &'static str,
) -> impl IntoView {
    let store = use_sheet_store();
    let count = store::read_group(store, kind, |group| group.categories().len());

    view! {
        <section id=id>
            <h3>{title}</h3>
            <div class="grid">
                {(0..count)
                    .map(|category| view! { <PriorityCategory kind=kind category=category select_name=select_name /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PriorityCategory(kind: GroupKind, category: usize, select_name: &'static str) -> impl IntoView {
    let store = use_sheet_store();
    let catalogs = use_catalogs();
    let ready = catalogs.ready();

    let (name, traits) = store::read_group(store, kind, |group| {
        let cat = &group.categories()[category];
        let traits: Vec<(String, u8)> = cat
            .traits()
            .iter()
            .map(|t| (t.name.clone(), t.track.len()))
            .collect();
        (cat.name().to_string(), traits)
    });

    let priority = move || {
        store::read_group(store, kind, |group| group.category(category).and_then(|c| c.priority()))
    };
    let balance = move || {
        store::read_group(store, kind, |group| (group.remaining(category), group.budget(category)))
    };

    let on_priority = move |ev: web_sys::Event| {
        let priority = selected_value(&ev).and_then(|value| value.parse::<Priority>().ok());
        store::change_priority(store, kind, category, priority);
    };

    view! {
        <div>
            <h4>
                {name} " "
                <span class=move || counter_class(balance().0)>
                    {move || {
                        let (remaining, allocated) = balance();
                        format!("({remaining}/{allocated})")
                    }}
                </span>
            </h4>
            <select
                name=select_name
                class=move || placeholder_class(priority().map(|p| p.as_str()))
                prop:value=move || priority().map_or("", |p| p.as_str())
                disabled=move || !ready.get()
                on:change=on_priority
            >
                <option value="" disabled=true hidden=true>"priority"</option>
                {Priority::ALL
                    .iter()
                    .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                    .collect_view()}
            </select>
            {traits
                .into_iter()
                .enumerate()
                .map(|(trait_index, (label, len))| {
                    let score = Signal::derive(move || {
                        store::read_group(store, kind, |group| {
                            group
                                .category(category)
                                .and_then(|c| c.traits().get(trait_index))
                                .map_or(0, |t| t.track.score())
                        })
                    });
                    let on_click = move |index: usize| {
                        if !catalogs.is_ready() {
                            return;
                        }
                        let result = store::write_group(store, kind, |group| {
                            group.attempt_click(category, trait_index, index)
                        });
                        if let Err(err) = result {
                            tracing::debug!(%err, "dot click ignored");
                        }
                    };
                    view! {
                        <div class="dots-wrapper">
                            <span class="trait-label">{label}</span>
                            <DotGroup score=score len=len on_click=on_click />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
