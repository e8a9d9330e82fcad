//! Selection List Component
//!
//! Merits and flaws: repeating dropdown rows without dots, with the summed
//! cost of the current picks.

use dot_pool::RowId;
use leptos::prelude::*;

use super::catalog_select::CatalogSelect;
use crate::catalog::Population;
use crate::context::use_catalogs;
use crate::guard;
use crate::store::{self, use_sheet_store, ListKind};

#[component]
pub fn SelectionList(
    kind: ListKind,
    title: &'static str,
    /// `name` of the row selects
    name: &'static str,
    catalog: RwSignal<Population>,
) -> impl IntoView {
    let store = use_sheet_store();
    let catalogs = use_catalogs();

    let rows = move || {
        store::read_list(store, kind, |rows| {
            rows.iter()
                .map(|row| (row.id(), row.is_removable()))
                .collect::<Vec<_>>()
        })
    };
    let total = move || {
        let picks: Vec<String> =
            store::read_list(store, kind, |rows| rows.iter().filter_map(|r| r.value.clone()).collect());
        catalog.with(|population| {
            population.catalog().map_or(0, |catalog| {
                picks.iter().filter_map(|value| catalog.cost_of(value)).sum::<i32>()
            })
        })
    };

    let add_row = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        if !catalogs.is_ready() {
            return;
        }
        let row = store::write_list(store, kind, |rows| rows.add(None));
        tracing::debug!(?kind, ?row, "row added");
    };

    view! {
        <div>
            <h3>{title} " " <span>{total}</span></h3>
            <div class="flex flex-col gap-3">
                <For
                    each=rows
                    key=|(row, _)| *row
                    children=move |(row, removable)| view! {
                        <SelectionRow kind=kind row=row removable=removable name=name catalog=catalog />
                    }
                />
                <div class="add-row">
                    <button class="btn-plus" on:click=add_row>"+"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SelectionRow(
    kind: ListKind,
    row: RowId,
    removable: bool,
    name: &'static str,
    catalog: RwSignal<Population>,
) -> impl IntoView {
    let store = use_sheet_store();
    let catalogs = use_catalogs();

    let value = Signal::derive(move || {
        store::read_list(store, kind, |rows| rows.get(row).and_then(|r| r.value.clone()))
    });
    let taken = Signal::derive(move || {
        store::read_list(store, kind, |rows| {
            let group: Vec<_> = rows.iter().map(|r| (r.id(), r.value.as_deref())).collect();
            guard::taken_elsewhere(&group, &row)
        })
    });
    let on_change = move |selection: Option<String>| store::select_in_list(store, kind, row, selection);
    let remove = move |_: web_sys::MouseEvent| {
        if let Err(err) = store::write_list(store, kind, |rows| rows.remove(row).map(|_| ())) {
            tracing::warn!(%err, "row not removed");
        }
    };

    view! {
        <div class="merit-flaw-wrapper relative flex items-center justify-center group gap-2">
            <CatalogSelect
                name=name
                placeholder=name
                catalog=catalog
                value=value
                taken=taken
                on_change=on_change
                enabled=catalogs.ready()
            />
            {removable.then(|| view! {
                <button class="btn-minus" on:click=remove>"-"</button>
            })}
        </div>
    }
}
