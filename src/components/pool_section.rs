//! Pool Section Component
//!
//! Disciplines, backgrounds and virtues: rows of dots drawing on one fixed
//! budget. Sections with a catalog get a selector per row plus add/remove
//! controls; virtues are fixed labelled rows.

use dot_pool::RowId;
use leptos::prelude::*;

use super::catalog_select::CatalogSelect;
use super::dots::{counter_class, DotGroup};
use crate::catalog::Population;
use crate::context::use_catalogs;
use crate::guard;
use crate::store::{self, use_sheet_store, PoolKind};

#[component]
pub fn PoolSection(
    kind: PoolKind,
    id: &'static str,
    title: &'static str,
    /// Select `name` and source for rows that pick an item
    #[prop(optional)]
    selector: Option<(&'static str, RwSignal<Population>)>,
) -> impl IntoView {
    let store = use_sheet_store();
    let catalogs = use_catalogs();

    let remaining = move || store::read_pool(store, kind, |pool| pool.remaining());
    let rows = move || {
        store::read_pool(store, kind, |pool| {
            pool.rows()
                .iter()
                .map(|row| (row.id(), row.is_removable()))
                .collect::<Vec<_>>()
        })
    };

    let add_row = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        if !catalogs.is_ready() {
            return;
        }
        let row = store::write_pool(store, kind, |pool| pool.add_row());
        tracing::debug!(?kind, ?row, "row added");
    };

    view! {
        <section id=id>
            <h3>
                {title} " "
                <span class=move || counter_class(remaining())>{remaining}</span>
            </h3>
            <div class="flex flex-col gap-3">
                <For
                    each=rows
                    key=|(row, _)| *row
                    children=move |(row, removable)| view! { <PoolRow kind=kind row=row removable=removable selector=selector /> }
                />
                {selector.map(|_| view! {
                    <div class="add-row">
                        <button class="btn-plus" on:click=add_row>"+"</button>
                    </div>
                })}
            </div>
        </section>
    }
}

#[component]
fn PoolRow(
    kind: PoolKind,
    row: RowId,
    removable: bool,
    selector: Option<(&'static str, RwSignal<Population>)>,
) -> impl IntoView {
    let store = use_sheet_store();
    let catalogs = use_catalogs();

    let (len, label) = store::read_pool(store, kind, |pool| {
        let slot = pool.slot(row);
        (
            slot.map_or(0, |s| s.track.len()),
            slot.and_then(|s| s.selection.clone()).unwrap_or_default(),
        )
    });

    let score = Signal::derive(move || {
        store::read_pool(store, kind, |pool| pool.slot(row).map_or(0, |s| s.track.score()))
    });

    let on_click = move |index: usize| {
        if !catalogs.is_ready() {
            return;
        }
        if let Err(err) = store::write_pool(store, kind, |pool| pool.attempt_click(row, index)) {
            tracing::debug!(%err, "dot click ignored");
        }
    };

    let remove = move |_: web_sys::MouseEvent| {
        if let Err(err) = store::write_pool(store, kind, |pool| pool.remove_row(row)) {
            tracing::warn!(%err, "row not removed");
        }
    };

    let head = match selector {
        Some((name, catalog)) => {
            let value = Signal::derive(move || {
                store::read_pool(store, kind, |pool| pool.slot(row).and_then(|s| s.selection.clone()))
            });
            let taken = Signal::derive(move || {
                store::read_pool(store, kind, |pool| {
                    let group: Vec<_> = pool
                        .rows()
                        .iter()
                        .map(|r| (r.id(), r.value.selection.as_deref()))
                        .collect();
                    guard::taken_elsewhere(&group, &row)
                })
            });
            let on_change = move |selection: Option<String>| {
                if let Err(err) = store::write_pool(store, kind, |pool| pool.select(row, selection)) {
                    tracing::warn!(%err, "selection dropped");
                }
            };
            view! {
                <div class="relative flex items-center justify-center group gap-2">
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
            .into_any()
        }
        None => view! { <span class="trait-label">{label}</span> }.into_any(),
    };

    view! {
        <div class="dots-wrapper">
            {head}
            <DotGroup score=score len=len on_click=on_click />
        </div>
    }
}
