//! Identity Section Component
//!
//! Clan, path, nature and demeanor. Choosing a clan fills the permanent
//! discipline slots.

use leptos::prelude::*;

use super::catalog_select::CatalogSelect;
use crate::catalog::Population;
use crate::context::use_catalogs;
use crate::store::{self, use_sheet_store, IdentityField};

#[component]
pub fn IdentitySection() -> impl IntoView {
    let catalogs = use_catalogs();

    view! {
        <section id="identity-section">
            <IdentitySelect field=IdentityField::Clan name="clan" catalog=catalogs.clans />
            <IdentitySelect field=IdentityField::Path name="paths" catalog=catalogs.paths />
            <IdentitySelect field=IdentityField::Nature name="nature" catalog=catalogs.natures />
            <IdentitySelect field=IdentityField::Demeanor name="demeanor" catalog=catalogs.natures />
        </section>
    }
}

#[component]
fn IdentitySelect(
    field: IdentityField,
    name: &'static str,
    catalog: RwSignal<Population>,
) -> impl IntoView {
    let store = use_sheet_store();
    let catalogs = use_catalogs();

    let value = Signal::derive(move || store::identity(store, field));
    let on_change = move |selection: Option<String>| {
        store::set_identity(store, field, selection);
        if field != IdentityField::Clan {
            return;
        }
        catalogs.clan_disciplines.with_untracked(|table| match table {
            Some(table) => catalogs
                .disciplines
                .with_untracked(|population| store::link_clan(store, table, population.catalog())),
            None => tracing::debug!("clan map unavailable, disciplines left unchanged"),
        });
    };

    view! {
        <CatalogSelect
            name=name
            placeholder=name
            catalog=catalog
            value=value
            on_change=on_change
            enabled=catalogs.ready()
        />
    }
}
