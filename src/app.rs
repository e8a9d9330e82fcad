//! SchreckNet Lite App
//!
//! Root component: owns the sheet store and catalogs, starts the data
//! load and lays out the sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{IdentitySection, PoolSection, PrioritySection, SelectionList};
use crate::config::SheetConfig;
use crate::context::Catalogs;
use crate::store::{GroupKind, ListKind, PoolKind, SheetState};

#[component]
pub fn App(config: SheetConfig) -> impl IntoView {
    // State
    let store = Store::new(SheetState::new(&config));
    let catalogs = Catalogs::new();

    // Provide context to all children
    provide_context(store);
    provide_context(catalogs);

    // Populate every dropdown once; interaction opens when all settle
    spawn_local(catalogs.load(config.data.clone()));

    view! {
        <main class="sheet">
            <IdentitySection />

            <PrioritySection
                kind=GroupKind::Attributes
                id="attributes-section"
                title="Attributes"
                select_name="attribute-priority"
            />
            <PrioritySection
                kind=GroupKind::Abilities
                id="abilities-section"
                title="Abilities"
                select_name="ability-priority"
            />

            <div id="disciplines-backgrounds-section" class="grid">
                <PoolSection
                    kind=PoolKind::Disciplines
                    id="disciplines-section"
                    title="Disciplines"
                    selector=("discipline", catalogs.disciplines)
                />
                <PoolSection
                    kind=PoolKind::Backgrounds
                    id="backgrounds-section"
                    title="Backgrounds"
                    selector=("background", catalogs.backgrounds)
                />
                <PoolSection kind=PoolKind::Virtues id="virtues-section" title="Virtues" />
            </div>

            <section id="merits-flaws-section" class="grid">
                <SelectionList kind=ListKind::Merits title="Merits" name="merit" catalog=catalogs.merits />
                <SelectionList kind=ListKind::Flaws title="Flaws" name="flaw" catalog=catalogs.flaws />
            </section>
        </main>
    }
}
