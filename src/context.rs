//! Catalog Context
//!
//! Loaded dropdown sources shared via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::{self, Population};
use crate::clan::ClanDisciplines;
use crate::config::DataPaths;
use crate::fetch;

/// Dropdown sources plus the gate that holds back interaction until every
/// source has resolved or failed
#[derive(Clone, Copy)]
pub struct Catalogs {
    pub disciplines: RwSignal<Population>,
    pub backgrounds: RwSignal<Population>,
    pub merits: RwSignal<Population>,
    pub flaws: RwSignal<Population>,
    pub clans: RwSignal<Population>,
    pub paths: RwSignal<Population>,
    /// Shared by nature and demeanor
    pub natures: RwSignal<Population>,
    pub clan_disciplines: RwSignal<Option<ClanDisciplines>>,
    ready: RwSignal<bool>,
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalogs {
    pub fn new() -> Self {
        Self {
            disciplines: RwSignal::new(Population::Loading),
            backgrounds: RwSignal::new(Population::Loading),
            merits: RwSignal::new(Population::Loading),
            flaws: RwSignal::new(Population::Loading),
            clans: RwSignal::new(Population::Loading),
            paths: RwSignal::new(Population::Loading),
            natures: RwSignal::new(Population::Loading),
            clan_disciplines: RwSignal::new(None),
            ready: RwSignal::new(false),
        }
    }

    /// Interactive handlers check this before touching state.
    pub fn is_ready(&self) -> bool {
        self.ready.get_untracked()
    }

    pub fn ready(&self) -> ReadSignal<bool> {
        self.ready.read_only()
    }

    /// Fetch every source concurrently, then open the gate.
    pub async fn load(self, paths: DataPaths) {
        let (disciplines, backgrounds, merits, flaws, clans, sects, natures, clan_disciplines) = futures::join!(
            fetch::load_flat(&paths.disciplines),
            fetch::load_flat(&paths.backgrounds),
            fetch::load_grouped(&paths.merits, catalog::with_cost),
            fetch::load_grouped(&paths.flaws, catalog::with_cost),
            fetch::load_grouped(&paths.clans, catalog::plain),
            fetch::load_grouped(&paths.paths, catalog::plain),
            fetch::load_flat(&paths.natures),
            fetch::load_clan_disciplines(&paths.clan_disciplines),
        );
        self.disciplines.set(disciplines);
        self.backgrounds.set(backgrounds);
        self.merits.set(merits);
        self.flaws.set(flaws);
        self.clans.set(clans);
        self.paths.set(sects);
        self.natures.set(natures);
        self.clan_disciplines.set(clan_disciplines);
        self.ready.set(true);
        tracing::info!("reference data settled, sheet is interactive");
    }
}

/// Get the catalogs from context
pub fn use_catalogs() -> Catalogs {
    expect_context::<Catalogs>()
}
