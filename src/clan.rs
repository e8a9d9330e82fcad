//! Clan → Discipline Linkage
//!
//! Picking a clan fills the permanent discipline slots with its in-clan
//! disciplines, in order.

use std::collections::HashMap;

use dot_pool::PointPool;

use crate::catalog::Catalog;
use crate::models::WrappedClanMap;

/// Immutable clan → in-clan discipline table, loaded once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClanDisciplines(HashMap<String, Vec<String>>);

impl ClanDisciplines {
    /// Unwrap the single-element array the data file ships as. Extra
    /// elements are merged; later keys win.
    pub fn from_wrapped(wrapped: WrappedClanMap) -> Self {
        Self(wrapped.into_iter().flatten().collect())
    }

    pub fn in_clan(&self, clan: &str) -> &[String] {
        self.0.get(clan).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rebuild the discipline pool for a newly chosen clan.
///
/// User rows go, every dot returns to base, and the Nth permanent slot gets
/// the clan's Nth discipline. Slots past the clan's list, and disciplines
/// missing from the catalog, stay blank.
pub fn apply_clan(
    pool: &mut PointPool,
    table: &ClanDisciplines,
    catalog: Option<&Catalog>,
    clan: Option<&str>,
) {
    pool.clear_dynamic();
    let in_clan = clan.map_or(&[][..], |clan| table.in_clan(clan));
    for (slot, row) in pool.permanent_rows().into_iter().enumerate() {
        let discipline = in_clan
            .get(slot)
            .filter(|value| catalog.map_or(true, |c| c.contains(value)))
            .cloned();
        if let Err(err) = pool.select(row, discipline) {
            tracing::warn!(%err, "discipline slot vanished during clan change");
        }
    }
    tracing::debug!(?clan, selections = ?pool.selections(), "in-clan disciplines applied");
}
