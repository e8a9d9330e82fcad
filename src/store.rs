//! Sheet State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every engine
//! object lives here; the view only renders it.

use dot_pool::{PointPool, Priority, PriorityGroup, RowId, RowList};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::clan::{self, ClanDisciplines};
use crate::config::{PoolRules, PriorityRules, SheetConfig};

pub const PHYSICAL: [&str; 3] = ["Strength", "Dexterity", "Stamina"];
pub const SOCIAL: [&str; 3] = ["Charisma", "Manipulation", "Appearance"];
pub const MENTAL: [&str; 3] = ["Perception", "Intelligence", "Wits"];

pub const TALENTS: [&str; 10] = [
    "Alertness", "Athletics", "Awareness", "Brawl", "Empathy",
    "Expression", "Intimidation", "Leadership", "Streetwise", "Subterfuge",
];
pub const SKILLS: [&str; 10] = [
    "Animal Ken", "Crafts", "Drive", "Etiquette", "Firearms",
    "Larceny", "Melee", "Performance", "Stealth", "Survival",
];
pub const KNOWLEDGES: [&str; 10] = [
    "Academics", "Computer", "Finance", "Investigation", "Law",
    "Medicine", "Occult", "Politics", "Science", "Technology",
];
pub const VIRTUES: [&str; 3] = ["Conscience", "Self-Control", "Courage"];

/// Complete sheet state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct SheetState {
    pub attributes: PriorityGroup,
    pub abilities: PriorityGroup,
    pub disciplines: PointPool,
    pub backgrounds: PointPool,
    pub virtues: PointPool,
    pub merits: RowList<Option<String>>,
    pub flaws: RowList<Option<String>>,
    pub clan: Option<String>,
    pub path: Option<String>,
    pub nature: Option<String>,
    pub demeanor: Option<String>,
}

fn priority_group(rules: &PriorityRules) -> PriorityGroup {
    PriorityGroup::new(rules.table, rules.dots, rules.base, rules.max_score)
}

fn pool(rules: &PoolRules) -> PointPool {
    PointPool::new(rules.budget, rules.dots, rules.base).with_permanent_rows(rules.slots)
}

fn selection_rows(slots: usize) -> RowList<Option<String>> {
    let mut rows = RowList::new();
    for _ in 0..slots {
        rows.push_permanent(None);
    }
    rows
}

impl SheetState {
    pub fn new(config: &SheetConfig) -> Self {
        let virtues = &config.virtues;
        Self {
            attributes: priority_group(&config.attributes)
                .with_category("Physical", &PHYSICAL)
                .with_category("Social", &SOCIAL)
                .with_category("Mental", &MENTAL),
            abilities: priority_group(&config.abilities)
                .with_category("Talents", &TALENTS)
                .with_category("Skills", &SKILLS)
                .with_category("Knowledges", &KNOWLEDGES),
            disciplines: pool(&config.disciplines),
            backgrounds: pool(&config.backgrounds),
            virtues: PointPool::fixed(
                virtues.budget,
                virtues.dots,
                virtues.base,
                VIRTUES.into_iter().take(virtues.slots),
            ),
            merits: selection_rows(config.merit_slots),
            flaws: selection_rows(config.flaw_slots),
            clan: None,
            path: None,
            nature: None,
            demeanor: None,
        }
    }
}

/// Type alias for the store
pub type SheetStore = Store<SheetState>;

/// Get the sheet store from context
pub fn use_sheet_store() -> SheetStore {
    expect_context::<SheetStore>()
}

// ========================
// Section Selectors
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupKind {
    Attributes,
    Abilities,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolKind {
    Disciplines,
    Backgrounds,
    Virtues,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Merits,
    Flaws,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityField {
    Clan,
    Path,
    Nature,
    Demeanor,
}

// ========================
// Store Helper Functions
// ========================

pub fn read_group<R>(store: SheetStore, kind: GroupKind, f: impl FnOnce(&PriorityGroup) -> R) -> R {
    match kind {
        GroupKind::Attributes => f(&*store.attributes().read()),
        GroupKind::Abilities => f(&*store.abilities().read()),
    }
}

pub fn write_group<R>(store: SheetStore, kind: GroupKind, f: impl FnOnce(&mut PriorityGroup) -> R) -> R {
    match kind {
        GroupKind::Attributes => f(&mut *store.attributes().write()),
        GroupKind::Abilities => f(&mut *store.abilities().write()),
    }
}

pub fn read_pool<R>(store: SheetStore, kind: PoolKind, f: impl FnOnce(&PointPool) -> R) -> R {
    match kind {
        PoolKind::Disciplines => f(&*store.disciplines().read()),
        PoolKind::Backgrounds => f(&*store.backgrounds().read()),
        PoolKind::Virtues => f(&*store.virtues().read()),
    }
}

pub fn write_pool<R>(store: SheetStore, kind: PoolKind, f: impl FnOnce(&mut PointPool) -> R) -> R {
    match kind {
        PoolKind::Disciplines => f(&mut *store.disciplines().write()),
        PoolKind::Backgrounds => f(&mut *store.backgrounds().write()),
        PoolKind::Virtues => f(&mut *store.virtues().write()),
    }
}

pub fn read_list<R>(store: SheetStore, kind: ListKind, f: impl FnOnce(&RowList<Option<String>>) -> R) -> R {
    match kind {
        ListKind::Merits => f(&*store.merits().read()),
        ListKind::Flaws => f(&*store.flaws().read()),
    }
}

pub fn write_list<R>(store: SheetStore, kind: ListKind, f: impl FnOnce(&mut RowList<Option<String>>) -> R) -> R {
    match kind {
        ListKind::Merits => f(&mut *store.merits().write()),
        ListKind::Flaws => f(&mut *store.flaws().write()),
    }
}

pub fn identity(store: SheetStore, field: IdentityField) -> Option<String> {
    match field {
        IdentityField::Clan => store.clan().get(),
        IdentityField::Path => store.path().get(),
        IdentityField::Nature => store.nature().get(),
        IdentityField::Demeanor => store.demeanor().get(),
    }
}

pub fn set_identity(store: SheetStore, field: IdentityField, value: Option<String>) {
    match field {
        IdentityField::Clan => store.clan().set(value),
        IdentityField::Path => store.path().set(value),
        IdentityField::Nature => store.nature().set(value),
        IdentityField::Demeanor => store.demeanor().set(value),
    }
}

/// Priority select changed.
pub fn change_priority(store: SheetStore, kind: GroupKind, category: usize, priority: Option<Priority>) {
    write_group(store, kind, |group| group.set_priority(category, priority));
}

/// Link the discipline slots to the current clan.
pub fn link_clan(store: SheetStore, table: &ClanDisciplines, catalog: Option<&Catalog>) {
    let clan = store.clan().get_untracked();
    clan::apply_clan(&mut *store.disciplines().write(), table, catalog, clan.as_deref());
}

/// Select a value in a merit/flaw row.
pub fn select_in_list(store: SheetStore, kind: ListKind, row: RowId, value: Option<String>) {
    write_list(store, kind, |rows| {
        if let Some(entry) = rows.get_mut(row) {
            entry.value = value;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sheet_layout() {
        let sheet = SheetState::new(&SheetConfig::default());
        assert_eq!(sheet.attributes.categories().len(), 3);
        assert_eq!(sheet.abilities.category(2).unwrap().traits().len(), 10);
        assert_eq!(sheet.disciplines.rows().len(), 3);
        assert_eq!(sheet.disciplines.remaining(), 3);
        assert_eq!(sheet.backgrounds.remaining(), 5);
        assert_eq!(sheet.virtues.remaining(), 7);
        assert!(!sheet.virtues.requires_selection());
        assert_eq!(sheet.merits.len(), 1);
    }

    #[test]
    fn test_virtue_slots_follow_config() {
        let config: SheetConfig =
            serde_json::from_str(r#"{"virtues":{"budget":7,"base":1,"dots":5,"slots":1}}"#).unwrap();
        let sheet = SheetState::new(&config);
        assert_eq!(sheet.virtues.rows().len(), 1);
        let first = sheet.virtues.permanent_rows()[0];
        assert_eq!(sheet.virtues.slot(first).unwrap().selection.as_deref(), Some("Conscience"));
        assert_eq!(sheet.virtues.remaining(), 7);
    }

    #[test]
    fn test_attributes_start_at_base() {
        let sheet = SheetState::new(&SheetConfig::default());
        let physical = sheet.attributes.category(0).unwrap();
        assert_eq!(physical.filled(), 3);
        assert_eq!(sheet.attributes.remaining(0), 0);
    }

    #[test]
    fn test_dynamic_discipline_scenario() {
        let mut sheet = SheetState::new(&SheetConfig::default());
        let pool = &mut sheet.disciplines;
        let slots = pool.permanent_rows();
        pool.select(slots[0], Some("auspex".into())).unwrap();
        pool.select(slots[1], Some("celerity".into())).unwrap();
        pool.attempt_click(slots[0], 1).unwrap();
        let freed = pool.add_row();
        pool.select(freed, Some("dominate".into())).unwrap();
        pool.attempt_click(freed, 0).unwrap();
        assert_eq!(pool.remaining(), 0);

        let extra = pool.add_row();
        pool.select(extra, Some("obfuscate".into())).unwrap();
        assert!(pool.attempt_click(extra, 0).is_err());

        pool.remove_row(freed).unwrap();
        assert_eq!(pool.remaining(), 1);
        assert_eq!(pool.attempt_click(extra, 0), Ok(1));
    }
}
