//! Option Catalogs
//!
//! In-memory form of a populated dropdown: plain or grouped choices with
//! the metadata other parts of the sheet read back (merit/flaw cost).

use crate::models::{Cost, FlatEntry, GroupEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub cost: Option<Cost>,
    pub dots: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceGroup {
    pub label: String,
    pub choices: Vec<Choice>,
}

/// Turns a data record into a displayed choice.
pub type Formatter = fn(&FlatEntry) -> Choice;

/// Label as written.
pub fn plain(entry: &FlatEntry) -> Choice {
    Choice {
        value: entry.value.clone(),
        label: entry.label.clone(),
        cost: entry.cost.clone(),
        dots: entry.dots,
    }
}

/// Label followed by the cost, e.g. `Acute Sense (1)`.
pub fn with_cost(entry: &FlatEntry) -> Choice {
    let mut choice = plain(entry);
    if let Some(cost) = &entry.cost {
        choice.label = format!("{} ({})", entry.label, cost);
    }
    choice
}

#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Flat(Vec<Choice>),
    Grouped(Vec<ChoiceGroup>),
}

impl Catalog {
    pub fn from_flat(entries: &[FlatEntry]) -> Self {
        Catalog::Flat(entries.iter().map(plain).collect())
    }

    pub fn from_grouped(groups: &[GroupEntry], formatter: Formatter) -> Self {
        Catalog::Grouped(
            groups
                .iter()
                .map(|group| ChoiceGroup {
                    label: group.group_label.clone(),
                    choices: group.options.iter().map(formatter).collect(),
                })
                .collect(),
        )
    }

    /// Every choice, groups flattened in order.
    pub fn choices(&self) -> Box<dyn Iterator<Item = &Choice> + '_> {
        match self {
            Catalog::Flat(choices) => Box::new(choices.iter()),
            Catalog::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.choices.iter())),
        }
    }

    pub fn find(&self, value: &str) -> Option<&Choice> {
        self.choices().find(|choice| choice.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    pub fn cost_of(&self, value: &str) -> Option<i32> {
        self.find(value)?.cost.as_ref()?.points()
    }

    pub fn len(&self) -> usize {
        self.choices().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load state of one dropdown source.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Population {
    #[default]
    Loading,
    Ready(Catalog),
    Failed,
}

impl Population {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Population::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }
}
