//! Priority Groups
//!
//! Attribute and ability categories draw their budget from a priority
//! label. A label belongs to at most one category of a group at a time;
//! assigning it elsewhere evicts the previous holder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ClickRejected;
use crate::track::{Click, DotTrack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Primary,
    Secondary,
    Tertiary,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Primary, Priority::Secondary, Priority::Tertiary];

    /// Form value, as used by the priority selects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Primary => "primary",
            Priority::Secondary => "secondary",
            Priority::Tertiary => "tertiary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Primary => "Primary",
            Priority::Secondary => "Secondary",
            Priority::Tertiary => "Tertiary",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Priority::Primary),
            "secondary" => Ok(Priority::Secondary),
            "tertiary" => Ok(Priority::Tertiary),
            _ => Err(()),
        }
    }
}

/// Points granted per priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTable {
    pub primary: i32,
    pub secondary: i32,
    pub tertiary: i32,
}

impl PriorityTable {
    pub const ATTRIBUTES: PriorityTable = PriorityTable { primary: 7, secondary: 5, tertiary: 3 };
    pub const ABILITIES: PriorityTable = PriorityTable { primary: 13, secondary: 9, tertiary: 5 };

    /// Budget for a priority; no priority means no points.
    pub fn points(&self, priority: Option<Priority>) -> i32 {
        match priority {
            None => 0,
            Some(Priority::Primary) => self.primary,
            Some(Priority::Secondary) => self.secondary,
            Some(Priority::Tertiary) => self.tertiary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trait {
    pub name: String,
    pub track: DotTrack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    priority: Option<Priority>,
    traits: Vec<Trait>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    pub fn filled(&self) -> i32 {
        self.traits.iter().map(|t| i32::from(t.track.score())).sum()
    }

    pub fn spent(&self) -> i32 {
        self.traits.iter().map(|t| t.track.spent()).sum()
    }

    fn reset(&mut self) {
        for t in &mut self.traits {
            t.track.reset();
        }
    }
}

/// Sibling categories competing for priorities.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityGroup {
    table: PriorityTable,
    len: u8,
    base: u8,
    max_score: Option<u8>,
    categories: Vec<Category>,
}

impl PriorityGroup {
    pub fn new(table: PriorityTable, len: u8, base: u8, max_score: Option<u8>) -> Self {
        Self {
            table,
            len,
            base,
            max_score,
            categories: Vec::new(),
        }
    }

    pub fn with_category<S: AsRef<str>>(mut self, name: &str, traits: &[S]) -> Self {
        let traits = traits
            .iter()
            .map(|t| Trait {
                name: t.as_ref().to_string(),
                track: DotTrack::new(self.len, self.base),
            })
            .collect();
        self.categories.push(Category {
            name: name.to_string(),
            priority: None,
            traits,
        });
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn budget(&self, category: usize) -> i32 {
        let priority = self.categories.get(category).and_then(|c| c.priority);
        self.table.points(priority)
    }

    pub fn remaining(&self, category: usize) -> i32 {
        let spent = self.categories.get(category).map_or(0, Category::spent);
        self.budget(category) - spent
    }

    /// Assign (or clear) a category's priority.
    ///
    /// The category's dots always reset. Any sibling already holding the
    /// priority loses it and resets too; their indices are returned.
    pub fn set_priority(&mut self, category: usize, priority: Option<Priority>) -> Vec<usize> {
        let Some(target) = self.categories.get_mut(category) else {
            debug!(category, "priority change for unknown category ignored");
            return Vec::new();
        };
        target.reset();
        target.priority = priority;

        let mut evicted = Vec::new();
        if let Some(priority) = priority {
            for (index, other) in self.categories.iter_mut().enumerate() {
                if index != category && other.priority == Some(priority) {
                    other.priority = None;
                    other.reset();
                    evicted.push(index);
                }
            }
        }
        let to = &self.categories[category].name;
        for &index in &evicted {
            let from = &self.categories[index].name;
            info!(%from, %to, ?priority, "priority reassigned");
        }
        evicted
    }

    /// Try to move one trait's score according to a click on cell `index`.
    pub fn attempt_click(
        &mut self,
        category: usize,
        trait_index: usize,
        index: usize,
    ) -> Result<u8, ClickRejected> {
        match self.plan_click(category, trait_index, index) {
            Ok(click) => {
                self.categories[category].traits[trait_index].track.apply(click);
                debug!(category, trait_index, to = click.to, remaining = self.remaining(category), "dots updated");
                Ok(click.to)
            }
            Err(err) => {
                warn!(category, trait_index, index, %err, "action denied");
                Err(err)
            }
        }
    }

    fn plan_click(&self, category: usize, trait_index: usize, index: usize) -> Result<Click, ClickRejected> {
        let cat = self.categories.get(category).ok_or(ClickRejected::UnknownTarget)?;
        let track = cat
            .traits
            .get(trait_index)
            .map(|t| t.track)
            .ok_or(ClickRejected::UnknownTarget)?;
        let click = track.click(index)?;
        if !click.is_spend() {
            return Ok(click);
        }
        if cat.priority.is_none() {
            return Err(ClickRejected::NoPriority);
        }
        if let Some(max) = self.max_score {
            if click.to > max {
                return Err(ClickRejected::ExceedsCeiling { target: click.to, max });
            }
        }
        let remaining = self.remaining(category);
        if click.cost() > remaining {
            return Err(ClickRejected::InsufficientPoints {
                cost: click.cost(),
                remaining,
            });
        }
        Ok(click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> PriorityGroup {
        PriorityGroup::new(PriorityTable::ATTRIBUTES, 5, 1, Some(5))
            .with_category("Physical", &["Strength", "Dexterity", "Stamina"])
            .with_category("Social", &["Charisma", "Manipulation", "Appearance"])
            .with_category("Mental", &["Perception", "Intelligence", "Wits"])
    }

    fn abilities() -> PriorityGroup {
        PriorityGroup::new(PriorityTable::ABILITIES, 5, 0, Some(3))
            .with_category("Talents", &["Alertness", "Athletics"])
            .with_category("Skills", &["Crafts", "Drive"])
            .with_category("Knowledges", &["Academics", "Computer"])
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("primary".parse::<Priority>(), Ok(Priority::Primary));
        assert_eq!("tertiary".parse::<Priority>(), Ok(Priority::Tertiary));
        assert!("".parse::<Priority>().is_err());
        assert_eq!(Priority::Secondary.to_string(), "secondary");
    }

    #[test]
    fn test_table_points() {
        assert_eq!(PriorityTable::ATTRIBUTES.points(None), 0);
        assert_eq!(PriorityTable::ATTRIBUTES.points(Some(Priority::Primary)), 7);
        assert_eq!(PriorityTable::ABILITIES.points(Some(Priority::Tertiary)), 5);
    }

    #[test]
    fn test_spend_with_primary() {
        let mut group = attributes();
        group.set_priority(0, Some(Priority::Primary));
        assert_eq!(group.remaining(0), 7);

        assert_eq!(group.attempt_click(0, 0, 4), Ok(5));
        assert_eq!(group.remaining(0), 3);
    }

    #[test]
    fn test_insufficient_points() {
        let mut group = attributes();
        group.set_priority(2, Some(Priority::Tertiary));
        group.attempt_click(2, 0, 2).unwrap();
        assert_eq!(group.remaining(2), 1);

        let before = group.clone();
        assert_eq!(
            group.attempt_click(2, 1, 4),
            Err(ClickRejected::InsufficientPoints { cost: 4, remaining: 1 })
        );
        assert_eq!(group, before);
    }

    #[test]
    fn test_no_priority_rejects_spend() {
        let mut group = attributes();
        assert_eq!(group.attempt_click(1, 0, 1), Err(ClickRejected::NoPriority));
        assert_eq!(group.remaining(1), 0);
    }

    #[test]
    fn test_base_dot_untouchable() {
        let mut group = attributes();
        group.set_priority(0, Some(Priority::Primary));
        assert!(matches!(group.attempt_click(0, 0, 0), Err(ClickRejected::BelowBase { .. })));
        assert_eq!(group.category(0).unwrap().traits()[0].track.score(), 1);
    }

    #[test]
    fn test_ceiling() {
        let mut group = abilities();
        group.set_priority(0, Some(Priority::Primary));
        assert_eq!(
            group.attempt_click(0, 0, 3),
            Err(ClickRejected::ExceedsCeiling { target: 4, max: 3 })
        );
        assert_eq!(group.attempt_click(0, 0, 2), Ok(3));
        assert_eq!(group.remaining(0), 10);
    }

    #[test]
    fn test_eviction() {
        let mut group = attributes();
        group.set_priority(1, Some(Priority::Primary));
        group.attempt_click(1, 0, 3).unwrap();

        let evicted = group.set_priority(0, Some(Priority::Primary));
        assert_eq!(evicted, vec![1]);
        assert_eq!(group.category(1).unwrap().priority(), None);
        assert_eq!(group.category(1).unwrap().traits()[0].track.score(), 1);
        assert_eq!(group.budget(0), 7);
        assert_eq!(group.budget(1), 0);
    }

    #[test]
    fn test_change_resets_own_dots() {
        let mut group = attributes();
        group.set_priority(0, Some(Priority::Primary));
        group.attempt_click(0, 2, 2).unwrap();
        group.set_priority(0, Some(Priority::Secondary));
        assert_eq!(group.category(0).unwrap().spent(), 0);
        assert_eq!(group.remaining(0), 5);
    }

    #[test]
    fn test_priorities_stay_unique() {
        let mut group = attributes();
        let steps = [
            (0, Some(Priority::Primary)),
            (1, Some(Priority::Secondary)),
            (2, Some(Priority::Primary)),
            (0, Some(Priority::Secondary)),
            (1, None),
            (1, Some(Priority::Tertiary)),
            (2, Some(Priority::Tertiary)),
        ];
        for (category, priority) in steps {
            group.set_priority(category, priority);
            let held: Vec<_> = group
                .categories()
                .iter()
                .filter_map(Category::priority)
                .collect();
            let mut unique = held.clone();
            unique.sort_by_key(|p| p.as_str());
            unique.dedup();
            assert_eq!(held.len(), unique.len(), "duplicate priority in {held:?}");
        }
    }

    #[test]
    fn test_unknown_targets() {
        let mut group = attributes();
        assert_eq!(group.attempt_click(7, 0, 0), Err(ClickRejected::UnknownTarget));
        assert_eq!(group.attempt_click(0, 9, 0), Err(ClickRejected::UnknownTarget));
        assert!(group.set_priority(7, Some(Priority::Primary)).is_empty());
    }
}
