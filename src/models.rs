//! Reference Data Models
//!
//! Shapes of the static JSON files the sheet is populated from.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Option cost as written in the data files: usually a number, sometimes a
/// range such as `"1-3"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Points(i32),
    Text(String),
}

impl Cost {
    /// Numeric value when the cost is a fixed amount.
    pub fn points(&self) -> Option<i32> {
        match self {
            Cost::Points(points) => Some(*points),
            Cost::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Points(points) => write!(f, "{points}"),
            Cost::Text(text) => f.write_str(text),
        }
    }
}

/// One record of a flat list (`disciplines.json`, `backgrounds.json`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatEntry {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dots: Option<u8>,
}

/// One labelled group of a grouped list (`merits.json`, `clan_bloodline.json`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    #[serde(rename = "groupLabel")]
    pub group_label: String,
    pub options: Vec<FlatEntry>,
}

/// `clan_bloodline_disciplines.json`: a single-element array wrapping the
/// clan → discipline map.
pub type WrappedClanMap = Vec<HashMap<String, Vec<String>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_entry_optional_metadata() {
        let entries: Vec<FlatEntry> = serde_json::from_str(
            r#"[
                {"value": "allies", "label": "Allies"},
                {"value": "generation", "label": "Generation", "dots": 5, "cost": 1}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries[0].cost, None);
        assert_eq!(entries[1].dots, Some(5));
        assert_eq!(entries[1].cost, Some(Cost::Points(1)));
    }

    #[test]
    fn test_group_entry_label_key() {
        let groups: Vec<GroupEntry> = serde_json::from_str(
            r#"[{"groupLabel": "Physical", "options": [{"value": "acute-sense", "label": "Acute Sense", "cost": 1}]}]"#,
        )
        .unwrap();
        assert_eq!(groups[0].group_label, "Physical");
        assert_eq!(groups[0].options[0].value, "acute-sense");
    }

    #[test]
    fn test_cost_points() {
        assert_eq!(Cost::Points(3).points(), Some(3));
        assert_eq!(Cost::Text("2".into()).points(), Some(2));
        assert_eq!(Cost::Text("1-3".into()).points(), None);
        assert_eq!(Cost::Text("1-3".into()).to_string(), "1-3");
    }
}
