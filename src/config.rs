//! Sheet Configuration
//!
//! Data locations and point-buy rules. Defaults are the V20 creation rules;
//! a page can override any section through a global `SCHRECKNET_CONFIG`
//! object.

use dot_pool::PriorityTable;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Name of the window property checked for overrides.
pub const CONFIG_GLOBAL: &str = "SCHRECKNET_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub disciplines: String,
    pub backgrounds: String,
    pub merits: String,
    pub flaws: String,
    pub clans: String,
    pub paths: String,
    pub natures: String,
    pub clan_disciplines: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        let path = |file: &str| format!("data/V20/{file}");
        Self {
            disciplines: path("disciplines.json"),
            backgrounds: path("backgrounds.json"),
            merits: path("merits.json"),
            flaws: path("flaws.json"),
            clans: path("clan_bloodline.json"),
            paths: path("paths.json"),
            natures: path("nature_demeanor.json"),
            clan_disciplines: path("clan_bloodline_disciplines.json"),
        }
    }
}

/// Rules for a priority-driven section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityRules {
    pub table: PriorityTable,
    pub base: u8,
    pub max_score: Option<u8>,
    pub dots: u8,
}

/// Rules for a fixed-budget section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolRules {
    pub budget: i32,
    pub base: u8,
    pub dots: u8,
    /// Permanent rows the section starts with. Virtues cap this at the
    /// three named virtues.
    pub slots: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub data: DataPaths,
    pub attributes: PriorityRules,
    pub abilities: PriorityRules,
    pub disciplines: PoolRules,
    pub backgrounds: PoolRules,
    pub virtues: PoolRules,
    pub merit_slots: usize,
    pub flaw_slots: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            attributes: PriorityRules {
                table: PriorityTable::ATTRIBUTES,
                base: 1,
                max_score: Some(5),
                dots: 5,
            },
            abilities: PriorityRules {
                table: PriorityTable::ABILITIES,
                base: 0,
                max_score: Some(3),
                dots: 5,
            },
            disciplines: PoolRules { budget: 3, base: 0, dots: 5, slots: 3 },
            backgrounds: PoolRules { budget: 5, base: 0, dots: 5, slots: 3 },
            virtues: PoolRules { budget: 7, base: 1, dots: 5, slots: 3 },
            merit_slots: 1,
            flaw_slots: 1,
        }
    }
}

impl SheetConfig {
    /// Read overrides from `window.SCHRECKNET_CONFIG`, falling back to the
    /// defaults when absent or malformed.
    pub fn from_page() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => {
                tracing::info!("using sheet configuration from page");
                config
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring malformed {CONFIG_GLOBAL}");
                Self::default()
            }
        }
    }
}
