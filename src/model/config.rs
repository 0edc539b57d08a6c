use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::list::IdPolicy;

/// Configuration from shoplist.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default)]
    pub id_policy: IdPolicy,
    /// Maximum number of undo steps kept
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
    /// Items present when the app starts
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            id_policy: IdPolicy::default(),
            undo_limit: default_undo_limit(),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_undo_limit() -> usize {
    100
}

fn default_quantity() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row while nothing else is displayed
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides: theme field name -> "#RRGGBB"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}
