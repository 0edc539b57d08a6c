use serde::Serialize;

use crate::model::{ItemId, ShoppingItem, ShoppingList};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ItemJson {
    pub id: ItemId,
    pub name: String,
    pub quantity: i32,
    pub editing: bool,
}

#[derive(Debug, Serialize)]
pub struct ListJson {
    pub items: Vec<ItemJson>,
    pub editing: Option<ItemId>,
}

/// One failed action in a `replay --keep-going` run
#[derive(Debug, Serialize)]
pub struct ReplayErrorJson {
    pub index: usize,
    pub action: &'static str,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ReplayJson {
    #[serde(flatten)]
    pub list: ListJson,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReplayErrorJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn item_to_json(list: &ShoppingList, item: &ShoppingItem) -> ItemJson {
    ItemJson {
        id: item.id,
        name: item.name.clone(),
        quantity: item.quantity,
        editing: list.is_editing(item.id),
    }
}

pub fn list_to_json(list: &ShoppingList) -> ListJson {
    ListJson {
        items: list
            .items()
            .iter()
            .map(|item| item_to_json(list, item))
            .collect(),
        editing: list.editing(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

pub fn format_item_line(list: &ShoppingList, item: &ShoppingItem) -> String {
    let mut line = format!("  #{}  {}  x{}", item.id, item.name, item.quantity);
    if list.is_editing(item.id) {
        line.push_str("  (editing)");
    }
    line
}

pub fn format_list(list: &ShoppingList) -> Vec<String> {
    if list.is_empty() {
        return vec!["(no items)".to_string()];
    }
    list.items()
        .iter()
        .map(|item| format_item_line(list, item))
        .collect()
}
