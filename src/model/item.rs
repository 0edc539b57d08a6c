use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a shopping item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, quantified entry in the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i32,
}

impl ShoppingItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i32) -> Self {
        ShoppingItem {
            id,
            name: name.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_displays_as_bare_number() {
        assert_eq!(ItemId(7).to_string(), "7");
    }

    #[test]
    fn item_serializes_with_flat_id() {
        let item = ShoppingItem::new(ItemId(3), "Eggs", 12);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Eggs","quantity":12}"#);
    }
}
