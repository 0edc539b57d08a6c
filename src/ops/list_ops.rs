use serde::{Deserialize, Serialize};

use crate::model::{ItemId, ShoppingItem, ShoppingList};

/// Quantity used when an edited quantity does not parse
pub const FALLBACK_QUANTITY: i32 = 1;

/// A user intent against the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Append a new item from the add dialog's draft text
    Add { name: String, quantity: String },
    /// Open the inline editor on one item
    BeginEdit { id: ItemId },
    /// Save the inline editor's text into the item and close the editor
    CommitEdit {
        id: ItemId,
        name: String,
        quantity: String,
    },
    /// Close the inline editor without saving
    CancelEdit,
    /// Remove the first item equal to this one. Under the list-length id
    /// policy ids can repeat, so name and quantity are part of the match.
    Delete {
        id: ItemId,
        name: String,
        quantity: i32,
    },
}

impl Action {
    /// Delete exactly `item`
    pub fn delete(item: &ShoppingItem) -> Self {
        Action::Delete {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
        }
    }

    /// Whether applying this action changes the items (as opposed to only
    /// moving the editor around)
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Action::Add { .. } | Action::CommitEdit { .. } | Action::Delete { .. }
        )
    }

    /// Short name used in logs and error reports
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::BeginEdit { .. } => "begin_edit",
            Action::CommitEdit { .. } => "commit_edit",
            Action::CancelEdit => "cancel_edit",
            Action::Delete { .. } => "delete",
        }
    }
}

/// Error type for list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("item name is blank")]
    BlankName,
    #[error("item quantity is blank")]
    BlankQuantity,
    #[error("quantity is not a whole number: {0:?}")]
    InvalidQuantity(String),
    #[error("no item with id {0}")]
    NotFound(ItemId),
    #[error("no item {id} {name:?} with quantity {quantity}")]
    NoSuchItem {
        id: ItemId,
        name: String,
        quantity: i32,
    },
}

/// Apply an action to a list, returning the resulting list.
///
/// The input is never modified; on error the caller keeps the state it had.
pub fn apply(list: &ShoppingList, action: &Action) -> Result<ShoppingList, ListError> {
    let mut next = list.clone();
    match action {
        Action::Add { name, quantity } => {
            let (name, quantity) = validate_new_item(name, quantity)?;
            next.push_new(name, quantity);
        }
        Action::BeginEdit { id } => {
            if next.find(*id).is_none() {
                return Err(ListError::NotFound(*id));
            }
            next.set_editing(Some(*id));
        }
        Action::CommitEdit { id, name, quantity } => {
            next.set_editing(None);
            let item = next.find_mut(*id).ok_or(ListError::NotFound(*id))?;
            item.name = name.trim().to_string();
            item.quantity = quantity_or_fallback(quantity);
        }
        Action::CancelEdit => next.set_editing(None),
        Action::Delete { id, name, quantity } => {
            let index = next
                .items()
                .iter()
                .position(|item| {
                    item.id == *id && item.name == *name && item.quantity == *quantity
                })
                .ok_or_else(|| ListError::NoSuchItem {
                    id: *id,
                    name: name.clone(),
                    quantity: *quantity,
                })?;
            next.remove_at(index);
        }
    }
    Ok(next)
}

/// Check the add dialog's drafts and turn them into a name and quantity.
pub fn validate_new_item(name: &str, quantity: &str) -> Result<(String, i32), ListError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ListError::BlankName);
    }
    let quantity = quantity.trim();
    if quantity.is_empty() {
        return Err(ListError::BlankQuantity);
    }
    let parsed = quantity
        .parse::<i32>()
        .map_err(|_| ListError::InvalidQuantity(quantity.to_string()))?;
    Ok((name.to_string(), parsed))
}

/// Parse edited quantity text, falling back to [`FALLBACK_QUANTITY`].
pub fn quantity_or_fallback(text: &str) -> i32 {
    text.trim().parse().unwrap_or(FALLBACK_QUANTITY)
}
