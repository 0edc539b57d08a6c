use serde::{Deserialize, Serialize};

use super::config::ListConfig;
use super::item::{ItemId, ShoppingItem};

/// How ids are handed out to newly added items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// A counter that only ever grows, independent of the list length
    #[default]
    Monotonic,
    /// `len + 1`. Collides with a surviving id once anything but the last
    /// item has been deleted.
    ListLength,
}

/// The whole application state: the ordered items and which one (if any)
/// has its inline editor open.
///
/// Fields are private so that every change goes through
/// [`crate::ops::list_ops::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    editing: Option<ItemId>,
    /// Highest id handed out so far (monotonic policy only)
    last_id: u32,
    id_policy: IdPolicy,
}

impl ShoppingList {
    pub fn new(id_policy: IdPolicy) -> Self {
        ShoppingList {
            id_policy,
            ..Default::default()
        }
    }

    /// Build a list from existing items. The id counter starts above the
    /// largest id present.
    pub fn from_items(items: Vec<ShoppingItem>, id_policy: IdPolicy) -> Self {
        let last_id = items.iter().map(|i| i.id.0).max().unwrap_or(0);
        ShoppingList {
            items,
            editing: None,
            last_id,
            id_policy,
        }
    }

    /// Build the starting list from the `[list]` config section.
    /// Seed items get ids 1..=n in file order.
    pub fn from_config(config: &ListConfig) -> Self {
        let items = config
            .items
            .iter()
            .zip(1u32..)
            .map(|(seed, id)| ShoppingItem::new(ItemId(id), seed.name.trim(), seed.quantity))
            .collect();
        Self::from_items(items, config.id_policy)
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    /// Id of the item whose editor is open
    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing == Some(id)
    }

    /// First item with the given id
    pub fn find(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Index of the first item with the given id
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Id the next added item will receive. Does not reserve it.
    pub fn peek_next_id(&self) -> ItemId {
        match self.id_policy {
            IdPolicy::Monotonic => ItemId(self.last_id.saturating_add(1)),
            IdPolicy::ListLength => {
                let len = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
                ItemId(len.saturating_add(1))
            }
        }
    }

    pub(crate) fn push_new(&mut self, name: String, quantity: i32) -> ItemId {
        let id = self.peek_next_id();
        self.last_id = self.last_id.max(id.0);
        self.items.push(ShoppingItem::new(id, name, quantity));
        id
    }

    pub(crate) fn find_mut(&mut self, id: ItemId) -> Option<&mut ShoppingItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> ShoppingItem {
        let item = self.items.remove(index);
        if self.editing == Some(item.id) {
            self.editing = None;
        }
        item
    }

    pub(crate) fn set_editing(&mut self, editing: Option<ItemId>) {
        self.editing = editing;
    }
}
