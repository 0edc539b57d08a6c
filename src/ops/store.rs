use std::collections::VecDeque;

use crate::model::ShoppingList;

use super::list_ops::{Action, ListError, apply};

type Listener = Box<dyn FnMut(&ShoppingList)>;

/// Owns the current list, applies actions to it, and tells subscribers
/// about every change.
pub struct Store {
    state: ShoppingList,
    listeners: Vec<Listener>,
    undo_stack: VecDeque<ShoppingList>,
    redo_stack: Vec<ShoppingList>,
    undo_limit: usize,
}

impl Store {
    pub fn new(state: ShoppingList, undo_limit: usize) -> Self {
        Store {
            state,
            listeners: Vec::new(),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            undo_limit,
        }
    }

    pub fn state(&self) -> &ShoppingList {
        &self.state
    }

    /// Register a callback run after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(&ShoppingList) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply `action`. On error the state is left as it was and no
    /// subscriber is called.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), ListError> {
        let next = match apply(&self.state, action) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(action = action.name(), error = %e, "action rejected");
                return Err(e);
            }
        };

        if action.is_undoable() {
            let mut previous = std::mem::replace(&mut self.state, next);
            previous.set_editing(None);
            self.push_undo(previous);
            self.redo_stack.clear();
        } else {
            self.state = next;
        }

        tracing::info!(
            action = action.name(),
            items = self.state.len(),
            editing = ?self.state.editing(),
            "action applied"
        );
        self.notify();
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Restore the state before the last item change. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };
        let mut current = std::mem::replace(&mut self.state, previous);
        current.set_editing(None);
        self.redo_stack.push(current);
        tracing::info!(items = self.state.len(), "undo");
        self.notify();
        true
    }

    /// Re-apply the last undone change. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let mut current = std::mem::replace(&mut self.state, next);
        current.set_editing(None);
        self.push_undo(current);
        tracing::info!(items = self.state.len(), "redo");
        self.notify();
        true
    }

    fn push_undo(&mut self, state: ShoppingList) {
        if self.undo_limit == 0 {
            return;
        }
        self.undo_stack.push_back(state);
        while self.undo_stack.len() > self.undo_limit {
            self.undo_stack.pop_front();
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::model::{IdPolicy, ItemId, ShoppingItem};

    fn store() -> Store {
        let list = ShoppingList::from_items(
            vec![
                ShoppingItem::new(ItemId(1), "Milk", 2),
                ShoppingItem::new(ItemId(2), "Eggs", 12),
            ],
            IdPolicy::Monotonic,
        );
        Store::new(list, 100)
    }

    fn names(store: &Store) -> Vec<String> {
        store.state().items().iter().map(|i| i.name.clone()).collect()
    }

    fn add(name: &str) -> Action {
        Action::Add {
            name: name.into(),
            quantity: "1".into(),
        }
    }

    #[test]
    fn subscribers_see_each_successful_change() {
        let mut store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |list| sink.borrow_mut().push(list.len()));

        store.dispatch(&add("Tea")).unwrap();
        store.dispatch(&Action::BeginEdit { id: ItemId(1) }).unwrap();
        assert!(store
            .dispatch(&Action::delete(&ShoppingItem::new(ItemId(99), "Tea", 1)))
            .is_err());
        store.undo();

        assert_eq!(*seen.borrow(), vec![3, 3, 2]);
    }

    #[test]
    fn failed_dispatch_keeps_state() {
        let mut store = store();
        let before = store.state().clone();
        let err = store.dispatch(&Action::Add {
            name: "".into(),
            quantity: "1".into(),
        });
        assert_eq!(err, Err(ListError::BlankName));
        assert_eq!(store.state(), &before);
        assert!(!store.can_undo());
    }

    #[test]
    fn undo_restores_deleted_item_in_place() {
        let mut store = store();
        store
            .dispatch(&Action::delete(&ShoppingItem::new(ItemId(1), "Milk", 2)))
            .unwrap();
        assert_eq!(names(&store), vec!["Eggs"]);
        assert!(store.undo());
        assert_eq!(names(&store), vec!["Milk", "Eggs"]);
        assert!(store.redo());
        assert_eq!(names(&store), vec!["Eggs"]);
    }

    #[test]
    fn edit_mode_changes_are_not_undo_steps() {
        let mut store = store();
        store.dispatch(&Action::BeginEdit { id: ItemId(2) }).unwrap();
        store.dispatch(&Action::CancelEdit).unwrap();
        assert!(!store.can_undo());
    }

    #[test]
    fn undo_of_commit_leaves_editor_closed() {
        let mut store = store();
        store.dispatch(&Action::BeginEdit { id: ItemId(1) }).unwrap();
        store
            .dispatch(&Action::CommitEdit {
                id: ItemId(1),
                name: "Oat milk".into(),
                quantity: "1".into(),
            })
            .unwrap();
        assert!(store.undo());
        assert_eq!(names(&store), vec!["Milk", "Eggs"]);
        assert_eq!(store.state().editing(), None);
    }

    #[test]
    fn new_change_clears_redo() {
        let mut store = store();
        store.dispatch(&add("Tea")).unwrap();
        store.undo();
        assert!(store.can_redo());
        store.dispatch(&add("Jam")).unwrap();
        assert!(!store.can_redo());
        assert!(!store.redo());
    }

    #[test]
    fn undo_history_is_bounded() {
        let mut store = Store::new(ShoppingList::default(), 2);
        for name in ["a", "b", "c"] {
            store.dispatch(&add(name)).unwrap();
        }
        assert!(store.undo());
        assert!(store.undo());
        assert!(!store.undo());
        assert_eq!(names(&store), vec!["a"]);
    }

    #[test]
    fn zero_limit_disables_undo() {
        let mut store = Store::new(ShoppingList::default(), 0);
        store.dispatch(&add("a")).unwrap();
        assert!(!store.can_undo());
    }
}
