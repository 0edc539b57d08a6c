pub mod list_ops;
pub mod store;

pub use list_ops::{Action, ListError, apply};
pub use store::Store;
