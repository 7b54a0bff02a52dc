mod errors;
mod lending_service;
pub mod policy;

pub use errors::{LendingError, Result};
pub use lending_service::{
    ServiceDependencies, add_item, add_member, borrow_item, list_active_loans,
    list_available_items, return_item,
};
