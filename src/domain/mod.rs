pub mod commands;
pub mod errors;
pub mod item;
pub mod loan;
pub mod member;
pub mod value_objects;

pub use errors::*;
pub use item::{Item, ItemDetails};
pub use loan::Loan;
pub use member::{Member, MemberStatus};
pub use value_objects::*;
