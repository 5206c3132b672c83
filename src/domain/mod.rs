pub mod entry;
pub mod registry;
pub mod shared;
pub mod transaction;
