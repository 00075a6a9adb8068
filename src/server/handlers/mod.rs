pub mod favorites;
pub mod filter;
pub mod keys;
pub mod page;
pub mod places;
pub mod selection;
