//! Cart logic, persistence and the menu

pub mod catalog;
pub mod error;
pub mod events;
pub mod order;
pub mod storage;
pub mod types;
