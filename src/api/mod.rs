//! Entry points for the UI layer

pub mod customer;
pub mod newsletter;
