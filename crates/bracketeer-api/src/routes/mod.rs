//! Route modules.

pub mod convert;
pub mod health;
pub mod info;
