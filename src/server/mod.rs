//! TCP listener and request routing

pub mod listener;
pub mod router;
