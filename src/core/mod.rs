//! Core module - Business logic
//!
//! Credential resolution lives here; persistence is delegated to the storage
//! layer and terminal interaction to an injectable prompt seam.

pub mod auth;
