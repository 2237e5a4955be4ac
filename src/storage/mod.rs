//! Storage layer for fx-cli
//!
//! Handles the on-disk credential file: a single dotenv-style file under the
//! user's configuration directory, restricted to owner-only permissions where
//! the platform supports that.

use crate::error::StorageError;

pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
