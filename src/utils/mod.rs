//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Input validation and sanitization utilities
pub mod validation;

/// Number and output formatting
pub mod text;

/// Verbose and error logging helpers
pub mod logging;
