//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating the date and currency-code
//! arguments before any credential resolution or network call happens.

use crate::error::CliError;
use chrono::{Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve the date argument to a concrete `YYYY-MM-DD` string.
///
/// The literal "today" (any case) resolves to the current local date. Any
/// other value must parse as `YYYY-MM-DD`.
pub fn resolve_date(input: &str) -> crate::Result<String> {
    if input.eq_ignore_ascii_case("today") {
        return Ok(Local::now().format(DATE_FORMAT).to_string());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        CliError::InvalidArguments(format!(
            "Invalid date format: {}. Use YYYY-MM-DD or 'today'",
            input
        ))
    })?;

    Ok(input.to_string())
}

/// Validate a currency code and normalize it to upper case.
pub fn validate_currency_code(code: &str) -> crate::Result<String> {
    if code.chars().count() != 3 {
        return Err(CliError::InvalidArguments(format!(
            "Invalid currency code: {}. Must be 3 letters",
            code
        ))
        .into());
    }

    Ok(code.to_uppercase())
}
