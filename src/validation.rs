//! Input validation for era generation.
//!
//! Checks identifier integrity of the three pools before scheduling.
//! Detects:
//! - Blank IDs
//! - Duplicate IDs within a pool
//!
//! A duplicate spirit or board ID would let the round-robin pair an entity
//! with itself, so duplicates are rejected rather than deduplicated.
//! Size and divisibility rules are enforced by the engine itself.

use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entries of the same pool share an ID.
    DuplicateId,
    /// An ID is empty or whitespace only.
    BlankId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the spirit, board, and layout pools.
///
/// Checks, per pool:
/// 1. No blank IDs
/// 2. No duplicate IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster<S: AsRef<str>>(
    spirits: &[S],
    boards: &[S],
    layouts: &[S],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_pool("spirit", spirits, &mut errors);
    check_pool("board", boards, &mut errors);
    check_pool("layout", layouts, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_pool<S: AsRef<str>>(label: &str, ids: &[S], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for (pos, id) in ids.iter().enumerate() {
        let id = id.as_ref();
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                format!("Blank {label} ID at position {}", pos + 1),
            ));
            continue;
        }
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label} ID: {id}"),
            ));
        }
    }
}
