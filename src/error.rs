// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for the accessor generation pass.
//!
//! Only malformed field names are fatal. Fields that simply match no naming
//! rule are skipped without diagnostic, and output-level problems (name
//! collisions, substitution artifacts) are left for the host compiler.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a generation pass.
///
/// A pass has no partial-success mode: the first error stops the whole
/// batch and no companion sources are returned for that invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field name matched a prefix rule but has no characters left after
    /// the prefix (for example a field named `_` or `m_`).
    #[error("field name `{name}` has no identifier characters after its `{prefix}` prefix")]
    NameTooShort {
        /// The offending field name as declared.
        name: String,
        /// The prefix rule that matched.
        prefix: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_too_short_display() {
        let err = Error::NameTooShort {
            name: "_".to_string(),
            prefix: "_",
        };
        assert_eq!(
            err.to_string(),
            "field name `_` has no identifier characters after its `_` prefix"
        );
    }
}
