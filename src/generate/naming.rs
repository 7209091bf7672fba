// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Public accessor name resolution.
//!
//! Derives the public property identifier from a private field identifier.
//! Three prefix rules are tried in order, first match wins:
//!
//! 1. lowercase first character → uppercase it (`speed` → `Speed`)
//! 2. leading `_` → drop it, uppercase what follows (`_speed` → `Speed`)
//! 3. leading `m_` → drop it, uppercase what follows (`m_speed`; shadowed
//!    by rule 1 for ASCII input, since `m` is itself lowercase)
//!
//! A name matching none of the rules resolves to `None` and the field is
//! skipped. A name that is nothing but a matched prefix is malformed and
//! fails the pass.

use crate::error::{Error, Result};

/// Resolve the public accessor identifier for a private field identifier.
///
/// Returns `Ok(None)` when no naming rule applies; such fields produce no
/// property. With `convert_snake_case`, a resolved name additionally has
/// each `_`- or space-separated segment uppercased and the separators
/// removed (`first_name` → `FirstName`).
///
/// # Errors
///
/// [`Error::NameTooShort`] when a prefix rule matches but no identifier
/// characters remain after the prefix.
pub fn resolve_public_name(
    private_name: &str,
    convert_snake_case: bool,
) -> Result<Option<String>> {
    let Some(resolved) = strip_private_prefix(private_name)? else {
        return Ok(None);
    };

    if convert_snake_case {
        Ok(Some(to_camel_case(&resolved)))
    } else {
        Ok(Some(resolved))
    }
}

/// Apply the ordered prefix rules.
fn strip_private_prefix(name: &str) -> Result<Option<String>> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Ok(None);
    };

    if first.is_lowercase() {
        return Ok(Some(uppercase_first(first, chars)));
    }

    if first == '_' {
        return match chars.next() {
            Some(next) => Ok(Some(uppercase_first(next, chars))),
            None => Err(Error::NameTooShort {
                name: name.to_string(),
                prefix: "_",
            }),
        };
    }

    if let Some(rest) = name.strip_prefix("m_") {
        let mut rest_chars = rest.chars();
        return match rest_chars.next() {
            Some(next) => Ok(Some(uppercase_first(next, rest_chars))),
            None => Err(Error::NameTooShort {
                name: name.to_string(),
                prefix: "m_",
            }),
        };
    }

    Ok(None)
}

/// Concatenate the segments of a `_`/space-separated name, uppercasing the
/// first character of each segment and leaving the remainder untouched.
/// Empty segments from repeated delimiters contribute nothing.
fn to_camel_case(name: &str) -> String {
    name.split(['_', ' '])
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => uppercase_first(first, chars),
            }
        })
        .collect()
}

fn uppercase_first(first: char, rest: std::str::Chars<'_>) -> String {
    first.to_uppercase().chain(rest).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_name_uppercases_first_character() {
        assert_eq!(resolve_public_name("id", false).unwrap().unwrap(), "Id");
        assert_eq!(resolve_public_name("name", false).unwrap().unwrap(), "Name");
        assert_eq!(
            resolve_public_name("speedLimit", false).unwrap().unwrap(),
            "SpeedLimit"
        );
    }

    #[test]
    fn single_lowercase_character_resolves() {
        assert_eq!(resolve_public_name("a", false).unwrap().unwrap(), "A");
    }

    #[test]
    fn underscore_prefix_is_dropped() {
        assert_eq!(resolve_public_name("_x", false).unwrap().unwrap(), "X");
        assert_eq!(
            resolve_public_name("_value", false).unwrap().unwrap(),
            "Value"
        );
    }

    #[test]
    fn double_underscore_keeps_inner_underscore() {
        assert_eq!(resolve_public_name("__x", false).unwrap().unwrap(), "_x");
    }

    #[test]
    fn m_prefix_is_shadowed_by_lowercase_rule() {
        // `m` is itself lowercase, so rule 1 claims the name first.
        assert_eq!(resolve_public_name("m_y", false).unwrap().unwrap(), "M_y");
        assert_eq!(
            resolve_public_name("m_count", false).unwrap().unwrap(),
            "M_count"
        );
    }

    #[test]
    fn unmatched_names_resolve_to_none() {
        assert_eq!(resolve_public_name("Upper", false).unwrap(), None);
        assert_eq!(resolve_public_name("X", false).unwrap(), None);
        assert_eq!(resolve_public_name("9lives", false).unwrap(), None);
        assert_eq!(resolve_public_name("", false).unwrap(), None);
    }

    #[test]
    fn bare_underscore_is_malformed() {
        let err = resolve_public_name("_", false).unwrap_err();
        assert_eq!(
            err,
            Error::NameTooShort {
                name: "_".to_string(),
                prefix: "_",
            }
        );
    }

    #[test]
    fn snake_case_conversion() {
        assert_eq!(
            resolve_public_name("first_name", true).unwrap().unwrap(),
            "FirstName"
        );
        assert_eq!(
            resolve_public_name("first_name", false).unwrap().unwrap(),
            "First_name"
        );
        assert_eq!(
            resolve_public_name("_last_name", true).unwrap().unwrap(),
            "LastName"
        );
    }

    #[test]
    fn snake_case_discards_empty_segments() {
        assert_eq!(resolve_public_name("a__b", true).unwrap().unwrap(), "AB");
        assert_eq!(
            resolve_public_name("trailing_", true).unwrap().unwrap(),
            "Trailing"
        );
    }

    #[test]
    fn snake_case_splits_on_spaces_too() {
        assert_eq!(
            resolve_public_name("first name", true).unwrap().unwrap(),
            "FirstName"
        );
    }

    #[test]
    fn snake_case_leaves_segment_remainders_untouched() {
        assert_eq!(
            resolve_public_name("first_nAME", true).unwrap().unwrap(),
            "FirstNAME"
        );
    }

    #[test]
    fn snake_case_is_noop_without_delimiters() {
        assert_eq!(resolve_public_name("id", true).unwrap().unwrap(), "Id");
    }
}
