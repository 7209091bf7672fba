// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The accessor generation pass.
//!
//! This module orchestrates the whole transform and delegates each stage to
//! a specialized submodule.
//!
//! # Architecture
//!
//! ```text
//! generate.rs (orchestrator)
//! │
//! ├── scan.rs      → marker detection and configuration extraction
//! ├── namespace.rs → enclosing-namespace resolution
//! ├── naming.rs    → public accessor name resolution
//! └── emit.rs      → companion declaration rendering
//! ```
//!
//! The pass is a pure function over the supplied forest: single-threaded,
//! stateless, and idempotent. Classes are processed in source-tree
//! encounter order with no cross-class interaction; each companion is built
//! in its own buffer. The first error aborts the whole batch and nothing is
//! returned for that invocation.

pub mod emit;
pub mod naming;
pub mod namespace;
pub mod scan;

use tracing::debug;

pub use self::scan::MARKER_NAME;
use crate::error::Result;
use crate::tree::DeclarationTree;

/// One generated companion source unit.
///
/// The host toolchain registers the unit under [`name`](Self::name) and
/// merges [`text`](Self::text) into its compilation; this crate performs no
/// file I/O itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedSource {
    /// Registration key, `{namespace}_{className}.g`.
    pub name: String,
    /// UTF-8 companion declaration text.
    pub text: String,
}

/// Run the accessor generation pass over `trees`.
///
/// Every class carrying the [`MARKER_NAME`] annotation and at least one
/// member yields one companion source unit, in encounter order. Classes
/// with no members are skipped without output.
///
/// # Errors
///
/// [`Error::NameTooShort`](crate::Error::NameTooShort) when any eligible
/// field name is nothing but a matched prefix. There is no partial-success
/// mode: on error, no units are returned for the invocation.
pub fn generate(trees: &[DeclarationTree]) -> Result<Vec<GeneratedSource>> {
    let mut sources = Vec::new();

    for tree in trees {
        for class_id in scan::find_marked_classes(tree) {
            let Some(class) = tree.class(class_id) else {
                continue;
            };
            if class.members.is_empty() {
                debug!(class = %class.identifier, "class has no members; skipping");
                continue;
            }

            let namespace = namespace::resolve_namespace(tree, class_id);
            let convert_snake_case = scan::snake_case_enabled(class);
            let text = emit::emit(class, &namespace, convert_snake_case)?;

            debug!(
                class = %class.identifier,
                namespace = %namespace,
                snake_case = convert_snake_case,
                "generated accessor companion"
            );
            sources.push(GeneratedSource {
                name: format!("{namespace}_{}.g", class.identifier),
                text,
            });
        }
    }

    Ok(sources)
}
