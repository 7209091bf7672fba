// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enclosing-namespace resolution.
//!
//! Walks a class node's ancestor chain to the nearest namespace node, then
//! keeps prepending directly enclosing namespace names, producing the
//! fully qualified `outer.inner` form. Classes with no enclosing namespace
//! resolve to the empty string (the default namespace).

use crate::tree::{DeclarationTree, NodeId};

/// Resolve the fully qualified namespace enclosing `class_id`.
///
/// Intermediate non-namespace ancestors (enclosing classes) are skipped on
/// the way to the nearest namespace; above it, the walk stops at the first
/// non-namespace parent.
#[must_use]
pub fn resolve_namespace(tree: &DeclarationTree, class_id: NodeId) -> String {
    // Move out of nested classes until a namespace or the root is reached.
    let mut current = tree.parent(class_id);
    while let Some(id) = current {
        if tree.namespace(id).is_some() {
            break;
        }
        current = tree.parent(id);
    }

    let Some(mut namespace_id) = current else {
        return String::new();
    };

    let mut qualified = tree
        .namespace(namespace_id)
        .map(|ns| ns.name.clone())
        .unwrap_or_default();

    // Prepend each directly enclosing namespace.
    while let Some(parent_id) = tree.parent(namespace_id) {
        let Some(parent) = tree.namespace(parent_id) else {
            break;
        };
        qualified = format!("{}.{}", parent.name, qualified);
        namespace_id = parent_id;
    }

    qualified
}
