// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker annotation scanning.
//!
//! Finds the class declarations eligible for accessor generation and reads
//! the marker's configuration argument. Matching is an exact, case-sensitive
//! comparison of annotation name tokens against [`MARKER_NAME`]; no alias or
//! import resolution is attempted.

use crate::tree::{ClassDecl, DeclarationTree, NodeId};

/// Simple name of the marker annotation.
pub const MARKER_NAME: &str = "GenerateAccessors";

/// All class nodes carrying the marker annotation, in encounter order.
#[must_use]
pub fn find_marked_classes(tree: &DeclarationTree) -> Vec<NodeId> {
    tree.classes()
        .filter(|&id| {
            tree.class(id)
                .is_some_and(|class| class.annotation(MARKER_NAME).is_some())
        })
        .collect()
}

/// Whether the marker on `class` enables snake-case conversion.
///
/// Enabled only when the first marker annotation has exactly one argument
/// whose literal text is the token `true`. Any other shape — no arguments,
/// several arguments, or an expression that merely evaluates to true —
/// reads as disabled. The comparison is textual by design; see the crate
/// documentation for the implications.
#[must_use]
pub fn snake_case_enabled(class: &ClassDecl) -> bool {
    class
        .annotation(MARKER_NAME)
        .is_some_and(|marker| marker.arguments.len() == 1 && marker.arguments[0] == "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Annotation;

    fn marked(argument: Option<&str>) -> ClassDecl {
        let mut annotation = Annotation::new(MARKER_NAME);
        if let Some(argument) = argument {
            annotation = annotation.with_argument(argument);
        }
        ClassDecl::new("Demo").with_annotation(annotation)
    }

    #[test]
    fn unmarked_classes_are_not_selected() {
        let mut tree = DeclarationTree::new();
        tree.add_class(None, ClassDecl::new("Plain"));
        tree.add_class(
            None,
            ClassDecl::new("Nearby").with_annotation(Annotation::new("Serializable")),
        );
        assert!(find_marked_classes(&tree).is_empty());
    }

    #[test]
    fn marked_classes_are_selected_in_encounter_order() {
        let mut tree = DeclarationTree::new();
        let ns = tree.add_namespace(None, "App");
        let first = tree.add_class(Some(ns), marked(None));
        tree.add_class(Some(ns), ClassDecl::new("Plain"));
        let second = tree.add_class(None, marked(Some("true")));

        assert_eq!(find_marked_classes(&tree), [first, second]);
    }

    #[test]
    fn marker_name_match_is_case_sensitive() {
        let mut tree = DeclarationTree::new();
        tree.add_class(
            None,
            ClassDecl::new("Demo").with_annotation(Annotation::new("generateaccessors")),
        );
        assert!(find_marked_classes(&tree).is_empty());
    }

    #[test]
    fn nested_marked_classes_are_found() {
        let mut tree = DeclarationTree::new();
        let outer = tree.add_class(None, ClassDecl::new("Outer"));
        let inner = tree.add_class(Some(outer), marked(None));
        assert_eq!(find_marked_classes(&tree), [inner]);
    }

    #[test]
    fn literal_true_enables_snake_case() {
        assert!(snake_case_enabled(&marked(Some("true"))));
    }

    #[test]
    fn missing_argument_reads_as_disabled() {
        assert!(!snake_case_enabled(&marked(None)));
    }

    #[test]
    fn non_literal_argument_reads_as_disabled() {
        assert!(!snake_case_enabled(&marked(Some("false"))));
        assert!(!snake_case_enabled(&marked(Some("True"))));
        assert!(!snake_case_enabled(&marked(Some("SNAKE_CASE_ENABLED"))));
    }

    #[test]
    fn multiple_arguments_read_as_disabled() {
        let class = ClassDecl::new("Demo").with_annotation(
            Annotation::new(MARKER_NAME)
                .with_argument("true")
                .with_argument("true"),
        );
        assert!(!snake_case_enabled(&class));
    }

    #[test]
    fn configuration_comes_from_first_marker() {
        let class = ClassDecl::new("Demo")
            .with_annotation(Annotation::new(MARKER_NAME))
            .with_annotation(Annotation::new(MARKER_NAME).with_argument("true"));
        assert!(!snake_case_enabled(&class));
    }
}
