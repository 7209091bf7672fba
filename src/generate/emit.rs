// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Companion declaration rendering.
//!
//! Builds the textual companion for one matched class: a fixed import
//! header, the enclosing namespace block (when one was resolved), a
//! `public partial class` with one property per eligible field, in
//! field-declaration order.
//!
//! The property declaration reuses the field's textual form with the
//! private identifier substituted by the public one. The substitution is a
//! literal replacement across the whole declaration text, so a type
//! fragment containing the identifier as a substring is rewritten along
//! with it. Generated property names are not checked against existing
//! members; collisions surface downstream in the host compiler.

use tracing::trace;

use super::naming;
use crate::error::Result;
use crate::tree::{ClassDecl, FieldDecl, Member};

/// Render the companion declaration for `class`.
///
/// `namespace` is the fully qualified enclosing namespace, or `""` for the
/// default namespace, in which case no namespace block is emitted.
///
/// # Errors
///
/// Propagates [`Error::NameTooShort`](crate::Error::NameTooShort) from name
/// resolution; no partial companion is produced in that case.
pub fn emit(class: &ClassDecl, namespace: &str, convert_snake_case: bool) -> Result<String> {
    let mut out = String::new();
    out.push_str("\nusing System;\nusing System.Collections.Generic;\n\n");

    if !namespace.is_empty() {
        out.push_str(&format!("namespace {namespace}\n{{\n"));
    }
    out.push_str(&format!(
        "    public partial class {}\n    {{",
        class.identifier
    ));

    for member in &class.members {
        let Member::Field(field) = member else {
            continue;
        };
        if field.is_public() || field.identifier.is_empty() {
            continue;
        }

        match naming::resolve_public_name(&field.identifier, convert_snake_case)? {
            Some(public_name) => append_property(&mut out, field, &public_name),
            None => {
                trace!(
                    class = %class.identifier,
                    field = %field.identifier,
                    "field name matches no naming rule; skipping"
                );
            }
        }
    }

    out.push_str("    }");
    if !namespace.is_empty() {
        out.push_str("\n}");
    }

    Ok(out)
}

/// Append one property block for `field` under its resolved public name.
fn append_property(out: &mut String, field: &FieldDecl, public_name: &str) {
    let declaration = renamed_declaration(field, public_name);
    let getter = format!("get => {};", field.identifier);
    let setter = format!("set => {} = value;", field.identifier);
    out.push_str(&format!(
        "\n        public {declaration}\n        {{\n            {getter}\n            {setter}\n        }}\n"
    ));
}

/// The field's textual declaration with `private` modifiers filtered out,
/// the private identifier replaced by `public_name`, and the trailing
/// statement terminator removed.
fn renamed_declaration(field: &FieldDecl, public_name: &str) -> String {
    let mut declaration = String::new();
    for modifier in field.modifiers.iter().filter(|m| m.as_str() != "private") {
        declaration.push_str(modifier);
        declaration.push(' ');
    }
    declaration.push_str(&format!("{} {};", field.ty, field.identifier));

    let mut renamed = declaration.replace(field.identifier.as_str(), public_name);
    if renamed.ends_with(';') {
        renamed.pop();
    }
    renamed
}
