// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration payloads stored in tree nodes.
//!
//! These types are plain data: the front end fills them in, the generation
//! pass only reads them. Builder-style `with_*` methods keep host code and
//! tests terse.

/// A namespace declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamespaceDecl {
    /// Namespace name as written, e.g. `App` or `App.Models` for a
    /// file-scoped declaration.
    pub name: String,
}

impl NamespaceDecl {
    /// Create a namespace declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A class declaration with its annotations and members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDecl {
    /// Class identifier, e.g. `Demo`.
    pub identifier: String,
    /// Annotations attached to the class, in source order.
    pub annotations: Vec<Annotation>,
    /// Member declarations in source order.
    pub members: Vec<Member>,
}

impl ClassDecl {
    /// Create a class declaration with no annotations or members.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            annotations: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Attach an annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a field member.
    #[must_use]
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.members.push(Member::Field(field));
        self
    }

    /// Append a member the generator will not inspect.
    #[must_use]
    pub fn with_opaque_member(mut self, text: impl Into<String>) -> Self {
        self.members.push(Member::Opaque(text.into()));
        self
    }

    /// First annotation whose name token equals `name`, if any.
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }
}

/// One member of a class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Member {
    /// A field declaration.
    Field(FieldDecl),
    /// A member kind the generator does not inspect (method, property,
    /// constructor, ...), kept as the text the front end saw.
    Opaque(String),
}

/// A field declaration: modifier tokens, a lexical type fragment, and a
/// declarator identifier.
///
/// The type fragment is never interpreted; it is carried verbatim into the
/// generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDecl {
    /// Modifier tokens in source order, e.g. `private`, `static`,
    /// `readonly`. A field with no visibility modifier is non-public.
    pub modifiers: Vec<String>,
    /// Lexical type fragment, e.g. `int` or `Dictionary<string, int>`.
    pub ty: String,
    /// Declarator identifier, e.g. `m_count`.
    pub identifier: String,
}

impl FieldDecl {
    /// Create a field declaration with no modifiers.
    pub fn new(ty: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            ty: ty.into(),
            identifier: identifier.into(),
        }
    }

    /// Append one modifier token.
    #[must_use]
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// Whether the field is already declared public.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.modifiers.iter().any(|m| m == "public")
    }
}

/// An annotation attached to a class declaration.
///
/// Arguments are carried as the literal text of each argument expression;
/// the generator compares them textually and never evaluates them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Name token as written at the use site.
    pub name: String,
    /// Literal text of each argument, in order.
    pub arguments: Vec<String>,
}

impl Annotation {
    /// Create an annotation with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Append one argument's literal text.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_without_modifiers_is_not_public() {
        let field = FieldDecl::new("int", "id");
        assert!(!field.is_public());
    }

    #[test]
    fn field_with_public_modifier_is_public() {
        let field = FieldDecl::new("int", "id").with_modifier("public");
        assert!(field.is_public());
    }

    #[test]
    fn private_static_field_is_not_public() {
        let field = FieldDecl::new("int", "count")
            .with_modifier("private")
            .with_modifier("static");
        assert!(!field.is_public());
        assert_eq!(field.modifiers, ["private", "static"]);
    }

    #[test]
    fn annotation_lookup_finds_first_match() {
        let class = ClassDecl::new("Demo")
            .with_annotation(Annotation::new("Serializable"))
            .with_annotation(Annotation::new("GenerateAccessors").with_argument("true"))
            .with_annotation(Annotation::new("GenerateAccessors"));

        let found = class.annotation("GenerateAccessors").unwrap();
        assert_eq!(found.arguments, ["true"]);
    }

    #[test]
    fn annotation_lookup_is_case_sensitive() {
        let class = ClassDecl::new("Demo")
            .with_annotation(Annotation::new("generateaccessors"));
        assert!(class.annotation("GenerateAccessors").is_none());
    }

    #[test]
    fn members_keep_source_order() {
        let class = ClassDecl::new("Demo")
            .with_field(FieldDecl::new("int", "id"))
            .with_opaque_member("void Reset() { }")
            .with_field(FieldDecl::new("string", "name"));

        assert_eq!(class.members.len(), 3);
        assert!(matches!(&class.members[1], Member::Opaque(text) if text.contains("Reset")));
    }
}
