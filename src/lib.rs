// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # accessor-gen
//!
//! Generates public accessor companion declarations for classes annotated
//! with the [`MARKER_NAME`] marker.
//!
//! The host front end parses source text into [`DeclarationTree`]s and
//! hands them to [`generate`]. For every class carrying the marker, the
//! pass inspects its non-public fields, derives a public identifier per
//! field (uppercased, `_`/`m_` prefixes stripped, optional snake-case to
//! camel-case conversion), and renders a `public partial class` companion
//! with one property per field. Each companion is returned as a
//! [`GeneratedSource`] keyed `{namespace}_{className}.g`; merging it into
//! the compilation is the host's job.
//!
//! ## Quick Start
//!
//! ```rust
//! use accessor_gen::{
//!     generate, Annotation, ClassDecl, DeclarationTree, FieldDecl, MARKER_NAME,
//! };
//!
//! let mut tree = DeclarationTree::new();
//! let ns = tree.add_namespace(None, "Demos");
//! tree.add_class(
//!     Some(ns),
//!     ClassDecl::new("Demo")
//!         .with_annotation(Annotation::new(MARKER_NAME))
//!         .with_field(FieldDecl::new("int", "id")),
//! );
//!
//! let sources = generate(&[tree])?;
//! assert_eq!(sources[0].name, "Demos_Demo.g");
//! assert!(sources[0].text.contains("public int Id"));
//! # Ok::<(), accessor_gen::Error>(())
//! ```
//!
//! ## Marker configuration
//!
//! The marker takes at most one argument. The companion applies snake-case
//! conversion to every field of the class only when that argument's literal
//! text is the token `true`; any other shape reads as disabled. The
//! comparison is textual — a constant that evaluates to true does not
//! enable conversion. This mirrors how the marker is read at the source
//! level and is documented, load-bearing behavior.
//!
//! ## Caveats
//!
//! The property declaration is produced by literal text replacement of the
//! private identifier across the field's whole declaration, so a type
//! fragment containing the identifier as a substring is rewritten with it.
//! Name collisions between generated properties and existing members are
//! not detected here; both surface as compile errors in the host toolchain.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

pub mod error;
pub mod generate;
pub mod tree;

pub use error::{Error, Result};
pub use generate::{GeneratedSource, MARKER_NAME, generate};
pub use tree::{
    Annotation, ClassDecl, DeclarationTree, FieldDecl, Member, NamespaceDecl, NodeId, NodeKind,
};
