#![deny(unsafe_op_in_unsafe_fn)]
#![deny(warnings, missing_docs, missing_debug_implementations)]
//! Code-point classes and string algorithms from the WHATWG Infra standard.
//!
//! The `CodePoint` type represents a single Unicode code point, any value in
//! the range U+0000 to U+10FFFF inclusive. Unlike `char` it also admits the
//! surrogate range U+D800 to U+DFFF, so text decoded from ill-formed UTF-16
//! (a lone surrogate in a JavaScript string, say) is representable without
//! loss. It carries one predicate method per category the Infra standard
//! names: ASCII subranges, C0 controls, whitespace sets, surrogates, scalar
//! values and noncharacters, each an exact inclusive-range test.
//!
//! The `InfraStr` type is a primitive string slice over such code points. It
//! is usually seen in its borrowed form, `&InfraStr`.
//!
//! Infra string slices are encoded in WTF-8, a super-set of UTF-8 encoding.
//! This allows all `CodePoint`s to be encoded, lone surrogates included,
//! while a string without surrogates remains byte-identical to UTF-8.
//!
//! The `InfraString` type is the growable owned counterpart.
//!
//! # Code points, not code units
//!
//! Every algorithm in this crate iterates by *code point*: a
//! supplementary-plane character is one element, never a surrogate pair to
//! split accidentally. Where the code *unit* view is genuinely wanted, it
//! is spelled out explicitly ([`InfraStr::code_units`]), and positions such
//! as the cursor of [`InfraStr::collect_code_points`] are always code-point
//! indices.
//!
//! # String algorithms
//!
//! On top of the classifier, `InfraStr` carries the Infra string
//! algorithms: ASCII / isomorphic / scalar-value string tests, predicate
//! scanning with a cursor, scalar-value coercion, newline stripping and
//! normalization, and ASCII-whitespace stripping and collapsing. All of
//! them are total: the empty string, cursors past the end and lone
//! surrogates are defined inputs, not errors.

pub(crate) mod wtf8;

pub(crate) mod code_point;

pub(crate) mod infra_str;

pub(crate) mod infra_string;

pub(crate) mod algorithms;

pub use code_point::{CodePoint, CodePointTryFromError};

pub use infra_str::{
    infra_str_from_wtf8, infra_str_from_wtf8_mut, infra_str_from_wtf8_unchecked,
    infra_str_from_wtf8_unchecked_mut, Bytes, CharsLossy, CodePoints, CodeUnits, InfraStr,
};

pub use infra_string::InfraString;

/// A slice of `CodePoint`s
pub type CodePointSlice = [CodePoint];

/// A `Vec` of `CodePoint`s
pub type CodePointVec = Vec<CodePoint>;
