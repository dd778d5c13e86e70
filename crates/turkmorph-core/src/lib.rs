//! Shared types for Turkish morphological analysis.
//!
//! - [`alphabet`] -- letter classes and consonant alternations
//! - [`case`] -- Turkish-aware lowercasing and letter folding
//! - [`phonetics`] -- phonetic attribute sets of word surfaces
//! - [`dictionary`] -- dictionary items, parts of speech and root attributes

pub mod alphabet;
pub mod case;
pub mod dictionary;
pub mod phonetics;

pub use dictionary::{DictionaryItem, PrimaryPos, RootAttribute, RootAttributes, StemKind};
pub use phonetics::{AttributeSet, PhoneticAttribute};
