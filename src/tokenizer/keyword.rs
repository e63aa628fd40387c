//! # Keyword Token Handling
//!
//! This module defines the reserved words of the language and the lookup table
//! the tokenizer consults once it has accumulated an identifier-shaped word.
//!
//! ## Matching
//!
//! Lookup is an exact, case-sensitive match on the whole word. `Self` and
//! `self` are distinct entries; every other keyword is lowercase. Because the
//! tokenizer only looks a word up after accumulating it completely, a word that
//! merely starts with a keyword (`letter`, `format`) is an identifier.
//!
//! ## Table Construction
//!
//! The spelling of each variant lives on the enum itself (`strum`
//! attributes). `KEYWORDS` is filled once, on first lookup, by walking
//! `Keyword::iter()` and keying each variant by its `&'static str` spelling,
//! so adding a variant is enough to make it reserved.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;
use strum::IntoEnumIterator;

/// Represents the reserved words of the language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    /// Primitive casts and renaming in `use`/`extern crate`.
    As,
    Async,
    Await,
    Break,
    Const,
    Continue,
    Crate,
    Dyn,
    Else,
    Enum,
    Extern,
    False,
    Fn,
    For,
    If,
    Impl,
    In,
    Let,
    Loop,
    Match,
    Mod,
    Move,
    Mut,
    Pub,
    Ref,
    Return,
    /// The type being defined or implemented (`Self`).
    #[strum(serialize = "Self")]
    #[serde(rename = "Self")]
    SelfType,
    /// The method receiver or current module (`self`).
    #[strum(serialize = "self")]
    #[serde(rename = "self")]
    SelfValue,
    Static,
    Struct,
    Super,
    Trait,
    True,
    Type,
    Unsafe,
    Use,
    Where,
    While,
}

lazy_static! {
    /// Spelling to keyword, built from `Keyword::iter()`.
    static ref KEYWORDS: HashMap<&'static str, Keyword> = Keyword::iter()
        .map(|keyword| (<&'static str>::from(keyword), keyword))
        .collect();
}

impl Keyword {
    /// Looks up a complete word in the keyword table.
    ///
    /// ```
    /// # use rustlex::tokenizer::keyword::Keyword;
    /// assert_eq!(Keyword::lookup("let"), Some(Keyword::Let));
    /// assert_eq!(Keyword::lookup("Self"), Some(Keyword::SelfType));
    /// assert_eq!(Keyword::lookup("Let"), None);
    /// ```
    pub fn lookup(word: &str) -> Option<Keyword> {
        KEYWORDS.get(word).copied()
    }

    /// The exact source spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
