//! The pattern parser, set algebra, and matcher generator for Unicode Set
//! (UTS #35) patterns.
//!
//! This crate has no opinion about where property data comes from: every
//! operation that needs to resolve a property name takes a
//! [`PropertyProvider`] implementation as a parameter. `unicodeset-data`
//! supplies a built-in one; callers with their own Unicode tables can
//! implement the trait directly instead.

#![deny(missing_docs)]

pub mod ast;
pub mod codepoint;
pub mod error;
pub mod eval;
pub mod interval;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod property;

pub use ast::Ast;
pub use codepoint::Codepoint;
pub use error::{Error, Result};
pub use eval::{eval, ResolvedSet};
pub use matcher::{
    compile, rewrite_regex_source, to_pattern_list, to_regex_class, to_split_pattern,
    PatternItem, Predicate, SplitPattern,
};
pub use parser::{parse, parse_top_level_for_regex, parse_with_depth};
pub use property::{resolve, PropertyProvider};
