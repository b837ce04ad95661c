//! Test helpers module
//!
//! This module provides utilities and helpers for testing the translation
//! engine. It includes a mock dictionary server, temporary dictionary
//! directories and a source whose loads can be held open.

#![allow(dead_code)]

pub mod dictionary_mock;
pub mod gated_source;
pub mod test_context;

pub use dictionary_mock::*;
pub use gated_source::*;
pub use test_context::*;
