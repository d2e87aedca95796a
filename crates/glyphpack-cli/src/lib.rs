//! Glyphpack CLI library.
//!
//! Command implementations for the `glyphpack` binary, kept in a library so
//! they can be driven from tests.

pub mod commands;
pub mod config;
