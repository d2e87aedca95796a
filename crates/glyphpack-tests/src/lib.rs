//! Glyphpack End-to-End Test Infrastructure
//!
//! Writes real atlas files to temporary directories and drives the export
//! command against them.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p glyphpack-tests
//! ```

pub mod fixtures;
