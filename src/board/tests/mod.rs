//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - per-piece pseudo-legal move generation
//! - `make_unmake.rs` - apply/undo move correctness
//! - `eval.rs` - static evaluation terms
//! - `proptest.rs` - property-based tests

mod make_unmake;
mod proptest;
