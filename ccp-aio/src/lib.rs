// ccp-aio/src/lib.rs
//! Synchronous filesystem primitives for ccp (directory walking, file open/create/copy)

pub mod fs;

pub use fs::*;
