//! Rust bambulabs AMS report types.

#![deny(missing_docs)]

pub mod message;
pub mod numeric;
pub mod parser;
