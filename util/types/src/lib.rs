//! # The Core Types Library
//!
//! This Library provides the essential types for building unique cell transactions: the plain
//! data structures, their canonical molecule encoding and the hashes derived from it.

pub mod prelude;

pub use bytes;
pub use ckb_unique_fixed_hash::{h160, h256, H160, H256};

pub mod constants;
pub mod core;
pub mod packed;

mod extension;
