//! Extensions for the core types.

mod calc_hash;
