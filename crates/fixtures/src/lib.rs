//! # bls12-fixtures
//!
//! Conformance fixtures for the EIP-2537 precompiles, stored as CSV files with the columns
//! `input,result,gas,notes`.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
mod row;
mod walk;

pub use error::*;
pub use row::*;
pub use walk::*;
