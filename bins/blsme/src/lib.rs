//! Command line runner for the EIP-2537 precompiles.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod cmd;

// Only used by the binary.
use color_eyre as _;
use tracing_subscriber as _;
