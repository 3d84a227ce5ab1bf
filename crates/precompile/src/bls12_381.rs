//! BLS12-381 precompiles added in [`EIP-2537`](https://eips.ethereum.org/EIPS/eip-2537)
//! For more details check modules for each precompile.
use crate::PrecompileWithOperation;

mod arithmetic;
mod g1;
pub mod g1_add;
mod utils;

pub use g1::{decode_point, encode_point, AffinePoint, DecodeError};

/// Returns the BLS12-381 precompiles with their operation selectors.
pub fn precompiles() -> impl Iterator<Item = PrecompileWithOperation> {
    [g1_add::PRECOMPILE].into_iter()
}
