//! # bls12-precompile
//!
//! EIP-2537 BLS12-381 precompiled contracts exposed through a byte-in/byte-out
//! contract. Only G1 addition is implemented; the dispatch table and the
//! native-boundary call shape are shared by the whole operation family.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod bls12_381;
pub mod bls12_381_const;
pub mod call;
pub mod id;
pub mod interface;

pub use call::{perform_operation, CallOutcome};
pub use id::Operation;
pub use interface::*;

use once_cell::race::OnceBox;
use std::{boxed::Box, collections::BTreeMap};

/// Table of the precompiles that can be dispatched through an [`Operation`] selector.
#[derive(Clone, Default, Debug)]
pub struct Precompiles {
    /// Precompiles
    inner: BTreeMap<Operation, PrecompileFn>,
}

impl Precompiles {
    /// Returns the EIP-2537 precompiles implemented by this crate.
    pub fn eip2537() -> &'static Self {
        static INSTANCE: OnceBox<Precompiles> = OnceBox::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Precompiles::default();
            precompiles.extend(bls12_381::precompiles());
            Box::new(precompiles)
        })
    }

    /// Returns an iterator over the registered operations.
    pub fn operations(&self) -> impl ExactSizeIterator<Item = &Operation> {
        self.inner.keys()
    }

    /// Is the given operation registered.
    #[inline]
    pub fn contains(&self, operation: &Operation) -> bool {
        self.inner.contains_key(operation)
    }

    /// Returns the precompile for the given operation.
    #[inline]
    pub fn get(&self, operation: &Operation) -> Option<&PrecompileFn> {
        self.inner.get(operation)
    }

    /// Is the precompile table empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of precompiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Extends the precompiles with the given precompiles.
    ///
    /// Other precompiles with overwrite existing precompiles.
    #[inline]
    pub fn extend(&mut self, other: impl IntoIterator<Item = PrecompileWithOperation>) {
        self.inner.extend(other.into_iter().map(|p| (p.0, p.1)));
    }

    /// Runs the precompile registered for `selector` over `input`.
    ///
    /// Unknown selectors and family members without an implementation fail with
    /// [`PrecompileError::UnsupportedOperation`].
    pub fn run(&self, selector: u8, input: &[u8]) -> PrecompileResult {
        let precompile = Operation::try_from(selector)
            .ok()
            .and_then(|operation| self.get(&operation));
        let Some(precompile) = precompile else {
            tracing::debug!(selector, "no precompile registered for selector");
            return Err(PrecompileError::UnsupportedOperation(selector));
        };
        precompile(input)
    }
}

/// Precompile paired with the operation selector it is dispatched under.
#[derive(Clone, Debug)]
pub struct PrecompileWithOperation(pub Operation, pub PrecompileFn);

impl PrecompileWithOperation {
    /// Returns reference of precompile.
    #[inline]
    pub fn precompile(&self) -> &PrecompileFn {
        &self.1
    }
}
