// Copyright 2015-2017 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-width unsigned integers built from byte limbs.
//!
//! `Uint<LIMBS>` stores `LIMBS` base-256 digits, least significant first, and
//! performs all arithmetic modulo `2^(8 * LIMBS)`. Division is the only
//! fallible operation and reports [`Error::DivisionByZero`] through
//! [`Uint::div_mod`] and friends.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod div;
mod error;
mod render;
mod uint;


pub use crate::{
	error::{Error, FromHexError},
	uint::Uint,
};

/// Little-endian 64-bit integer type.
pub type U64 = Uint<8>;
/// Little-endian 128-bit integer type.
pub type U128 = Uint<16>;
/// Little-endian 256-bit integer type.
pub type U256 = Uint<32>;
/// Little-endian 512-bit integer type.
pub type U512 = Uint<64>;

static_assertions::assert_eq_size!(U64, u64);
static_assertions::assert_eq_size!(U128, u128);
static_assertions::assert_eq_size!(U256, [u8; 32]);
static_assertions::assert_eq_size!(U512, [u8; 64]);
static_assertions::assert_impl_all!(U256: Copy, Send, Sync, Ord, core::hash::Hash);
