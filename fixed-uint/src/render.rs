// Copyright 2015-2017 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Canonical hex text form.

use alloc::{format, string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{FromHexError, Uint};

/// Drops leading `'0'` digits, keeping at least one digit.
pub(crate) fn strip_leading_zeros(s: &mut String) {
	let zeros = s.bytes().take_while(|&b| b == b'0').count();
	let strip = if zeros == s.len() { zeros.saturating_sub(1) } else { zeros };
	s.drain(..strip);
}

impl<const LIMBS: usize> Uint<LIMBS> {
	/// Lowercase hex digits, most significant first, without leading zeros.
	///
	/// Zero renders as `"0"`.
	pub fn to_hex_string(&self) -> String {
		let mut s = hex::encode(self.to_big_endian());
		strip_leading_zeros(&mut s);
		s
	}
}

impl<const LIMBS: usize> fmt::Debug for Uint<LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl<const LIMBS: usize> fmt::LowerHex for Uint<LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		// the prefix is only written for `{:#x}`
		f.pad_integral(true, "0x", &self.to_hex_string())
	}
}

impl<const LIMBS: usize> FromStr for Uint<LIMBS> {
	type Err = FromHexError;

	/// Parses hex digits, most significant first. A `0x` prefix and an odd
	/// number of digits are accepted.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.strip_prefix("0x").unwrap_or(value);
		let bytes: Vec<u8> = match value.len() % 2 == 0 {
			true => hex::decode(value)?,
			false => hex::decode(format!("0{}", value))?,
		};

		// leading zero bytes don't count against the width
		let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
		let significant = &bytes[start..];
		if significant.len() > LIMBS {
			return Err(FromHexError::InvalidLength);
		}
		Ok(Self::from_big_endian(significant))
	}
}
