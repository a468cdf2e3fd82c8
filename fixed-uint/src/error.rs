// Copyright 2015-2017 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors reported by arithmetic and conversions.

use core::fmt;

/// Arithmetic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
	/// Divisor was zero.
	DivisionByZero,
	/// Value does not fit into the target type.
	Overflow,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Error::DivisionByZero => write!(f, "division by zero"),
			Error::Overflow => write!(f, "integer overflow when casting to a narrower type"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Conversion from hex string error.
#[derive(Debug, Clone, PartialEq)]
pub enum FromHexError {
	/// Char not from range 0-9, a-f, A-F.
	InvalidCharacter(hex::FromHexError),
	/// Value does not fit into type.
	InvalidLength,
}

impl fmt::Display for FromHexError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			FromHexError::InvalidCharacter(ref err) => write!(f, "invalid hex: {}", err),
			FromHexError::InvalidLength => write!(f, "the number is too large for the type"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for FromHexError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match *self {
			FromHexError::InvalidCharacter(ref err) => Some(err),
			FromHexError::InvalidLength => None,
		}
	}
}

#[doc(hidden)]
impl From<hex::FromHexError> for FromHexError {
	fn from(err: hex::FromHexError) -> Self {
		FromHexError::InvalidCharacter(err)
	}
}
