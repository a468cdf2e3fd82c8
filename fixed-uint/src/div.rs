// Copyright 2015-2017 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Truncating division and remainder.

use core::ops::{Div, DivAssign, Rem, RemAssign};

use log::{debug, trace};
use smallvec::SmallVec;

use crate::{Error, Uint};

/// Radix of a limb.
const BASE: u32 = 256;

// Scaled remainder of the dividend, one limb wider than the operand.
// Stays on the stack up to 512-bit operands.
type Remainder = SmallVec<[u8; 96]>;

impl<const LIMBS: usize> Uint<LIMBS> {
	/// Returns a pair `(self / other, self % other)`.
	///
	/// Fails with [`Error::DivisionByZero`] if `other` is zero.
	pub fn div_mod(self, other: Self) -> Result<(Self, Self), Error> {
		if other.is_zero() {
			debug!(target: "uint", "rejected division of {:x} by zero", self);
			return Err(Error::DivisionByZero);
		}

		// Early return in case we are dividing by a larger number than us
		if self < other {
			return Ok((Self::zero(), self));
		}

		let n = other.significant_limbs();
		if n == 1 {
			trace!(target: "uint", "short division by {:#04x}", other.0[0]);
			return Ok(self.div_mod_small(other.0[0]));
		}

		let m = self.significant_limbs() - n;
		Ok(self.div_mod_knuth(other, n, m))
	}

	/// Checked division. Returns `None` if `other == 0`.
	pub fn checked_div(self, other: Self) -> Option<Self> {
		self.div_mod(other).ok().map(|(q, _)| q)
	}

	/// Checked modulus. Returns `None` if `other == 0`.
	pub fn checked_rem(self, other: Self) -> Option<Self> {
		self.div_mod(other).ok().map(|(_, r)| r)
	}

	/// Replaces `self` with `self / other`.
	///
	/// `self` is left untouched when `other` is zero.
	pub fn try_div_assign(&mut self, other: Self) -> Result<(), Error> {
		let (q, _) = self.div_mod(other)?;
		*self = q;
		Ok(())
	}

	/// Replaces `self` with `self % other`.
	///
	/// `self` is left untouched when `other` is zero.
	pub fn try_rem_assign(&mut self, other: Self) -> Result<(), Error> {
		let (_, r) = self.div_mod(other)?;
		*self = r;
		Ok(())
	}

	fn div_mod_small(mut self, other: u8) -> (Self, Self) {
		let other = u16::from(other);
		let mut rem = 0u16;
		self.0.iter_mut().rev().for_each(|d| {
			let num = (rem << 8) | u16::from(*d);
			*d = (num / other) as u8;
			rem = num % other;
		});
		(self, Self::from(rem as u8))
	}

	// See Knuth, TAOCP, Volume 2, section 4.3.1, Algorithm D.
	fn div_mod_knuth(self, mut v: Self, n: usize, m: usize) -> (Self, Self) {
		debug_assert!(n >= 2 && n + m <= LIMBS);
		// D1.
		// Scale both operands so that v's top limb is at least BASE / 2.
		// Scaling doesn't change the quotient and the remainder
		// only needs to be divided by the same factor afterwards.
		let scale = (BASE / (u32::from(v.0[n - 1]) + 1)) as u8;
		trace!(target: "uint", "normalized long division: n = {}, m = {}, scale = {}", n, m, scale);
		v *= scale;
		debug_assert!(v.0[n - 1] >= 0x80 && v.significant_limbs() == n);

		// u will store the remainder (scaled)
		let mut u: Remainder = self.0[..n + m].iter().copied().collect();
		let carry = Self::mul_limb_slice(&mut u, scale);
		u.push(carry);

		// quotient
		let mut q = Self::zero();
		let v_n_1 = u32::from(v.0[n - 1]);
		let v_n_2 = u32::from(v.0[n - 2]);

		// D2. D7.
		// iterate from m downto 0
		for j in (0..=m).rev() {
			// D3.
			// q_hat is our guess for the j-th quotient digit
			// q_hat = (u_{j+n} * b + u_{j+n-1}) / v_{n-1}, lowered until
			// q_hat < b and q_hat * v_{n-2} <= b * r_hat + u_{j+n-2}
			// Theorem B: q_hat >= q_j >= q_hat - 2
			let num = (u32::from(u[j + n]) << 8) | u32::from(u[j + n - 1]);
			let mut q_hat = num / v_n_1;
			let mut r_hat = num % v_n_1;
			while q_hat >= BASE || q_hat * v_n_2 > (r_hat << 8) + u32::from(u[j + n - 2]) {
				q_hat -= 1;
				r_hat += v_n_1;
				// if r_hat overflowed a limb, the test can't hold anymore
				if r_hat >= BASE {
					break;
				}
			}

			// D4.
			// subtract (q_hat * v) from u[j..=j + n]
			let mut q_hat_v: Remainder = v.0[..n].iter().copied().collect();
			let carry = Self::mul_limb_slice(&mut q_hat_v, q_hat as u8);
			q_hat_v.push(carry);
			let borrow = Self::sub_slice(&mut u[j..], &q_hat_v);

			// D6.
			// q_hat was still one too large, add v back
			if borrow {
				q_hat -= 1;
				let c = Self::add_slice(&mut u[j..j + n], &v.0[..n]);
				u[j + n] = u[j + n].wrapping_add(u8::from(c));
			}

			// D5.
			q.0[j] = q_hat as u8;
		}

		// D8.
		let mut remainder = Self::zero();
		remainder.0[..n].copy_from_slice(&u[..n]);
		(q, remainder.div_mod_small(scale).0)
	}
}

impl<T, const LIMBS: usize> Div<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Self;

	/// # Panics
	///
	/// Panics if `other` is zero.
	fn div(self, other: T) -> Self {
		match self.div_mod(other.into()) {
			Ok((q, _)) => q,
			Err(err) => panic!("{}", err),
		}
	}
}

impl<'a, T, const LIMBS: usize> Div<T> for &'a Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Uint<LIMBS>;

	fn div(self, other: T) -> Uint<LIMBS> {
		*self / other
	}
}

impl<T, const LIMBS: usize> DivAssign<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	fn div_assign(&mut self, other: T) {
		*self = *self / other;
	}
}

impl<T, const LIMBS: usize> Rem<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Self;

	/// # Panics
	///
	/// Panics if `other` is zero.
	fn rem(self, other: T) -> Self {
		match self.div_mod(other.into()) {
			Ok((_, r)) => r,
			Err(err) => panic!("{}", err),
		}
	}
}

impl<'a, T, const LIMBS: usize> Rem<T> for &'a Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Uint<LIMBS>;

	fn rem(self, other: T) -> Uint<LIMBS> {
		*self % other
	}
}

impl<T, const LIMBS: usize> RemAssign<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	fn rem_assign(&mut self, other: T) {
		*self = *self % other;
	}
}
