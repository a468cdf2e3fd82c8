// Copyright 2015-2017 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Big unsigned integer type.
//!
//! A large-but-fixed sized unsigned integer stored as base-256 limbs, least
//! significant limb first. Every operation wraps modulo `2^(8 * LIMBS)`; the
//! `overflowing_*` and `checked_*` methods expose whether wrapping happened.

use core::{
	cmp::Ordering,
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign},
};

use crate::Error;

/// Little-endian large integer type of `LIMBS` bytes.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Uint<const LIMBS: usize>(pub [u8; LIMBS]);

impl<const LIMBS: usize> Uint<LIMBS> {
	const NON_EMPTY: () = assert!(LIMBS > 0, "Uint needs at least one limb");

	/// Width of the type in bytes.
	pub const BYTES: usize = LIMBS;
	/// Width of the type in bits.
	pub const BITS: u32 = (LIMBS * 8) as u32;
	/// Maximum value.
	pub const MAX: Self = Self([u8::MAX; LIMBS]);

	/// Zero (additive identity) of this type.
	#[inline]
	pub const fn zero() -> Self {
		let () = Self::NON_EMPTY;
		Self([0; LIMBS])
	}

	/// One (multiplicative identity) of this type.
	#[inline]
	pub const fn one() -> Self {
		let mut ret = Self::zero();
		ret.0[0] = 1;
		ret
	}

	/// Creates a value from its limbs, least significant first.
	#[inline]
	pub const fn from_limbs(limbs: [u8; LIMBS]) -> Self {
		let () = Self::NON_EMPTY;
		Self(limbs)
	}

	/// Limbs of the value, least significant first.
	#[inline]
	pub const fn as_limbs(&self) -> &[u8; LIMBS] {
		&self.0
	}

	/// Consumes the value and returns its limbs, least significant first.
	#[inline]
	pub const fn into_limbs(self) -> [u8; LIMBS] {
		self.0
	}

	/// Whether this is zero.
	#[inline]
	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|&limb| limb == 0)
	}

	/// Return the least number of bits needed to represent the number
	#[inline]
	pub fn bits(&self) -> u32 {
		match self.significant_limbs() {
			0 => 0,
			n => n as u32 * 8 - self.0[n - 1].leading_zeros(),
		}
	}

	// Number of limbs up to and including the most significant non-zero one.
	#[inline]
	pub(crate) fn significant_limbs(&self) -> usize {
		self.0.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1)
	}

	/// Low 64 bits of the value.
	#[inline]
	pub fn low_u64(&self) -> u64 {
		let mut bytes = [0u8; 8];
		let width = LIMBS.min(8);
		bytes[..width].copy_from_slice(&self.0[..width]);
		u64::from_le_bytes(bytes)
	}

	/// Conversion to u64 with overflow checking
	///
	/// # Panics
	///
	/// Panics if the number is larger than u64::max_value().
	#[inline]
	pub fn as_u64(&self) -> u64 {
		match u64::try_from(*self) {
			Ok(value) => value,
			Err(_) => panic!("Integer overflow when casting to u64"),
		}
	}

	/// Converts from little endian representation bytes in memory.
	///
	/// # Panics
	///
	/// Panics if `slice` is longer than the type.
	pub fn from_little_endian(slice: &[u8]) -> Self {
		assert!(LIMBS >= slice.len(), "{} bytes do not fit into a {}-bit integer", slice.len(), Self::BITS);

		let mut ret = Self::zero();
		ret.0[..slice.len()].copy_from_slice(slice);
		ret
	}

	/// Converts from big endian representation bytes in memory.
	///
	/// # Panics
	///
	/// Panics if `slice` is longer than the type.
	pub fn from_big_endian(slice: &[u8]) -> Self {
		assert!(LIMBS >= slice.len(), "{} bytes do not fit into a {}-bit integer", slice.len(), Self::BITS);

		let mut ret = Self::zero();
		for (limb, byte) in ret.0.iter_mut().zip(slice.iter().rev()) {
			*limb = *byte;
		}
		ret
	}

	/// Little endian bytes of the value.
	#[inline]
	pub fn to_little_endian(&self) -> [u8; LIMBS] {
		self.0
	}

	/// Big endian bytes of the value.
	#[inline]
	pub fn to_big_endian(&self) -> [u8; LIMBS] {
		let mut ret = self.0;
		ret.reverse();
		ret
	}

	/// Adds one in place, wrapping `MAX` to zero.
	pub fn increment(&mut self) -> &mut Self {
		for limb in self.0.iter_mut() {
			*limb = limb.wrapping_add(1);
			if *limb != 0 {
				break;
			}
		}
		self
	}

	/// Adds one in place and returns the previous value.
	pub fn post_increment(&mut self) -> Self {
		let ret = *self;
		self.increment();
		ret
	}

	/// Subtracts one in place, wrapping zero to `MAX`.
	pub fn decrement(&mut self) -> &mut Self {
		for limb in self.0.iter_mut() {
			let (res, borrow) = limb.overflowing_sub(1);
			*limb = res;
			if !borrow {
				break;
			}
		}
		self
	}

	/// Subtracts one in place and returns the previous value.
	pub fn post_decrement(&mut self) -> Self {
		let ret = *self;
		self.decrement();
		ret
	}

	/// Add with overflow.
	#[inline]
	pub fn overflowing_add(mut self, other: Self) -> (Self, bool) {
		let carry = Self::add_slice(&mut self.0, &other.0);
		(self, carry)
	}

	/// Addition modulo `2^BITS`.
	#[inline]
	pub fn wrapping_add(self, other: Self) -> Self {
		self.overflowing_add(other).0
	}

	/// Checked addition. Returns `None` if overflow occurred.
	pub fn checked_add(self, other: Self) -> Option<Self> {
		match self.overflowing_add(other) {
			(_, true) => None,
			(val, _) => Some(val),
		}
	}

	/// Subtraction which underflows and returns a flag if it does.
	#[inline]
	pub fn overflowing_sub(mut self, other: Self) -> (Self, bool) {
		let borrow = Self::sub_slice(&mut self.0, &other.0);
		(self, borrow)
	}

	/// Subtraction modulo `2^BITS`.
	#[inline]
	pub fn wrapping_sub(self, other: Self) -> Self {
		self.overflowing_sub(other).0
	}

	/// Checked subtraction. Returns `None` if overflow occurred.
	pub fn checked_sub(self, other: Self) -> Option<Self> {
		match self.overflowing_sub(other) {
			(_, true) => None,
			(val, _) => Some(val),
		}
	}

	/// Multiply with overflow, returning a flag if it does.
	///
	/// Schoolbook multiplication; partial products landing at or above
	/// `LIMBS` are dropped and raise the flag when non-zero.
	pub fn overflowing_mul(self, other: Self) -> (Self, bool) {
		let mut ret = Self::zero();
		let mut overflow = false;

		for (i, &a) in self.0.iter().enumerate() {
			if a == 0 {
				continue;
			}
			let mut carry = 0u16;
			for (j, &b) in other.0.iter().enumerate().take(LIMBS - i) {
				// at most 255 + 255 + 255 * 255 == u16::MAX
				let acc = carry + u16::from(ret.0[i + j]) + u16::from(a) * u16::from(b);
				ret.0[i + j] = acc as u8;
				carry = acc >> 8;
			}
			overflow |= carry != 0 || other.0[LIMBS - i..].iter().any(|&b| b != 0);
		}

		(ret, overflow)
	}

	/// Multiplication modulo `2^BITS`.
	#[inline]
	pub fn wrapping_mul(self, other: Self) -> Self {
		self.overflowing_mul(other).0
	}

	/// Checked multiplication. Returns `None` if overflow occurred.
	pub fn checked_mul(self, other: Self) -> Option<Self> {
		match self.overflowing_mul(other) {
			(_, true) => None,
			(val, _) => Some(val),
		}
	}

	/// Two's complement negation, the additive inverse modulo `2^BITS`.
	#[inline]
	pub fn wrapping_neg(self) -> Self {
		let mut ret = !self;
		ret.increment();
		ret
	}

	/// Negation with overflow.
	pub fn overflowing_neg(self) -> (Self, bool) {
		let overflow = !self.is_zero();
		(self.wrapping_neg(), overflow)
	}

	#[inline(always)]
	pub(crate) fn add_slice(a: &mut [u8], b: &[u8]) -> bool {
		Self::binop_slice(a, b, u8::overflowing_add)
	}

	#[inline(always)]
	pub(crate) fn sub_slice(a: &mut [u8], b: &[u8]) -> bool {
		Self::binop_slice(a, b, u8::overflowing_sub)
	}

	#[inline(always)]
	fn binop_slice(a: &mut [u8], b: &[u8], binop: impl Fn(u8, u8) -> (u8, bool) + Copy) -> bool {
		let mut c = false;
		a.iter_mut().zip(b.iter()).for_each(|(x, y)| {
			let (res, carry) = Self::binop_carry(*x, *y, c, binop);
			*x = res;
			c = carry;
		});
		c
	}

	#[inline(always)]
	fn binop_carry(a: u8, b: u8, c: bool, binop: impl Fn(u8, u8) -> (u8, bool)) -> (u8, bool) {
		let (res1, overflow1) = b.overflowing_add(u8::from(c));
		let (res2, overflow2) = binop(a, res1);
		(res2, overflow1 || overflow2)
	}

	// Multiplies limbs in place by `by`, returning the limb carried out of the top.
	#[inline]
	pub(crate) fn mul_limb_slice(a: &mut [u8], by: u8) -> u8 {
		let mut carry = 0u16;
		for limb in a.iter_mut() {
			let acc = u16::from(*limb) * u16::from(by) + carry;
			*limb = acc as u8;
			carry = acc >> 8;
		}
		carry as u8
	}
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
	fn default() -> Self {
		Self::zero()
	}
}

impl<const LIMBS: usize> AsRef<[u8]> for Uint<LIMBS> {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl<'a, const LIMBS: usize> From<&'a Uint<LIMBS>> for Uint<LIMBS> {
	fn from(x: &'a Uint<LIMBS>) -> Self {
		*x
	}
}

macro_rules! impl_from_unsigned {
	($($from:ty),*) => {$(
		impl<const LIMBS: usize> From<$from> for Uint<LIMBS> {
			/// # Panics
			///
			/// Panics if the type is narrower than the source integer.
			fn from(value: $from) -> Self {
				Self::from_little_endian(&value.to_le_bytes())
			}
		}
	)*};
}

macro_rules! impl_from_signed {
	($($from:ty => $to:ty),*) => {$(
		impl<const LIMBS: usize> From<$from> for Uint<LIMBS> {
			/// # Panics
			///
			/// Panics if `value` is negative or the type is narrower than the source integer.
			fn from(value: $from) -> Self {
				match value >= 0 {
					true => From::from(value as $to),
					false => panic!("Unsigned integer can't be created from negative value"),
				}
			}
		}
	)*};
}

macro_rules! impl_try_from_for_primitive {
	($($to:ty),*) => {$(
		impl<const LIMBS: usize> TryFrom<Uint<LIMBS>> for $to {
			type Error = Error;

			#[inline]
			fn try_from(u: Uint<LIMBS>) -> Result<$to, Error> {
				let mut bytes = [0u8; core::mem::size_of::<$to>()];
				let width = bytes.len().min(LIMBS);
				if u.0[width..].iter().any(|&limb| limb != 0) {
					return Err(Error::Overflow);
				}
				bytes[..width].copy_from_slice(&u.0[..width]);
				Ok(<$to>::from_le_bytes(bytes))
			}
		}
	)*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
impl_try_from_for_primitive!(u8, u16, u32, u64, u128, usize);

impl<T, const LIMBS: usize> Add<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Self;

	fn add(mut self, other: T) -> Self {
		self += other;
		self
	}
}

impl<'a, T, const LIMBS: usize> Add<T> for &'a Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Uint<LIMBS>;

	fn add(self, other: T) -> Uint<LIMBS> {
		*self + other
	}
}

impl<T, const LIMBS: usize> AddAssign<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	fn add_assign(&mut self, other: T) {
		Self::add_slice(&mut self.0, &other.into().0);
	}
}

impl<T, const LIMBS: usize> Sub<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Self;

	#[inline]
	fn sub(mut self, other: T) -> Self {
		self -= other;
		self
	}
}

impl<'a, T, const LIMBS: usize> Sub<T> for &'a Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Uint<LIMBS>;

	fn sub(self, other: T) -> Uint<LIMBS> {
		*self - other
	}
}

impl<T, const LIMBS: usize> SubAssign<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	fn sub_assign(&mut self, other: T) {
		Self::sub_slice(&mut self.0, &other.into().0);
	}
}

impl<T, const LIMBS: usize> Mul<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Self;

	fn mul(mut self, other: T) -> Self {
		self *= other;
		self
	}
}

impl<'a, T, const LIMBS: usize> Mul<T> for &'a Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	type Output = Uint<LIMBS>;

	fn mul(self, other: T) -> Uint<LIMBS> {
		*self * other
	}
}

impl<T, const LIMBS: usize> MulAssign<T> for Uint<LIMBS>
where
	T: Into<Uint<LIMBS>>,
{
	fn mul_assign(&mut self, other: T) {
		*self = self.wrapping_mul(other.into());
	}
}

impl<const LIMBS: usize> Neg for Uint<LIMBS> {
	type Output = Self;

	#[inline]
	fn neg(self) -> Self {
		self.wrapping_neg()
	}
}

impl<'a, const LIMBS: usize> Neg for &'a Uint<LIMBS> {
	type Output = Uint<LIMBS>;

	#[inline]
	fn neg(self) -> Uint<LIMBS> {
		self.wrapping_neg()
	}
}

impl<const LIMBS: usize> Not for Uint<LIMBS> {
	type Output = Self;

	#[inline]
	fn not(mut self) -> Self {
		for limb in self.0.iter_mut() {
			*limb = !*limb;
		}
		self
	}
}

impl<const LIMBS: usize> Ord for Uint<LIMBS> {
	fn cmp(&self, other: &Self) -> Ordering {
		let mut i = LIMBS;
		// limb 0 takes part too
		while i > 0 {
			i -= 1;
			match self.0[i].cmp(&other.0[i]) {
				Ordering::Equal => continue,
				ord => return ord,
			}
		}
		Ordering::Equal
	}
}

impl<const LIMBS: usize> PartialOrd for Uint<LIMBS> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

#[cfg(any(test, feature = "quickcheck"))]
impl<const LIMBS: usize> quickcheck::Arbitrary for Uint<LIMBS> {
	fn arbitrary(g: &mut quickcheck::Gen) -> Self {
		let fifth = (LIMBS / 5).max(1);
		// make it more likely to generate smaller numbers that
		// don't use up all the limbs, with the edges thrown in
		let range = *g
			.choose(&[LIMBS, LIMBS / 2, fifth, fifth, fifth, fifth, fifth, fifth, fifth, fifth])
			.unwrap_or(&LIMBS);
		let mut ret = match *g.choose(&[0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap_or(&0) {
			0 => return Self::MAX,
			1 => return Self::one(),
			_ => Self::zero(),
		};

		let size = <usize as quickcheck::Arbitrary>::arbitrary(g) % (range + 1);
		for limb in ret.0[..size].iter_mut() {
			*limb = <u8 as quickcheck::Arbitrary>::arbitrary(g);
		}
		ret
	}
}

#[cfg(feature = "arbitrary")]
impl<'a, const LIMBS: usize> arbitrary::Arbitrary<'a> for Uint<LIMBS> {
	fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
		let mut limbs = [0u8; LIMBS];
		u.fill_buffer(&mut limbs)?;
		Ok(Self::from_limbs(limbs))
	}
}
