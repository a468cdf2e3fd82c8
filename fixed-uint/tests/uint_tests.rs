// Copyright 2015-2017 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::str::FromStr;

use fixed_uint::{Error, FromHexError, Uint, U128, U256, U512, U64};
use num_bigint::BigUint;
use quickcheck::{quickcheck, TestResult};

fn to_biguint<const LIMBS: usize>(x: Uint<LIMBS>) -> BigUint {
	BigUint::from_bytes_le(&x.to_little_endian())
}

fn modulus<const LIMBS: usize>() -> BigUint {
	BigUint::from(1u8) << (Uint::<LIMBS>::BITS as usize)
}

// Low `LIMBS` bytes of `bytes`, zero-extended.
fn truncated<const LIMBS: usize>(bytes: &[u8]) -> Uint<LIMBS> {
	Uint::from_little_endian(&bytes[..bytes.len().min(LIMBS)])
}

fn edge_values<const LIMBS: usize>() -> Vec<Uint<LIMBS>> {
	let mut top_bit = Uint::<LIMBS>::zero();
	top_bit.0[LIMBS - 1] = 0x80;
	let mut low_half = Uint::<LIMBS>::zero();
	low_half.0[..(LIMBS + 1) / 2].fill(0xff);
	vec![
		Uint::zero(),
		Uint::one(),
		Uint::from(2u8),
		Uint::from(0xffu8),
		Uint::MAX,
		Uint::<LIMBS>::MAX - 1u8,
		top_bit,
		low_half,
		Uint::<LIMBS>::MAX - low_half,
	]
}

// Checks every operation of `a` and `b` against arbitrary precision arithmetic modulo `2^BITS`.
fn agrees_with_biguint<const LIMBS: usize>(a: Uint<LIMBS>, b: Uint<LIMBS>) -> bool {
	let m = modulus::<LIMBS>();
	let (x, y) = (to_biguint(a), to_biguint(b));

	let sum = &x + &y;
	let (wrapped, overflow) = a.overflowing_add(b);
	if to_biguint(wrapped) != &sum % &m || overflow != (sum >= m) {
		return false;
	}

	let (wrapped, overflow) = a.overflowing_sub(b);
	if to_biguint(wrapped) != (&x + &m - &y) % &m || overflow != (x < y) {
		return false;
	}

	let product = &x * &y;
	let (wrapped, overflow) = a.overflowing_mul(b);
	if to_biguint(wrapped) != &product % &m || overflow != (product >= m) {
		return false;
	}

	if to_biguint(-a) != (&m - &x) % &m {
		return false;
	}

	if x.cmp(&y) != a.cmp(&b) {
		return false;
	}

	match a.div_mod(b) {
		Ok((q, r)) => y != BigUint::from(0u8) && to_biguint(q) == &x / &y && to_biguint(r) == &x % &y,
		Err(err) => err == Error::DivisionByZero && b.is_zero(),
	}
}

fn edge_grid_agrees<const LIMBS: usize>() {
	let values = edge_values::<LIMBS>();
	for &a in values.iter() {
		for &b in values.iter() {
			assert!(agrees_with_biguint(a, b), "{:#x} op {:#x} at {} bits", a, b, Uint::<LIMBS>::BITS);
		}
	}
}

#[test]
fn edge_values_agree_with_reference() {
	edge_grid_agrees::<1>();
	edge_grid_agrees::<2>();
	edge_grid_agrees::<3>();
	edge_grid_agrees::<8>();
	edge_grid_agrees::<16>();
	edge_grid_agrees::<32>();
	edge_grid_agrees::<64>();
}

quickcheck! {
	fn u24_agrees_with_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
		agrees_with_biguint::<3>(truncated(&a), truncated(&b))
	}

	fn u64_agrees_with_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
		agrees_with_biguint::<8>(truncated(&a), truncated(&b))
	}

	fn u128_agrees_with_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
		agrees_with_biguint::<16>(truncated(&a), truncated(&b))
	}

	fn u256_agrees_with_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
		agrees_with_biguint::<32>(truncated(&a), truncated(&b))
	}

	fn u512_agrees_with_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
		agrees_with_biguint::<64>(truncated(&a), truncated(&b))
	}

	fn u256_division_by_short_divisor(a: Vec<u8>, b: Vec<u8>, shift: u8) -> TestResult {
		// divisors of a few limbs against a wide dividend exercise the long division loop
		let b = truncated::<32>(&b[..b.len().min(1 + shift as usize % 6)]);
		if b.is_zero() {
			return TestResult::discard();
		}
		TestResult::from_bool(agrees_with_biguint::<32>(truncated(&a), b))
	}
}

#[test]
fn scenario_division_with_remainder() {
	let (q, r) = U64::from(300u16).div_mod(U64::from(7u8)).unwrap();
	assert_eq!(q, U64::from(42u8));
	assert_eq!(r, U64::from(6u8));
}

#[test]
fn scenario_subtraction() {
	assert_eq!(U64::from(5u8) - U64::from(3u8), U64::from(2u8));
	assert_eq!(U64::from(3u8) - U64::from(5u8), U64::from(u64::MAX - 1));
}

#[test]
fn scenario_division_by_zero() {
	let mut a = U128::from(300u16);
	assert_eq!(a.div_mod(U128::zero()), Err(Error::DivisionByZero));
	assert_eq!(a.try_div_assign(U128::zero()), Err(Error::DivisionByZero));
	assert_eq!(a, U128::from(300u16));
}

#[test]
fn widths() {
	assert_eq!(U64::BITS, 64);
	assert_eq!(U128::BITS, 128);
	assert_eq!(U256::BITS, 256);
	assert_eq!(U512::BITS, 512);
	assert_eq!(U512::BYTES, 64);
	assert_eq!(core::mem::size_of::<U256>(), 32);
}

#[test]
fn u512_long_division() {
	let a = U512::from_str(
		"ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
		 fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
	)
	.unwrap();
	let b = U512::from_str("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff").unwrap();
	let (q, r) = a.div_mod(b).unwrap();
	assert_eq!(q * b + r, a);
	assert!(r < b);
	assert_eq!(to_biguint(q), to_biguint(a) / to_biguint(b));
}

#[test]
fn parse_error_keeps_its_cause() {
	use std::error::Error as _;

	let err = U256::from_str("0xzz").unwrap_err();
	assert!(matches!(err, FromHexError::InvalidCharacter(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })));
	assert!(err.source().is_some());
	assert!(err.to_string().starts_with("invalid hex"));
	assert_eq!(err.clone(), err);

	let err = U64::from_str("1ffffffffffffffff").unwrap_err();
	assert_eq!(err, FromHexError::InvalidLength);
	assert!(err.source().is_none());
}

#[test]
fn hex_text_roundtrip() {
	let x = U256::from_str("0x00000000000000000000000000000000000000000000000000000000deadbeef").unwrap();
	assert_eq!(x, U256::from(0xdead_beefu32));
	assert_eq!(format!("{}", x), "deadbeef");
	assert_eq!(format!("{:#x}", U256::MAX).len(), 2 + 64);
	assert_eq!(U256::from_str(&U256::MAX.to_hex_string()), Ok(U256::MAX));
	assert_eq!(U256::from_str(&"f".repeat(65)), Err(FromHexError::InvalidLength));
}
