// Copyright 2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![no_main]

use fixed_uint::U256;
use libfuzzer_sys::fuzz_target;
use rug::{integer::Order, Integer};

fuzz_target!(|data: (U256, U256)| {
	let (x, y) = data;
	let x_gmp = Integer::from_digits(&x.to_little_endian(), Order::LsfLe);
	let y_gmp = Integer::from_digits(&y.to_little_endian(), Order::LsfLe);
	let full = x_gmp * y_gmp;
	let overflow = full.significant_bits() > U256::BITS;
	let wrapped = full.keep_bits(U256::BITS);
	let mut digits = wrapped.to_digits::<u8>(Order::LsfLe);
	digits.resize(U256::BYTES, 0);
	assert_eq!(x.overflowing_mul(y), (U256::from_little_endian(&digits), overflow));
});
