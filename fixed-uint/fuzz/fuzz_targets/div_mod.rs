// Copyright 2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![no_main]

use fixed_uint::{Error, U512};
use libfuzzer_sys::fuzz_target;
use rug::{integer::Order, Integer};

fn from_gmp(x: Integer) -> U512 {
	let digits = x.to_digits(Order::LsfLe);
	U512::from_little_endian(&digits)
}

fuzz_target!(|data: (U512, U512)| {
	let (x, y) = data;
	let x_gmp = Integer::from_digits(&x.to_little_endian(), Order::LsfLe);
	let y_gmp = Integer::from_digits(&y.to_little_endian(), Order::LsfLe);
	if y.is_zero() {
		assert_eq!(x.div_mod(y), Err(Error::DivisionByZero));
	} else {
		let (a, b) = x_gmp.div_rem(y_gmp);
		assert_eq!(Ok((from_gmp(a), from_gmp(b))), x.div_mod(y));
	}
});
