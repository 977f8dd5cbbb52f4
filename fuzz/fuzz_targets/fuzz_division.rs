#![no_main]

use libfuzzer_sys::fuzz_target;

use longarith::digits::{compare, equals};
use longarith::{add, divide, multiply_karatsuba, Base};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let base = if selector % 2 == 0 { 10 } else { 256 };
    let desc = Base::new(base).unwrap();

    // Dividend from the first two thirds, divisor from the rest.
    let (dividend, divisor) = rest.split_at(rest.len() * 2 / 3);
    let a: Vec<i32> = dividend.iter().map(|&x| i32::from(x) % base).collect();
    let b: Vec<i32> = divisor.iter().map(|&x| i32::from(x) % base).collect();
    if a.is_empty() || b.iter().all(|&d| d == 0) {
        return;
    }

    let (q, r) = divide(desc, &a, &b).unwrap();
    assert!(compare(&r, &b).is_lt(), "remainder not below divisor");

    // q * b + r == a
    let qb = multiply_karatsuba(desc, &q, &b).unwrap();
    let mut back = vec![0; qb.len().max(r.len()) + 1];
    add(desc, &mut back, &[&qb, &r]).unwrap();
    assert!(equals(&back, &a), "q*b + r != a");
});
