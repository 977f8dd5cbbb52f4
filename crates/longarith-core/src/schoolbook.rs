//! Schoolbook O(n·m) multiplication.

use num_traits::AsPrimitive;

use crate::base::Base;
use crate::carry::mul_add_carry;
use crate::digits::significant_len;

/// Multiply `a` by `b` into `result`, fully carried.
///
/// `result` should hold `a.len() + b.len()` digits; digits and carries
/// beyond its end are dropped. Both operands must be non-negative.
/// Partial products are accumulated in `i64`, which is exact for any base
/// that fits an `i32`.
pub fn multiply_simple<D>(base: Base, result: &mut [D], a: &[i32], b: &[i32])
where
    D: AsPrimitive<i64>,
    i64: AsPrimitive<D>,
{
    result.fill(0i64.as_());
    let len_a = significant_len(a);
    let len_b = significant_len(b);
    let out_len = result.len();

    for (i, &ai) in a[..len_a].iter().enumerate() {
        if i >= out_len {
            break;
        }
        if ai == 0 {
            continue;
        }
        let mut carry = 0i64;
        for (j, &bj) in b[..len_b].iter().enumerate() {
            let k = i + j;
            if k >= out_len {
                carry = 0;
                break;
            }
            let acc: i64 = result[k].as_();
            let (digit, c) = mul_add_carry(base, acc, ai, bj, carry);
            result[k] = digit.as_();
            carry = c;
        }
        let mut k = i + len_b;
        while carry != 0 && k < out_len {
            let acc: i64 = result[k].as_();
            let t = acc + carry;
            result[k] = (t % base.wide()).as_();
            carry = t / base.wide();
            k += 1;
        }
    }
}
