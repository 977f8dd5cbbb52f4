#![no_main]

use libfuzzer_sys::fuzz_target;

use longarith::{build_multiplier, ArithConfig, Base, MultiplierKind, Operands};

const BASES: [i32; 4] = [2, 10, 256, 10_000];

/// Split the input into two digit vectors in a base picked by the first byte.
fn operands(data: &[u8]) -> Option<(i32, Vec<i32>, Vec<i32>)> {
    let (&selector, rest) = data.split_first()?;
    let base = BASES[usize::from(selector) % BASES.len()];
    let (a, b) = rest.split_at(rest.len() / 2);
    let to_digits = |bytes: &[u8]| -> Vec<i32> {
        let mut digits: Vec<i32> = bytes
            .chunks(2)
            .map(|c| {
                let raw = i32::from(c[0]) | i32::from(*c.get(1).unwrap_or(&0)) << 8;
                raw % base
            })
            .collect();
        if digits.is_empty() {
            digits.push(0);
        }
        digits
    };
    Some((base, to_digits(a), to_digits(b)))
}

fuzz_target!(|data: &[u8]| {
    let Some((base, a, b)) = operands(data) else {
        return;
    };
    let desc = Base::new(base).unwrap();
    let config = ArithConfig {
        base,
        karatsuba_cutoff: 2,
        ntt_threshold: 8,
        ..Default::default()
    };

    let mut products = Vec::new();
    for kind in MultiplierKind::ALL {
        let m = build_multiplier(&config, kind).unwrap();
        let product = m.multiply(desc, Operands::Product(&a, &b)).unwrap();
        products.push((kind, product));
    }
    let (_, reference) = &products[0];
    for (kind, product) in &products[1..] {
        assert_eq!(product, reference, "{kind} disagrees with schoolbook in base {base}");
    }
});
