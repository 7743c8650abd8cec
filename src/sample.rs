//! Uniform sampling of a satisfying assignment, walking the reduced BDD
//! top-down and choosing branches proportional to the number of
//! completions each one admits.

use crate::bdd::Bdd;
use crate::error::SampleError;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

/// Draws a uniformly random satisfying assignment of `bdd`, as `m` bits in
/// edge-order order, using the per-node solution counts from
/// [`crate::count::solution_counts`].
///
/// Uses a uniform integer draw in `[0, count[k])` rather than a uniform
/// float, since floating point introduces bias for counts beyond about
/// 2^53 (roughly graphs larger than 5x5).
pub fn sample<R: Rng + ?Sized>(
    bdd: &Bdd,
    count: &[BigUint],
    rng: &mut R,
) -> Result<Vec<bool>, SampleError> {
    let mut assignment = Vec::with_capacity(bdd.num_vars() as usize);
    let mut node = bdd.root_pointer();
    let mut prev_v = 0u32;

    loop {
        let var = bdd.var_of(node);
        for _ in prev_v..var {
            assignment.push(rng.gen_bool(0.5));
        }

        if node.is_terminal() {
            return if node.is_one() {
                Ok(assignment)
            } else {
                Err(SampleError::NoSolutions)
            };
        }

        let low = bdd.low_link_of(node);
        let high = bdd.high_link_of(node);
        let v_high = bdd.var_of(high);
        let weight_high = &count[high.to_index()] << (v_high - var - 1);

        let draw = uniform_below(rng, &count[node.to_index()]);
        if draw < weight_high {
            assignment.push(true);
            node = high;
        } else {
            assignment.push(false);
            node = low;
        }
        prev_v = var + 1;
    }
}

/// Uniform integer in `[0, bound)` via rejection sampling on the minimal
/// number of bits, avoiding the modulo bias a naive `rand() % bound` has.
fn uniform_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    if bound.is_zero() {
        return BigUint::zero();
    }
    let bits = bound.bits();
    loop {
        let candidate = random_bits(rng, bits);
        if &candidate < bound {
            return candidate;
        }
    }
}

fn random_bits<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    let n_bytes = ((bits + 7) / 8) as usize;
    let mut buf = vec![0u8; n_bytes];
    rng.fill(buf.as_mut_slice());
    if bits % 8 != 0 {
        let mask = (1u8 << (bits % 8)) - 1;
        let last = buf.len() - 1;
        buf[last] &= mask;
    }
    BigUint::from_bytes_le(&buf)
}
