//! Modular arithmetic core of the Chaum-Pedersen protocol.
//!
//! The three operations here are the entire mathematical surface of the
//! protocol: exponentiation in the group, response derivation, and the
//! verification equation. [`crate::Protocol`] binds them to a fixed
//! parameter set; these free functions take every value explicitly.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Error, Result};

/// Computes `base^exponent mod modulus`.
///
/// Uses repeated squaring with reduction at every step, so intermediate
/// values never exceed `modulus^2`.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `modulus` is zero.
pub fn exponentiate(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidModulus);
    }
    Ok(base.modpow(exponent, modulus))
}

/// Computes the prover's response `s = (k - c*x) mod q`, canonical in `[0, q)`.
///
/// `k` is the ephemeral nonce, `c` the challenge, `x` the secret witness.
/// The subtraction is performed as `k + (q - c*x mod q) mod q` so the result
/// is non-negative even when `k < c*x`, without branching on the sign of the
/// difference.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `q` is zero.
pub fn solve(k: &BigUint, c: &BigUint, x: &BigUint, q: &BigUint) -> Result<BigUint> {
    if q.is_zero() {
        return Err(Error::InvalidModulus);
    }
    let cx = (c * x) % q;
    Ok((k % q + (q - &cx)) % q)
}

/// Checks the Chaum-Pedersen verification equations.
///
/// Returns `Ok(true)` iff `r1 == alpha^s * y1^c mod p` and
/// `r2 == beta^s * y2^c mod p`. A mismatched or forged proof yields
/// `Ok(false)`; rejection is a normal outcome, not an error.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `p` is zero.
#[allow(clippy::too_many_arguments)]
pub fn verify(
    r1: &BigUint,
    r2: &BigUint,
    y1: &BigUint,
    y2: &BigUint,
    alpha: &BigUint,
    beta: &BigUint,
    s: &BigUint,
    c: &BigUint,
    p: &BigUint,
) -> Result<bool> {
    if p.is_zero() {
        return Err(Error::InvalidModulus);
    }

    // Each factor is reduced mod p before the product, and the product
    // reduced again, keeping intermediates bounded by p^2.
    let cond1 = *r1 == (alpha.modpow(s, p) * y1.modpow(c, p)) % p;
    let cond2 = *r2 == (beta.modpow(s, p) * y2.modpow(c, p)) % p;

    Ok(cond1 && cond2)
}
