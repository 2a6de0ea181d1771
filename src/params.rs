//! Public parameter sets: the prime modulus, subgroup order, and generators.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{arithmetic, Error, Result};

// RFC 5114 section 2.3: 2048-bit MODP group with a 256-bit prime order subgroup.
const RFC5114_P_HEX: &str = "87A8E61DB4B6663CFFBBD19C651959998CEEF608660DD0F25D2CEED4435E3B00E00DF8F1D61957D4FAF7DF4561B2AA3016C3D91134096FAA3BF4296D830E9A7C209E0C6497517ABD5A8A9D306BCF67ED91F9E6725B4758C022E0B1EF4275BF7B6C5BFC11D45F9088B941F54EB1E59BB8BC39A0BF12307F5C4FDB70C581B23F76B63ACAE1CAA6B7902D52526735488A0EF13C6D9A51BFA4AB3AD8347796524D8EF6A167B5A41825D967E144E5140564251CCACB83E6B486F6B3CA3F7971506026C0B857F689962856DED4010ABD0BE621C3A3960A54E710C375F26375D7014103A4B54330C198AF126116D2276E11715F693877FAD7EF09CADB094AE91E1A1597";

const RFC5114_Q_HEX: &str = "8CF83642A709A097B447997640129DA299B1A47D1EB3750BA308B0FE64F5FBD3";

const RFC5114_G_HEX: &str = "3FB32C9B73134D0B2E77506660EDBD484CA7B18F21EF205407F4793A1A0BA12510DBC15077BE463FFF4FED4AAC0BB555BE3A6C1B0C6B47B1BC3773BF7E8C6F62901228F8C28CBB18A55AE31341000A650196F931C77A57F2DDF463E5E9EC144B777DE62AAAB8A8628AC376D282D6ED3864E67982428EBC831D14348F6F2F9193B5045AF2767164E1DFC967C1FB3F2E55A4BD1BFFE83B9C80D052B985D182EA0ADB2A3B7313D3FE14C8484B1E052588B9B7D2BBD2DF016199ECD06E1557CD0915B3353BBB64E0EC377FD028370DF92B52C7891428CDC67EB6184B523D1DB246C32F63078490F00EF8D647D148D47954515E2327CFEF98C582664B4C0F6CC41659";

/// Public parameters for the Chaum-Pedersen protocol.
///
/// Holds the prime modulus `p`, the order `q` of the subgroup the protocol
/// works in, and two independent generators `alpha` and `beta` of that
/// subgroup. Constructed once and shared read-only across any number of
/// proofs; there are no setters.
///
/// # Security
///
/// The generators must be cryptographically independent: the discrete
/// logarithm of `beta` with respect to `alpha` must be unknown to the
/// prover, otherwise proofs can be forged. [`PublicParameters::new`] can
/// only check structural properties (subgroup order), not independence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicParameters {
    p: BigUint,
    q: BigUint,
    alpha: BigUint,
    beta: BigUint,
}

impl PublicParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulus`] if `p` or `q` is zero, and
    /// [`Error::InvalidParams`] if:
    /// - `p` is 1,
    /// - `q` does not divide `p - 1`,
    /// - either generator lies outside `(1, p)`,
    /// - either generator is not of order `q` modulo `p`,
    /// - the generators are equal to each other.
    pub fn new(p: BigUint, q: BigUint, alpha: BigUint, beta: BigUint) -> Result<Self> {
        if p.is_zero() || q.is_zero() {
            return Err(Error::InvalidModulus);
        }
        if p.is_one() {
            return Err(Error::InvalidParams(
                "modulus p must be greater than 1".to_string(),
            ));
        }
        if (&p - 1u32) % &q != BigUint::zero() {
            return Err(Error::InvalidParams(
                "q must divide p - 1".to_string(),
            ));
        }

        check_generator(&alpha, &q, &p, "alpha")?;
        check_generator(&beta, &q, &p, "beta")?;

        if alpha == beta {
            return Err(Error::InvalidParams(
                "generators alpha and beta must be different".to_string(),
            ));
        }

        Ok(Self { p, q, alpha, beta })
    }

    /// Returns the RFC 5114 2048-bit MODP group with 256-bit prime order
    /// subgroup, with `alpha` the group's standard generator and
    /// `beta = alpha^2 mod p`.
    pub fn rfc5114_modp_2048_256() -> Self {
        let p = biguint_from_hex(RFC5114_P_HEX);
        let q = biguint_from_hex(RFC5114_Q_HEX);
        let alpha = biguint_from_hex(RFC5114_G_HEX);
        let beta = alpha.modpow(&BigUint::from(2u32), &p);

        Self::new(p, q, alpha, beta)
            .unwrap_or_else(|_| unreachable!("RFC 5114 constants form a valid parameter set"))
    }

    /// Returns the prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Returns the subgroup order `q`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Returns the first generator `alpha`.
    pub fn alpha(&self) -> &BigUint {
        &self.alpha
    }

    /// Returns the second generator `beta`.
    pub fn beta(&self) -> &BigUint {
        &self.beta
    }
}

fn check_generator(g: &BigUint, q: &BigUint, p: &BigUint, name: &str) -> Result<()> {
    if g <= &BigUint::one() || g >= p {
        return Err(Error::InvalidParams(format!(
            "generator {} must lie strictly between 1 and p",
            name
        )));
    }
    // An element of (1, p) generates the order-q subgroup iff g^q == 1 mod p.
    if !arithmetic::exponentiate(g, q, p)?.is_one() {
        return Err(Error::InvalidParams(format!(
            "generator {} is not of order q",
            name
        )));
    }
    Ok(())
}

fn biguint_from_hex(s: &str) -> BigUint {
    let bytes =
        hex::decode(s).unwrap_or_else(|_| unreachable!("parameter constants are valid hex"));
    BigUint::from_bytes_be(&bytes)
}
