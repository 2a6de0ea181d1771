//! Protocol types and the parameter-bound engine.
//!
//! The protocol proves knowledge of `x` such that `y1 = alpha^x mod p` and
//! `y2 = beta^x mod p` share the same exponent. A proof instance moves
//! through three states: the prover publishes the statement `(y1, y2)`,
//! commits with `(r1, r2)` and receives a challenge `c`, then resolves it
//! with the response `s`. Verification of `s` is final; a rejected proof
//! instance is not retried.

use num_bigint::BigUint;

use crate::{arithmetic, Error, PublicParameters, Result};

/// Secret witness for the proof: the discrete logarithm `x`.
///
/// Known only to the prover and never transmitted.
#[derive(Clone, Debug)]
pub struct Witness {
    x: BigUint,
}

impl Witness {
    /// Creates a new witness from a secret exponent.
    ///
    /// # Security
    ///
    /// Generate `x` with a cryptographically secure source such as
    /// [`SecureRng`](crate::SecureRng).
    pub fn new(x: BigUint) -> Self {
        Self { x }
    }

    pub(crate) fn secret(&self) -> &BigUint {
        &self.x
    }
}

/// Public statement of the proof: `y1 = alpha^x mod p`, `y2 = beta^x mod p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    y1: BigUint,
    y2: BigUint,
}

impl Statement {
    /// Creates a statement from already-computed public values.
    pub fn new(y1: BigUint, y2: BigUint) -> Self {
        Self { y1, y2 }
    }

    /// Computes the statement from parameters and witness.
    pub fn from_witness(params: &PublicParameters, witness: &Witness) -> Self {
        let protocol = Protocol::new(params.clone());
        let y1 = protocol.exponentiate(params.alpha(), witness.secret());
        let y2 = protocol.exponentiate(params.beta(), witness.secret());
        Self { y1, y2 }
    }

    /// Returns the first public value `y1`.
    pub fn y1(&self) -> &BigUint {
        &self.y1
    }

    /// Returns the second public value `y2`.
    pub fn y2(&self) -> &BigUint {
        &self.y2
    }

    /// Checks that both values are non-zero elements of the order-`q`
    /// subgroup of `Z_p^*`.
    pub fn validate(&self, params: &PublicParameters) -> Result<()> {
        for (value, name) in [(&self.y1, "y1"), (&self.y2, "y2")] {
            if value >= params.p() {
                return Err(Error::InvalidParams(format!(
                    "statement value {} must be less than p",
                    name
                )));
            }
            let in_subgroup = arithmetic::exponentiate(value, params.q(), params.p())?
                == BigUint::from(1u32);
            if !in_subgroup {
                return Err(Error::InvalidParams(format!(
                    "statement value {} is not in the order-q subgroup",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// First prover message: `r1 = alpha^k mod p`, `r2 = beta^k mod p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment {
    r1: BigUint,
    r2: BigUint,
}

impl Commitment {
    /// Creates a commitment from already-computed values.
    pub fn new(r1: BigUint, r2: BigUint) -> Self {
        Self { r1, r2 }
    }

    /// Returns the first commitment value `r1`.
    pub fn r1(&self) -> &BigUint {
        &self.r1
    }

    /// Returns the second commitment value `r2`.
    pub fn r2(&self) -> &BigUint {
        &self.r2
    }
}

/// Verifier challenge `c`, a scalar in `[0, q)`.
///
/// The protocol treats the challenge as an opaque input: it can come from
/// [`Verifier::random_challenge`](crate::Verifier::random_challenge) or any
/// external agreement between the parties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    c: BigUint,
}

impl Challenge {
    /// Wraps a challenge scalar, checking it against the subgroup order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScalar`] if `c` is not in `[0, q)`.
    pub fn new(c: BigUint, params: &PublicParameters) -> Result<Self> {
        if &c >= params.q() {
            return Err(Error::InvalidScalar(
                "challenge must be less than the subgroup order q".to_string(),
            ));
        }
        Ok(Self { c })
    }

    /// Returns the challenge scalar.
    pub fn c(&self) -> &BigUint {
        &self.c
    }
}

/// Prover response `s = (k - c*x) mod q`.
///
/// The only transmitted value that depends on the secret; the ephemeral
/// nonce `k` blinds it completely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    s: BigUint,
}

impl Response {
    /// Creates a response from a scalar.
    pub fn new(s: BigUint) -> Self {
        Self { s }
    }

    /// Returns the response scalar.
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

/// Complete proof for one protocol instance: commitment plus response.
///
/// Together with the statement and the challenge this is everything the
/// verifier needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    commitment: Commitment,
    response: Response,
}

impl Proof {
    /// Assembles a proof from its two prover messages.
    pub fn new(commitment: Commitment, response: Response) -> Self {
        Self {
            commitment,
            response,
        }
    }

    /// Returns the commitment.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Returns the response.
    pub fn response(&self) -> &Response {
        &self.response
    }
}

/// Parameter-bound protocol engine.
///
/// Binds a validated [`PublicParameters`] set once and exposes the three
/// protocol operations with the moduli and generators filled in. All
/// methods return plain values: the bound moduli were checked non-zero at
/// construction, so the fallible paths of the free functions in
/// [`arithmetic`] cannot be reached.
#[derive(Clone, Debug)]
pub struct Protocol {
    params: PublicParameters,
}

impl Protocol {
    /// Binds a parameter set.
    pub fn new(params: PublicParameters) -> Self {
        Self { params }
    }

    /// Returns the bound parameters.
    pub fn params(&self) -> &PublicParameters {
        &self.params
    }

    /// Computes `n^e mod p` for the bound modulus `p`.
    pub fn exponentiate(&self, n: &BigUint, e: &BigUint) -> BigUint {
        arithmetic::exponentiate(n, e, self.params.p())
            .unwrap_or_else(|_| unreachable!("p was validated non-zero at construction"))
    }

    /// Computes the response `s = (k - c*x) mod q` for the bound order `q`.
    pub fn solve(&self, k: &BigUint, c: &BigUint, x: &BigUint) -> BigUint {
        arithmetic::solve(k, c, x, self.params.q())
            .unwrap_or_else(|_| unreachable!("q was validated non-zero at construction"))
    }

    /// Checks the verification equations against the bound generators and
    /// modulus. Returns `false` for any mismatched or forged proof.
    pub fn verify(
        &self,
        r1: &BigUint,
        r2: &BigUint,
        y1: &BigUint,
        y2: &BigUint,
        s: &BigUint,
        c: &BigUint,
    ) -> bool {
        arithmetic::verify(
            r1,
            r2,
            y1,
            y2,
            self.params.alpha(),
            self.params.beta(),
            s,
            c,
            self.params.p(),
        )
        .unwrap_or_else(|_| unreachable!("p was validated non-zero at construction"))
    }
}
