//! Prover side of the interactive protocol.

use num_bigint::BigUint;
use rand::Rng;

use crate::rng::random_below;
use crate::{
    Challenge, Commitment, Error, Protocol, PublicParameters, Response, Result, Statement, Witness,
};

/// Prover for the Chaum-Pedersen protocol.
///
/// Holds the secret witness and produces the two prover messages of the
/// sigma protocol: the commitment `(r1, r2)` and, once a challenge has
/// arrived, the response `s`.
///
/// # Security
///
/// - Draw the nonce with a cryptographically secure generator such as
///   [`SecureRng`](crate::SecureRng).
/// - Never reuse a nonce across proofs with the same witness; reuse lets
///   an observer solve for `x`.
pub struct Prover {
    protocol: Protocol,
    witness: Witness,
    statement: Statement,
}

impl Prover {
    /// Creates a prover and computes the public statement from the witness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScalar`] if the witness is not in `[0, q)`.
    pub fn new(params: PublicParameters, witness: Witness) -> Result<Self> {
        if witness.secret() >= params.q() {
            return Err(Error::InvalidScalar(
                "witness must be less than the subgroup order q".to_string(),
            ));
        }
        let statement = Statement::from_witness(&params, &witness);
        Ok(Self {
            protocol: Protocol::new(params),
            witness,
            statement,
        })
    }

    /// Returns the public statement `(y1, y2)`.
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// First message: draws a fresh nonce `k` and commits to it with
    /// `r1 = alpha^k mod p`, `r2 = beta^k mod p`.
    ///
    /// The returned [`Nonce`] must be kept secret and used for exactly one
    /// [`respond`](Self::respond) call.
    pub fn commit<R: Rng + ?Sized>(&self, rng: &mut R) -> (Commitment, Nonce) {
        let params = self.protocol.params();
        let k = random_below(rng, params.q());
        let r1 = self.protocol.exponentiate(params.alpha(), &k);
        let r2 = self.protocol.exponentiate(params.beta(), &k);

        (Commitment::new(r1, r2), Nonce::new(k))
    }

    /// Third message: answers the verifier's challenge with
    /// `s = (k - c*x) mod q`.
    pub fn respond(&self, nonce: &Nonce, challenge: &Challenge) -> Response {
        let s = self
            .protocol
            .solve(nonce.k(), challenge.c(), self.witness.secret());
        Response::new(s)
    }
}

/// Secret nonce drawn in the commitment phase.
#[derive(Clone, Debug)]
pub struct Nonce {
    k: BigUint,
}

impl Nonce {
    /// Wraps a nonce scalar.
    pub fn new(k: BigUint) -> Self {
        Self { k }
    }

    /// Returns the nonce scalar.
    pub fn k(&self) -> &BigUint {
        &self.k
    }
}
