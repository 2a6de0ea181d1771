//! Verifier side of the interactive protocol.

use rand::Rng;

use crate::rng::random_below;
use crate::{Challenge, Proof, Protocol, PublicParameters, Statement};

/// Verifier for the Chaum-Pedersen protocol.
///
/// Bound to a parameter set and the statement under proof. Issues the
/// challenge (second message) and checks the prover's commitment and
/// response against the verification equations.
pub struct Verifier {
    protocol: Protocol,
    statement: Statement,
}

impl Verifier {
    /// Creates a verifier for a statement.
    pub fn new(params: PublicParameters, statement: Statement) -> Self {
        Self {
            protocol: Protocol::new(params),
            statement,
        }
    }

    /// Returns the statement being verified.
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Second message: draws a uniformly random challenge in `[0, q)`.
    pub fn random_challenge<R: Rng + ?Sized>(&self, rng: &mut R) -> Challenge {
        let params = self.protocol.params();
        let c = random_below(rng, params.q());
        Challenge::new(c, params).unwrap_or_else(|_| unreachable!("challenge was drawn below q"))
    }

    /// Final check: `r1 == alpha^s * y1^c mod p` and
    /// `r2 == beta^s * y2^c mod p`.
    ///
    /// Returns `false` for any mismatch. Rejection is final for this proof
    /// instance; it is not an error and there is no retry path.
    pub fn verify(&self, proof: &Proof, challenge: &Challenge) -> bool {
        self.protocol.verify(
            proof.commitment().r1(),
            proof.commitment().r2(),
            self.statement.y1(),
            self.statement.y2(),
            proof.response().s(),
            challenge.c(),
        )
    }
}
