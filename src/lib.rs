//! Chaum-Pedersen zero-knowledge proof of discrete logarithm equality.
//!
//! A prover who knows a secret exponent `x` with `y1 = alpha^x mod p` and
//! `y2 = beta^x mod p` convinces a verifier that both public values share
//! the same exponent, without revealing `x`. The exchange is the classic
//! three-move sigma protocol: commitment, challenge, response.
//!
//! The crate exposes the protocol at two levels:
//!
//! - [`arithmetic`]: the three formulas as free functions taking every
//!   value explicitly ([`arithmetic::exponentiate`], [`arithmetic::solve`],
//!   [`arithmetic::verify`]).
//! - [`Protocol`], [`Prover`], [`Verifier`]: a parameter-bound engine and
//!   the two protocol roles, built on a validated [`PublicParameters`] set.
//!
//! The challenge is an opaque input: it can come from an interactive
//! verifier ([`Verifier::random_challenge`]) or any external agreement
//! between the parties. Transport and serialization of the exchanged
//! values are left to callers.
//!
//! # Example
//!
//! ```rust
//! use chaum_pedersen_dlog::{Proof, Prover, PublicParameters, SecureRng, Verifier, Witness};
//! use num_bigint::BigUint;
//!
//! // Toy group: p = 23, subgroup order q = 11, generators 4 and 9.
//! let params = PublicParameters::new(
//!     BigUint::from(23u32),
//!     BigUint::from(11u32),
//!     BigUint::from(4u32),
//!     BigUint::from(9u32),
//! )?;
//!
//! let mut rng = SecureRng::new();
//! let prover = Prover::new(params.clone(), Witness::new(BigUint::from(6u32)))?;
//! let verifier = Verifier::new(params, prover.statement().clone());
//!
//! let (commitment, nonce) = prover.commit(&mut rng);
//! let challenge = verifier.random_challenge(&mut rng);
//! let response = prover.respond(&nonce, &challenge);
//!
//! assert!(verifier.verify(&Proof::new(commitment, response), &challenge));
//! # Ok::<(), chaum_pedersen_dlog::Error>(())
//! ```

/// Free-function arithmetic core: exponentiation, response, verification.
pub mod arithmetic;
/// Error types.
pub mod error;
/// Public parameter sets.
pub mod params;
/// Protocol gadgets and the parameter-bound engine.
pub mod protocol;
/// Prover role.
pub mod prover;
/// Cryptographically secure random number generation.
pub mod rng;
/// Verifier role.
pub mod verifier;

pub use error::Error;
pub use params::PublicParameters;
pub use protocol::{Challenge, Commitment, Proof, Protocol, Response, Statement, Witness};
pub use prover::{Nonce, Prover};
pub use rng::SecureRng;
pub use verifier::Verifier;

/// Result alias for protocol operations.
pub type Result<T> = core::result::Result<T, Error>;
