use chaum_pedersen_dlog::{
    arithmetic, Challenge, Error, Proof, Protocol, Prover, PublicParameters, SecureRng, Verifier,
    Witness,
};
use num_bigint::BigUint;

fn b(n: u32) -> BigUint {
    BigUint::from(n)
}

fn toy_params() -> PublicParameters {
    PublicParameters::new(b(23), b(11), b(4), b(9)).unwrap()
}

#[test]
fn toy_vector_with_free_functions() {
    let (p, q, alpha, beta) = (b(23), b(11), b(4), b(9));
    let x = b(6);
    let k = b(7);
    let c = b(4);

    let y1 = arithmetic::exponentiate(&alpha, &x, &p).unwrap();
    let y2 = arithmetic::exponentiate(&beta, &x, &p).unwrap();
    assert_eq!(y1, b(2));
    assert_eq!(y2, b(3));

    let r1 = arithmetic::exponentiate(&alpha, &k, &p).unwrap();
    let r2 = arithmetic::exponentiate(&beta, &k, &p).unwrap();
    assert_eq!(r1, b(8));
    assert_eq!(r2, b(4));

    let s = arithmetic::solve(&k, &c, &x, &q).unwrap();
    assert_eq!(s, b(5));

    assert!(arithmetic::verify(&r1, &r2, &y1, &y2, &alpha, &beta, &s, &c, &p).unwrap());

    // Same transcript, secret taken as 7 instead of 6.
    let forged_s = arithmetic::solve(&k, &c, &b(7), &q).unwrap();
    assert!(!arithmetic::verify(&r1, &r2, &y1, &y2, &alpha, &beta, &forged_s, &c, &p).unwrap());
}

#[test]
fn toy_vector_with_bound_protocol() {
    let protocol = Protocol::new(toy_params());
    let x = b(6);
    let k = b(7);
    let c = b(4);

    let y1 = protocol.exponentiate(protocol.params().alpha(), &x);
    let y2 = protocol.exponentiate(protocol.params().beta(), &x);
    let r1 = protocol.exponentiate(protocol.params().alpha(), &k);
    let r2 = protocol.exponentiate(protocol.params().beta(), &k);
    let s = protocol.solve(&k, &c, &x);

    assert_eq!(s, b(5));
    assert!(protocol.verify(&r1, &r2, &y1, &y2, &s, &c));

    let forged_s = protocol.solve(&k, &c, &b(7));
    assert!(!protocol.verify(&r1, &r2, &y1, &y2, &forged_s, &c));
}

#[test]
fn honest_transcript_verifies_for_random_challenges() {
    let params = toy_params();
    let prover = Prover::new(params.clone(), Witness::new(b(6))).unwrap();
    let verifier = Verifier::new(params, prover.statement().clone());
    let mut rng = SecureRng::new();

    for _ in 0..100 {
        let (commitment, nonce) = prover.commit(&mut rng);
        let challenge = verifier.random_challenge(&mut rng);
        let response = prover.respond(&nonce, &challenge);

        assert!(verifier.verify(&Proof::new(commitment, response), &challenge));
    }
}

#[test]
fn verification_is_repeatable_and_final() {
    let params = toy_params();
    let prover = Prover::new(params.clone(), Witness::new(b(6))).unwrap();
    let verifier = Verifier::new(params, prover.statement().clone());
    let mut rng = SecureRng::new();

    let (commitment, nonce) = prover.commit(&mut rng);
    let challenge = verifier.random_challenge(&mut rng);
    let response = prover.respond(&nonce, &challenge);
    let proof = Proof::new(commitment, response);

    // Pure predicate: repeated runs agree.
    let first = verifier.verify(&proof, &challenge);
    assert!(first);
    assert_eq!(first, verifier.verify(&proof, &challenge));
}

#[test]
fn rfc5114_end_to_end_flow() {
    let params = PublicParameters::rfc5114_modp_2048_256();
    let mut rng = SecureRng::new();

    let x = rng_below(&mut rng, params.q());
    let prover = Prover::new(params.clone(), Witness::new(x)).unwrap();
    prover.statement().validate(&params).unwrap();

    let verifier = Verifier::new(params, prover.statement().clone());

    let (commitment, nonce) = prover.commit(&mut rng);
    let challenge = verifier.random_challenge(&mut rng);
    let response = prover.respond(&nonce, &challenge);

    assert!(verifier.verify(&Proof::new(commitment, response), &challenge));
}

#[test]
fn rfc5114_rejects_wrong_witness() {
    let params = PublicParameters::rfc5114_modp_2048_256();
    let mut rng = SecureRng::new();
    let q = params.q().clone();

    let x = rng_below(&mut rng, &q);
    let wrong_x = (&x + 1u32) % &q;

    let honest = Prover::new(params.clone(), Witness::new(x)).unwrap();
    let dishonest = Prover::new(params.clone(), Witness::new(wrong_x)).unwrap();

    // A zero challenge erases the witness from the response, so draw from [1, q).
    let challenge =
        Challenge::new(rng_below(&mut rng, &(&q - 1u32)) + 1u32, &params).unwrap();

    let verifier = Verifier::new(params, honest.statement().clone());

    let (commitment, nonce) = dishonest.commit(&mut rng);
    let response = dishonest.respond(&nonce, &challenge);

    assert!(!verifier.verify(&Proof::new(commitment, response), &challenge));
}

#[test]
fn out_of_range_challenge_is_rejected() {
    let params = toy_params();

    // q = 11: anything at or above the subgroup order never enters the
    // response computation.
    assert!(matches!(
        Challenge::new(b(15), &params),
        Err(Error::InvalidScalar(_))
    ));
    assert!(Challenge::new(b(11), &params).is_err());
    assert!(Challenge::new(b(10), &params).is_ok());
}

fn rng_below(rng: &mut SecureRng, bound: &BigUint) -> BigUint {
    use num_bigint::RandBigInt;
    rng.gen_biguint_below(bound)
}
