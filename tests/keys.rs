use std::str::FromStr;

use ark_ff::{BigInteger, One, PrimeField, Zero};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

use babyjub_elgamal::Error;
use babyjub_elgamal::curve::{BASE8, GENERATOR, Point};
use babyjub_elgamal::field::{Fq, to_le_bytes};
use babyjub_elgamal::keys::{
    PackedPublicKey, PrivateKey, PublicKey, SIGN_MASK, generate_keypair, is_valid_subgroup,
    pack_point, priv_to_pub_key, unpack_point,
};

/// Parses a big-endian hex scalar, with or without leading zeros.
fn scalar(hex_be: &str) -> Fq {
    let padded = format!("{:0>64}", hex_be.trim_start_matches("0x"));
    Fq::from_be_bytes_mod_order(&hex::decode(padded).unwrap())
}

fn bytes(hex_str: &str) -> [u8; 32] {
    hex::decode(hex_str).unwrap().try_into().unwrap()
}

const VECTORS: [(&str, &str); 3] = [
    (
        "0x1b7b3ae81e74ef5e8e25d940ed904759531985d5d9dc9f81818e811892f902b",
        "713130492aa612fbb577916493813824bcedc508433cde9fb2d13117c7aa2993",
    ),
    (
        "0x4688b761738f7d93d9c172411e20b8f6b0d549b6f03675a1600a35a099950d8",
        "5a197cdd0e98d6ab795187fe4b3841f6f0b1e5955413663ae2ebd81fc40ceca0",
    ),
    (
        "0x50b859939263059f28c105d1fb17c2390c192cfd3ac94af0f21ddb66cad4a26",
        "8e6913003b0652937dfc7b9fe5fdc0260596e51b1959c8aaf803dcfe29a9b715",
    ),
];

#[test]
fn packed_key_vectors() {
    for (sk, packed) in VECTORS {
        let pk = priv_to_pub_key(&scalar(sk));

        assert!(is_valid_subgroup(&pk));
        assert_eq!(hex::encode(pack_point(&pk).unwrap()), packed);
        assert_eq!(unpack_point(&bytes(packed)).unwrap(), pk);
    }
}

#[test]
fn circomlib_packed_key_roundtrips() {
    let packed = bytes("dc9f9fdb746d0f07b004cc4316e3495a58570b90661499f8a6a6696ff4156baa");

    let point = unpack_point(&packed).unwrap();
    assert_eq!(
        point,
        Point::new(
            Fq::from_str(
                "11035571757224451620605786890790132844722231619710976007063020523319248877914"
            )
            .unwrap(),
            Fq::from_str(
                "19186343803061871491190042465391631772251521601054015091722300428018876653532"
            )
            .unwrap(),
        )
    );
    assert!(is_valid_subgroup(&point));
    assert_eq!(pack_point(&point).unwrap(), packed);
}

#[test]
fn pack_unpack_roundtrip_random_keys() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..16 {
        let (public, _) = generate_keypair(&mut rng);
        let point = public.point();

        let packed = pack_point(&point).unwrap();
        assert_eq!(unpack_point(&packed).unwrap(), point);
        assert_eq!(PublicKey::unpack(&public.pack()).unwrap(), public);
    }
}

#[test]
fn pack_places_y_and_sign_bit() {
    let pk = priv_to_pub_key(&scalar(VECTORS[0].0));
    let packed = pack_point(&pk).unwrap();

    let mut y = packed;
    y[31] &= !SIGN_MASK;
    assert_eq!(y, to_le_bytes(&pk.y()));

    // The first vector has x in the upper half, the third in the lower.
    assert_ne!(packed[31] & SIGN_MASK, 0);

    let pk3 = priv_to_pub_key(&scalar(VECTORS[2].0));
    assert_eq!(pack_point(&pk3).unwrap()[31] & SIGN_MASK, 0);
}

#[test]
fn flipping_sign_bit_yields_negated_key() {
    let pk = priv_to_pub_key(&scalar(VECTORS[1].0));
    let mut packed = pack_point(&pk).unwrap();
    packed[31] ^= SIGN_MASK;

    let flipped = unpack_point(&packed).unwrap();
    assert_eq!(flipped, -pk);
    assert_eq!(flipped.y(), pk.y());
}

#[test]
fn non_canonical_y_is_rejected() {
    // Same key as the encryption scenario: y + p with the original sign bit.
    let alternate = bytes("d2f75db8c4e9c1a4c5eae3890ae542dff8d2e4f3c6b34b68dea3381f0e94b146");
    assert_eq!(unpack_point(&alternate), Err(Error::InvalidEncoding));

    // Same construction for every vector.
    let p = BigUint::from_bytes_le(&Fq::MODULUS.to_bytes_le());

    for (sk, _) in VECTORS {
        let pk = priv_to_pub_key(&scalar(sk));
        let packed = pack_point(&pk).unwrap();

        let y = BigUint::from_bytes_le(&to_le_bytes(&pk.y()));
        let mut shifted = [0u8; 32];
        let le = (y + &p).to_bytes_le();
        shifted[..le.len()].copy_from_slice(&le);

        // 2p < 2^255, so y + p never reaches the sign bit.
        assert_eq!(shifted[31] & SIGN_MASK, 0);
        shifted[31] |= packed[31] & SIGN_MASK;

        assert_ne!(shifted, packed);
        assert_eq!(unpack_point(&shifted), Err(Error::InvalidEncoding));
    }
}

#[test]
fn y_without_curve_point_is_rejected() {
    let mut packed = [0u8; 32];
    packed[0] = 2;

    assert_eq!(unpack_point(&packed), Err(Error::InvalidEncoding));
    assert_eq!(unpack_point(&[0xFF; 32]), Err(Error::InvalidEncoding));
}

#[test]
fn points_outside_subgroup_are_rejected() {
    // The full-group generator has order 8·l.
    let generator = bytes("010000fc647df850245c6e1e12fa0c4a175660a06d11146e0a684cb89c13190c");
    assert_eq!(unpack_point(&generator), Err(Error::InvalidKey));
    assert_eq!(pack_point(&GENERATOR), Err(Error::InvalidKey));

    // (0, -1) has order two.
    let torsion = bytes("000000f093f5e1439170b97948e833285d588181b64550b829a031e1724e6430");
    assert_eq!(unpack_point(&torsion), Err(Error::InvalidKey));

    // A valid key shifted by a torsion point is on the curve but mixed.
    let pk = priv_to_pub_key(&scalar(VECTORS[0].0));
    let mixed = pk + Point::new(Fq::zero(), -Fq::one());
    assert!(mixed.is_on_curve());
    assert!(!is_valid_subgroup(&mixed));
    assert_eq!(pack_point(&mixed), Err(Error::InvalidKey));
    assert_eq!(PublicKey::new(mixed), Err(Error::InvalidKey));

    let off_curve = Point::new(Fq::one(), Fq::one());
    assert!(!is_valid_subgroup(&off_curve));
    assert_eq!(pack_point(&off_curve), Err(Error::InvalidKey));
}

#[test]
fn identity_has_a_single_encoding() {
    let mut packed = [0u8; 32];
    packed[0] = 1;

    assert_eq!(pack_point(&Point::IDENTITY).unwrap(), packed);
    assert_eq!(unpack_point(&packed).unwrap(), Point::IDENTITY);

    packed[31] |= SIGN_MASK;
    assert_eq!(unpack_point(&packed), Err(Error::InvalidEncoding));
}

#[test]
fn key_derivation_is_scalar_multiplication() {
    assert_eq!(priv_to_pub_key(&Fq::one()), BASE8);
    assert!(priv_to_pub_key(&Fq::zero()).is_zero());

    let sk = PrivateKey::from_scalar(scalar(VECTORS[2].0));
    assert_eq!(sk.public_key().point(), priv_to_pub_key(&sk.scalar()));
}

#[test]
fn random_private_keys_are_below_subgroup_order() {
    let mut rng = StdRng::seed_from_u64(12);
    let l = ark_ed_on_bn254::Fr::MODULUS;

    for _ in 0..32 {
        let sk = PrivateKey::random(&mut rng);
        assert!(sk.scalar().into_bigint() < l);
    }
}

#[test]
fn packed_key_hex() {
    let (sk, packed) = VECTORS[0];
    let key = PackedPublicKey::from_hex(packed).unwrap();

    assert_eq!(key.to_hex(), packed);
    assert_eq!(key.to_string(), packed);
    assert_eq!(key.to_bytes(), bytes(packed));
    assert_eq!(
        key.unpack().unwrap(),
        PrivateKey::from_scalar(scalar(sk)).public_key()
    );

    assert!(matches!(
        PackedPublicKey::from_hex("zz"),
        Err(Error::Hex(_))
    ));
    assert_eq!(
        PackedPublicKey::from_hex("0102"),
        Err(Error::InvalidLength(2))
    );
}

#[test]
fn private_key_debug_is_redacted() {
    let sk = PrivateKey::from_scalar(scalar(VECTORS[0].0));

    assert_eq!(format!("{sk:?}"), "PrivateKey(..)");
}
