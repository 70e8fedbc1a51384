use babyjub_elgamal::primitives::{ConstantTime, U256};

fn le(low: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..low.len()].copy_from_slice(low);
    out
}

#[test]
fn u256_from_le_bytes_orders_by_integer_value() {
    // Bytes are read least significant first: 0x030201 < 0x0302FF.
    let a = U256::from_le_bytes(le(&[0x01, 0x02, 0x03]));
    let b = U256::from_le_bytes(le(&[0xFF, 0x02, 0x03]));

    assert!(a < b);
    assert_eq!(U256::from_le_bytes([0u8; 32]), U256::default());
}

#[test]
fn u256_less_than_matches_ordering() {
    let values = [
        U256::from_le_bytes([0u8; 32]),
        U256::from_le_bytes(le(&[1])),
        U256::from_le_bytes(le(&[0xFF])),
        U256::from_le_bytes(le(&[0x00, 0x01])),
        U256::from_le_bytes(le(&[0xFF; 8])),
        U256::from_le_bytes({
            let mut b = [0u8; 32];
            b[31] = 1;
            b
        }),
        U256::from_le_bytes({
            let mut b = [0xFFu8; 32];
            b[31] = 0x7F;
            b
        }),
        U256::from_le_bytes([0xFFu8; 32]),
    ];

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.less_than(b), a < b, "values[{i}] < values[{j}]");
            assert_eq!(a.less_than(b), i < j);
        }
    }
}

#[test]
fn u256_most_significant_difference_wins() {
    // 0x01_00 vs 0x00_FF: the high byte decides even though the low byte
    // points the other way.
    let a = U256::from_le_bytes(le(&[0x00, 0x01]));
    let b = U256::from_le_bytes(le(&[0xFF, 0x00]));

    assert!(b.less_than(&a));
    assert!(!a.less_than(&b));
    assert!(!a.less_than(&a));
}

#[test]
fn ct_compare_32_byte_arrays() {
    let a = [7u8; 32];
    let mut b = a;

    assert!(a.ct_eq(&b));
    assert!(!a.ct_lt(&b));

    b[31] = 8;
    assert!(!a.ct_eq(&b));
    assert!(a.ct_lt(&b));
    assert!(!b.ct_lt(&a));

    b[0] = 6;
    assert!(b.ct_lt(&a));
}
