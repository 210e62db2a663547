//! Tests for base64 encoding (to_base64).

use llsd_base64::{encoded_len, to_base64, ALPHABET};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

/// Straightforward bit-by-bit reference encoder.
fn reference_encode(data: &[u8]) -> String {
    let alphabet = ALPHABET.as_bytes();
    let mut bits = String::new();
    for byte in data {
        bits.push_str(&format!("{byte:08b}"));
    }
    while bits.len() % 6 != 0 {
        bits.push('0');
    }
    let mut out: String = bits
        .as_bytes()
        .chunks(6)
        .map(|group| {
            let s = std::str::from_utf8(group).unwrap();
            alphabet[usize::from_str_radix(s, 2).unwrap()] as char
        })
        .collect();
    while out.len() % 4 != 0 {
        out.push('=');
    }
    out
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = to_base64(&blob);
        assert_eq!(
            result,
            reference_encode(&blob),
            "Failed for blob of length {}",
            blob.len()
        );
        assert_eq!(result.len(), encoded_len(blob.len()));
    }
}

#[test]
fn empty_input() {
    assert_eq!(to_base64(b""), "");
}

#[test]
fn padding_lengths() {
    assert_eq!(to_base64(&[1, 2, 3]), "AQID");
    assert_eq!(to_base64(&[1, 2, 3, 4]), "AQIDBA==");
    assert_eq!(to_base64(&[1, 2, 3, 4, 5]), "AQIDBAU=");
}

#[test]
fn all_byte_values_stay_in_alphabet() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = to_base64(&data);
    for c in encoded.chars() {
        assert!(
            ALPHABET.contains(c) || c == '=',
            "Invalid base64 character: {}",
            c
        );
    }
}
