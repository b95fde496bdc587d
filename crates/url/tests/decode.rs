//! Tests for URL decoding (url_decode, url_decode_with, url_decode_to_string).

use netcodec_url::{
    url_decode, url_decode_to_string, url_decode_with, url_encode, MalformedEscapePolicy,
    UrlError,
};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

fn generate_unreserved() -> String {
    const UNRESERVED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.~";
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length)
        .map(|_| UNRESERVED[rng.gen_range(0..UNRESERVED.len())] as char)
        .collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = url_encode(&blob);
        assert_eq!(url_decode(&encoded), blob);
        assert_eq!(
            url_decode_with(&encoded, MalformedEscapePolicy::Reject).unwrap(),
            blob
        );
    }
}

#[test]
fn unreserved_round_trip() {
    for _ in 0..100 {
        let text = generate_unreserved();
        assert_eq!(url_encode(&text), text);
        assert_eq!(url_decode(url_encode(&text)), text.as_bytes());
    }
}

#[test]
fn plain_text_is_unchanged() {
    let text = "already plain: no escapes here/?#&=";
    assert_eq!(url_decode(text), text.as_bytes());
}

#[test]
fn both_space_forms() {
    assert_eq!(url_decode("a%20value+with%20spaces"), b"a value with spaces");
    assert_eq!(url_decode("a+value+with+spaces"), b"a value with spaces");
}

#[test]
fn plus_is_overloaded() {
    // A literal '+' decodes to a space, so re-encoding does not restore it
    let decoded = url_decode("1+1");
    assert_eq!(decoded, b"1 1");
    assert_eq!(url_encode(&decoded), "1%201");
}

#[test]
fn malformed_sequences_pass_through() {
    assert_eq!(url_decode("100%"), b"100%");
    assert_eq!(url_decode("%a"), b"%a");
    assert_eq!(url_decode("%GG%41"), b"%GGA");
    assert_eq!(
        url_decode_with("%GG%41", MalformedEscapePolicy::PassThrough).unwrap(),
        b"%GGA"
    );
}

#[test]
fn malformed_sequences_rejected() {
    assert_eq!(
        url_decode_with("%GG%41", MalformedEscapePolicy::Reject),
        Err(UrlError::MalformedPercentSequence { position: 0 })
    );
    assert_eq!(
        url_decode_with("ok%2", MalformedEscapePolicy::Reject)
            .unwrap_err()
            .to_string(),
        "malformed percent escape at position 2"
    );
}

#[test]
fn to_string() {
    assert_eq!(url_decode_to_string("caf%C3%A9+au+lait").unwrap(), "café au lait");
    assert!(matches!(
        url_decode_to_string("%C3"),
        Err(UrlError::InvalidUtf8(_))
    ));
}

#[test]
fn empty_input() {
    assert_eq!(url_decode(""), b"");
    assert_eq!(url_decode_to_string("").unwrap(), "");
}
