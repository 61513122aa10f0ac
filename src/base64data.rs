//! Base64 data tools for the big-integer parameters of a JSON Web Key.
//!
//! JWK represents each RSA parameter as the unpadded, URL-safe base64
//! encoding of a big-endian unsigned integer ([RFC 7518, Section 6.3][RFC7518]).
//!
//! [RFC7518]: https://tools.ietf.org/html/rfc7518#section-6.3

use base64ct::{Base64UrlUnpadded, Encoding};
use rsa::BigUint;

/// Error returned when a string is not valid unpadded base64url text.
///
/// Padding characters (`=`) and the standard-alphabet `+` and `/` are
/// rejected, as are lengths which no unpadded encoding can produce.
#[derive(Debug, thiserror::Error)]
#[error("base64url decode: {0}")]
pub struct DecodeError(#[from] base64ct::Error);

/// Decode an unpadded base64url string into an unsigned integer.
///
/// The decoded bytes are interpreted big-endian, with no fixed width.
/// An empty string decodes to zero.
pub fn big_uint(value: &str) -> Result<BigUint, DecodeError> {
    let bytes = Base64UrlUnpadded::decode_vec(value)?;
    Ok(BigUint::from_bytes_be(&bytes))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decodes_big_endian() {
        assert_eq!(big_uint("AQAB").unwrap(), BigUint::from(65537u32));
        assert_eq!(big_uint("AQ").unwrap(), BigUint::from(1u8));
    }

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(big_uint("").unwrap(), BigUint::from(0u8));
    }

    #[test]
    fn round_trips_through_encoding() {
        let value = big_uint("AQAB").unwrap();
        let encoded = Base64UrlUnpadded::encode_string(&value.to_bytes_be());
        assert_eq!(encoded, "AQAB");
    }

    #[test]
    fn rejects_standard_alphabet() {
        assert!(big_uint("a+b/").is_err());
    }

    #[test]
    fn rejects_padding() {
        assert!(big_uint("AQA=").is_err());
        assert!(big_uint("AQAB==").is_err());
    }

    #[test]
    fn rejects_invalid_length() {
        assert!(big_uint("A").is_err());
    }
}
