//! API token formatting, parsing, and verifier digests.
//!
//! Tokens look like `em_v1_<token uuid, simple>.<64 hex chars>`. Only a SHA-256
//! digest of the verifier input is stored, never the raw token.

use std::{fmt, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::users::records::UserUuid;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "em";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

const API_TOKEN_SECRET_HEX_CHARS: usize = API_TOKEN_SECRET_BYTES * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTokenVersion {
    V1,
}

impl ApiTokenVersion {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl TryFrom<i16> for ApiTokenVersion {
    type Error = ApiTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

impl FromStr for ApiTokenVersion {
    type Err = ApiTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

/// Random token secret, wiped from memory on drop.
#[derive(Clone)]
pub struct ApiTokenSecret {
    bytes: [u8; API_TOKEN_SECRET_BYTES],
}

impl ApiTokenSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; API_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; API_TOKEN_SECRET_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiTokenSecret(**redacted**)")
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Clone)]
pub struct ParsedApiToken {
    pub token_uuid: Uuid,
    pub version: ApiTokenVersion,
    pub secret: ApiTokenSecret,
}

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token uses an unsupported version")]
    UnsupportedVersion,

    #[error("api token secret encoding is invalid")]
    InvalidSecretEncoding,
}

#[must_use]
pub fn generate_api_token_secret() -> ApiTokenSecret {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    ApiTokenSecret::from_bytes(secret)
}

#[must_use]
pub fn format_api_token(
    token_uuid: Uuid,
    version: ApiTokenVersion,
    secret: &ApiTokenSecret,
) -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}_{}.{}",
        version.segment(),
        token_uuid.simple(),
        encode_secret_hex(secret.as_bytes())
    )
}

pub fn parse_api_token(token: &str) -> Result<ParsedApiToken, ApiTokenError> {
    let (prefix_and_id, secret_hex) = token.split_once('.').ok_or(ApiTokenError::InvalidFormat)?;

    let mut id_parts = prefix_and_id.splitn(3, '_');

    let prefix = id_parts.next().ok_or(ApiTokenError::InvalidFormat)?;
    let version_segment = id_parts.next().ok_or(ApiTokenError::InvalidFormat)?;
    let token_uuid_segment = id_parts.next().ok_or(ApiTokenError::InvalidFormat)?;

    if prefix != API_TOKEN_PREFIX {
        return Err(ApiTokenError::InvalidFormat);
    }

    let version = ApiTokenVersion::from_str(version_segment)?;

    let token_uuid =
        Uuid::try_parse(token_uuid_segment).map_err(|_error| ApiTokenError::InvalidFormat)?;

    let secret = decode_secret_hex(secret_hex).ok_or(ApiTokenError::InvalidSecretEncoding)?;

    Ok(ParsedApiToken {
        token_uuid,
        version,
        secret: ApiTokenSecret::from_bytes(secret),
    })
}

/// Build the canonical verifier input bytes for a token.
///
/// Format: `{token_uuid_hex}:{version_i16_decimal}:{user_uuid_hex}:{secret_hex}`
#[must_use]
pub fn build_verifier_input(
    token_uuid: &Uuid,
    version: ApiTokenVersion,
    user_uuid: &UserUuid,
    secret: &ApiTokenSecret,
) -> Vec<u8> {
    let input = format!(
        "{}:{}:{}:{}",
        token_uuid.simple(),
        version.as_i16(),
        user_uuid.into_uuid().simple(),
        encode_secret_hex(secret.as_bytes()),
    );

    input.into_bytes()
}

/// Lowercase hex SHA-256 of a verifier input; this is what gets stored.
#[must_use]
pub fn verifier_digest(input: &[u8]) -> String {
    format!("{:x}", Sha256::digest(input))
}

/// Compares two digests without short-circuiting on the first mismatch.
#[must_use]
pub fn digests_match(expected: &str, actual: &str) -> bool {
    if expected.len() != actual.len() {
        return false;
    }

    expected
        .bytes()
        .zip(actual.bytes())
        .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

fn encode_secret_hex(secret: &[u8; API_TOKEN_SECRET_BYTES]) -> String {
    let mut encoded = String::with_capacity(API_TOKEN_SECRET_HEX_CHARS);

    for byte in secret {
        encoded.push_str(&format!("{byte:02x}"));
    }

    encoded
}

fn decode_secret_hex(secret_hex: &str) -> Option<[u8; API_TOKEN_SECRET_BYTES]> {
    if secret_hex.len() != API_TOKEN_SECRET_HEX_CHARS {
        return None;
    }

    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    for (byte, pair) in secret.iter_mut().zip(secret_hex.as_bytes().chunks_exact(2)) {
        let [hi, lo] = pair else {
            return None;
        };

        *byte = (decode_hex_nibble(*hi)? << 4) | decode_hex_nibble(*lo)?;
    }

    Some(secret)
}

fn decode_hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_token_parses_back() {
        let token_uuid = Uuid::now_v7();
        let secret = ApiTokenSecret::from_bytes([0xAB; API_TOKEN_SECRET_BYTES]);
        let token = format_api_token(token_uuid, ApiTokenVersion::V1, &secret);

        assert!(token.starts_with("em_v1_"), "unexpected token format: {token}");

        let parsed = parse_api_token(&token).expect("token should parse");

        assert_eq!(parsed.token_uuid, token_uuid);
        assert_eq!(parsed.version, ApiTokenVersion::V1);
        assert_eq!(parsed.secret.as_bytes(), secret.as_bytes());
    }

    #[test]
    fn parse_rejects_invalid_prefix() {
        let result = parse_api_token("lt_v1_00000000000000000000000000000000.aa");

        assert!(matches!(result, Err(ApiTokenError::InvalidFormat)));
    }

    #[test]
    fn parse_rejects_unknown_version() {
        let result = parse_api_token("em_v9_00000000000000000000000000000000.aa");

        assert!(matches!(result, Err(ApiTokenError::UnsupportedVersion)));
    }

    #[test]
    fn parse_rejects_short_or_non_hex_secret() {
        let short = parse_api_token("em_v1_00000000000000000000000000000000.abcd");
        let non_hex = format!("em_v1_00000000000000000000000000000000.{}", "zz".repeat(32));

        assert!(matches!(short, Err(ApiTokenError::InvalidSecretEncoding)));
        assert!(matches!(
            parse_api_token(&non_hex),
            Err(ApiTokenError::InvalidSecretEncoding)
        ));
    }

    #[test]
    fn verifier_digest_depends_on_user() {
        let token_uuid = Uuid::nil();
        let secret = ApiTokenSecret::from_bytes([0xCD; API_TOKEN_SECRET_BYTES]);

        let alice = verifier_digest(&build_verifier_input(
            &token_uuid,
            ApiTokenVersion::V1,
            &UserUuid::from_uuid(Uuid::from_u128(1)),
            &secret,
        ));
        let bob = verifier_digest(&build_verifier_input(
            &token_uuid,
            ApiTokenVersion::V1,
            &UserUuid::from_uuid(Uuid::from_u128(2)),
            &secret,
        ));

        assert_eq!(alice.len(), 64);
        assert_ne!(alice, bob);
        assert!(digests_match(&alice, &alice.clone()));
        assert!(!digests_match(&alice, &bob));
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = ApiTokenSecret::from_bytes([0x11; API_TOKEN_SECRET_BYTES]);

        assert_eq!(format!("{secret:?}"), "ApiTokenSecret(**redacted**)");
    }
}
