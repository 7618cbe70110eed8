//! Bearer token claims decoding.
//!
//! The backend issues compact JWTs. The client never verifies the signature —
//! the server re-checks the token on every authenticated call — it only reads
//! the payload segment to learn the expiry timestamp. Claims are recomputed on
//! each authentication check and never cached.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;

/// Claims extracted from the token payload segment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    /// Subject (usually the account email). Not all issuers set it.
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiry as seconds since the Unix epoch. A payload without `exp` is
    /// rejected, which the session layer maps to "not authenticated".
    pub exp: i64,
}

impl Claims {
    /// A token is expired when its expiry timestamp is at or before `now`.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Why a token could not be decoded. Never surfaced to UI code as an error;
/// the session store collapses any variant to "not authenticated".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-segment compact JWT")]
    Malformed,
    #[error("token payload is not valid claims JSON")]
    Payload,
}

/// Decode the claims from a compact JWT without verifying the signature.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let bytes = Base64UrlUnpadded::decode_vec(payload).map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload_json: &str) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = Base64UrlUnpadded::encode_string(payload_json.as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_exp_and_sub() {
        let token = make_token(r#"{"sub":"ada@example.com","exp":1893456000}"#);
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.sub.as_deref(), Some("ada@example.com"));
        assert_eq!(claims.exp, 1_893_456_000);
    }

    #[test]
    fn expiry_comparison_is_inclusive() {
        let claims = Claims {
            sub: None,
            exp: 1_000,
        };

        assert!(claims.is_expired(1_000));
        assert!(claims.is_expired(1_001));
        assert!(!claims.is_expired(999));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert_eq!(decode_claims("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
        assert_eq!(decode_claims(""), Err(TokenError::Malformed));
    }

    #[test]
    fn rejects_non_base64_payload() {
        assert_eq!(
            decode_claims("header.!!not-base64!!.sig"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn rejects_payload_without_exp() {
        let token = make_token(r#"{"sub":"ada@example.com"}"#);
        assert_eq!(decode_claims(&token), Err(TokenError::Payload));
    }

    #[test]
    fn rejects_payload_that_is_not_json() {
        let token = make_token("plain text");
        assert_eq!(decode_claims(&token), Err(TokenError::Payload));
    }
}
