use crate::error::TokenError;
use crate::jwt::claims::AdminClaims;
use crate::jwt::key::AdminKey;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{crypto, decode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token header, serialized as `{"alg","kid","typ"}` in that order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminHeader {
    pub alg: String,
    pub kid: String,
    pub typ: String,
}

/// Compact HS256 serializer for admin tokens.
pub struct JwtSerializer {
    algorithm: Algorithm,
}

impl Default for JwtSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl JwtSerializer {
    pub fn new() -> Self {
        JwtSerializer {
            algorithm: Algorithm::HS256,
        }
    }

    pub fn header(&self, key: &AdminKey) -> AdminHeader {
        AdminHeader {
            alg: "HS256".to_string(),
            kid: key.key_id().to_string(),
            typ: "JWT".to_string(),
        }
    }

    /// Encodes `<header>.<claims>` and appends the HMAC-SHA256 signature.
    pub fn serialize(&self, claims: &AdminClaims, key: &AdminKey) -> Result<String, TokenError> {
        let header = encode_segment(&self.header(key))?;
        let payload = encode_segment(claims)?;
        let message = format!("{header}.{payload}");

        let signature = crypto::sign(
            message.as_bytes(),
            &EncodingKey::from_secret(key.secret()),
            self.algorithm,
        )?;

        Ok(format!("{message}.{signature}"))
    }

    /// Verifies signature and audience, then checks the validity window at `now`.
    pub fn verify(
        &self,
        token: &str,
        secret: &[u8],
        audience: &str,
        now: i64,
    ) -> Result<AdminClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.set_audience(&[audience]);

        let token_data = decode::<AdminClaims>(token, &DecodingKey::from_secret(secret), &validation)
            .map_err(|e| TokenError::JwtDecoding(e.to_string()))?;

        if !token_data.claims.is_valid_at(now) {
            return Err(TokenError::JwtDecoding(format!(
                "token not valid at {now} (iat {}, exp {})",
                token_data.claims.iat, token_data.claims.exp
            )));
        }

        Ok(token_data.claims)
    }

    pub fn decode_header(&self, token: &str) -> Result<Header, TokenError> {
        jsonwebtoken::decode_header(token).map_err(|e| TokenError::JwtDecoding(e.to_string()))
    }

    pub fn decode_claims_unverified(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(TokenError::JwtDecoding("Invalid token format".to_string()));
        }

        let payload = URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| TokenError::JwtDecoding(e.to_string()))?;

        serde_json::from_slice(&payload).map_err(|e| TokenError::JwtDecoding(e.to_string()))
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value).map_err(|e| TokenError::JwtEncoding(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::claims::{ADMIN_AUDIENCE, TOKEN_TTL_SECONDS};

    fn test_key() -> AdminKey {
        AdminKey::parse("abc123:48656c6c6f").unwrap()
    }

    #[test]
    fn test_serialize_then_verify() {
        let serializer = JwtSerializer::new();
        let key = test_key();
        let claims = AdminClaims::new(1_000_000_000, TOKEN_TTL_SECONDS, ADMIN_AUDIENCE);

        let token = serializer.serialize(&claims, &key).unwrap();
        let verified = serializer
            .verify(&token, key.secret(), ADMIN_AUDIENCE, 1_000_000_001)
            .unwrap();

        assert_eq!(verified, claims);
    }

    #[test]
    fn test_header_fields() {
        let serializer = JwtSerializer::new();
        let key = test_key();
        let claims = AdminClaims::new(0, TOKEN_TTL_SECONDS, ADMIN_AUDIENCE);
        let token = serializer.serialize(&claims, &key).unwrap();

        let header = serializer.decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.kid.as_deref(), Some("abc123"));
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn test_header_segment_field_order() {
        let serializer = JwtSerializer::new();
        let claims = AdminClaims::new(1_000_000_000, TOKEN_TTL_SECONDS, ADMIN_AUDIENCE);
        let token = serializer.serialize(&claims, &test_key()).unwrap();

        let segment = token.split('.').next().unwrap();
        let json = URL_SAFE_NO_PAD.decode(segment).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            r#"{"alg":"HS256","kid":"abc123","typ":"JWT"}"#
        );
    }

    #[test]
    fn test_no_padding_in_segments() {
        let serializer = JwtSerializer::new();
        let claims = AdminClaims::new(1_000_000_000, TOKEN_TTL_SECONDS, ADMIN_AUDIENCE);
        let token = serializer.serialize(&claims, &test_key()).unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert!(!token.contains('='));
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let serializer = JwtSerializer::new();
        let claims = AdminClaims::new(1_000, TOKEN_TTL_SECONDS, ADMIN_AUDIENCE);
        let token = serializer.serialize(&claims, &test_key()).unwrap();

        let result = serializer.verify(&token, b"other", ADMIN_AUDIENCE, 1_001);
        assert!(matches!(result, Err(TokenError::JwtDecoding(_))));
    }

    #[test]
    fn test_verify_rejects_wrong_audience() {
        let serializer = JwtSerializer::new();
        let key = test_key();
        let claims = AdminClaims::new(1_000, TOKEN_TTL_SECONDS, ADMIN_AUDIENCE);
        let token = serializer.serialize(&claims, &key).unwrap();

        let result = serializer.verify(&token, key.secret(), "/v5/admin/", 1_001);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_expired() {
        let serializer = JwtSerializer::new();
        let key = test_key();
        let claims = AdminClaims::new(1_000, TOKEN_TTL_SECONDS, ADMIN_AUDIENCE);
        let token = serializer.serialize(&claims, &key).unwrap();

        assert!(serializer.verify(&token, key.secret(), ADMIN_AUDIENCE, 1_300).is_err());
    }

    #[test]
    fn test_decode_claims_unverified_rejects_garbage() {
        let serializer = JwtSerializer::new();
        assert!(serializer.decode_claims_unverified("not-a-token").is_err());
    }
}
