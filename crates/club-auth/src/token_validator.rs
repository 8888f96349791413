use crate::{AuthError, Result as AuthErrorResult, TokenClaims};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Decodes club credentials into their claims.
///
/// Expiry is not enforced by [`TokenValidator::decode`]; use
/// [`TokenValidator::decode_fresh`] or [`TokenClaims::ensure_fresh`] for that.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    verify_signature: bool,
}

impl TokenValidator {
    /// Decode the payload without checking the signature.
    pub fn unverified() -> Self {
        let mut validation = Self::base_validation(Algorithm::HS256);
        validation.insecure_disable_signature_validation();

        Self {
            decoding_key: DecodingKey::from_secret(&[]),
            validation,
            verify_signature: false,
        }
    }

    /// Decode and verify an HS256 signature.
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Self::base_validation(Algorithm::HS256),
            verify_signature: true,
        }
    }

    fn base_validation(algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        // Presence and format of `exp` are enforced by `TokenClaims` itself.
        validation.required_spec_claims.clear();
        validation
    }

    /// Decode a credential into its claims.
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<TokenClaims> {
        if token.split('.').count() != 3 {
            return Err(AuthError::Decode {
                message: "expected three dot-separated segments".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        AuthError::Signature {
                            source: e,
                            location: ErrorLocation::from(Location::caller()),
                        }
                    }
                    _ => AuthError::Decode {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        Ok(token_data.claims)
    }

    /// Decode and reject credentials expired at `now`.
    #[track_caller]
    pub fn decode_fresh(&self, token: &str, now: i64) -> AuthErrorResult<TokenClaims> {
        let claims = self.decode(token)?;
        claims.ensure_fresh(now)?;
        Ok(claims)
    }

    /// Mode name for logging
    pub fn mode(&self) -> &'static str {
        if self.verify_signature {
            "HS256"
        } else {
            "unverified"
        }
    }
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self::unverified()
    }
}
