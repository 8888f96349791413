pub mod error;
pub mod token_claims;
pub mod token_validator;

pub use error::{AuthError, Result};
pub use token_claims::TokenClaims;
pub use token_validator::TokenValidator;
