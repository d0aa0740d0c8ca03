pub mod jwt_token_issuer;

pub use jwt_token_issuer::{JwtClaims, JwtTokenIssuer};
