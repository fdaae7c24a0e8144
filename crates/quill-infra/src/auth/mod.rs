//! Token validation adapter.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService};
