//! Authentication adapters.

mod gotrue;
mod jwt;
mod mock;

pub use gotrue::{GoTrueAuthGateway, GoTrueConfig};
pub use jwt::JwtSessionResolver;
pub use mock::{MockAuthGateway, MockSessionResolver};
