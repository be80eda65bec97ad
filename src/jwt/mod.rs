pub mod builder;
pub mod claims;
pub mod key;
pub mod serializer;

pub use builder::{build_token, AdminTokenBuilder};
pub use claims::{AdminClaims, ADMIN_AUDIENCE, ADMIN_V5_AUDIENCE, TOKEN_TTL_SECONDS};
pub use key::AdminKey;
pub use serializer::JwtSerializer;
