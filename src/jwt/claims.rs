use serde::{Deserialize, Serialize};

/// Audience accepted by the Ghost Admin API.
pub const ADMIN_AUDIENCE: &str = "/admin/";

/// Audience used by the versioned `/v5/admin/` API.
pub const ADMIN_V5_AUDIENCE: &str = "/v5/admin/";

/// Token lifetime in seconds (5 minutes).
pub const TOKEN_TTL_SECONDS: i64 = 300;

/// Claims carried by an admin token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminClaims {
    pub iat: i64,
    pub exp: i64,
    pub aud: String,
}

impl AdminClaims {
    pub fn new(issued_at: i64, ttl_seconds: i64, audience: impl Into<String>) -> Self {
        AdminClaims {
            iat: issued_at,
            exp: issued_at + ttl_seconds,
            aud: audience.into(),
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.exp - self.iat
    }

    pub fn is_valid_at(&self, timestamp: i64) -> bool {
        timestamp >= self.iat && timestamp < self.exp
    }
}
