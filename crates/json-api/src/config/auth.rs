//! Auth Config

use clap::Args;
use jiff::SignedDuration;

/// Bearer token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Lifetime of tokens issued by `POST /login`, in hours.
    #[arg(
        long,
        env = "TOKEN_TTL_HOURS",
        default_value_t = 240_u32,
        value_parser = clap::value_parser!(u32).range(1..=8_760)
    )]
    pub token_ttl_hours: u32,
}

impl AuthConfig {
    #[must_use]
    pub fn token_ttl(&self) -> SignedDuration {
        SignedDuration::from_hours(i64::from(self.token_ttl_hours))
    }
}
