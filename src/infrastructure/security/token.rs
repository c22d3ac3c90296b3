// src/infrastructure/security/token.rs
use crate::application::{
    dto::Principal,
    error::{ApplicationError, ApplicationResult},
    ports::security::PrincipalResolver,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, PublicKey,
    builder::{Algorithm, AuthorizerBuilder},
};

/// Verifies biscuit tokens minted by the external identity provider. Only the
/// root public key is held here; this service never issues tokens.
#[derive(Clone)]
pub struct BiscuitPrincipalResolver {
    public: PublicKey,
}

impl BiscuitPrincipalResolver {
    pub fn new(public_key_hex: &str) -> ApplicationResult<Self> {
        let public = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { public })
    }
}

#[async_trait]
impl PrincipalResolver for BiscuitPrincipalResolver {
    async fn authenticate(&self, token: &str) -> ApplicationResult<Principal> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // Token checks (expiry and friends) run against the current time.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if user($id);")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        crate::infrastructure::security::claims::parse_claims(facts)
    }
}
