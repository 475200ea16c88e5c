use crate::client::MissionApi;
use anyhow::{Context, Result};
use chrono::Utc;
use core_logic::Identity;
use ethers::signers::Signer;

const SIGN_IN_STATEMENT: &str =
    "To securely sign in, please sign this message to verify you're the owner of this wallet.";

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Domain shown in the sign-in message, e.g. `mission.superintent.ai`
    pub domain: String,
    /// Service URI embedded in the message
    pub uri: String,
    pub chain_id: u64,
}

/// Structured sign-in text. The server re-derives the exact same bytes
/// to verify the signature, so the layout must not drift.
#[derive(Debug, Clone)]
pub struct SignInMessage {
    pub domain: String,
    pub address: String,
    pub uri: String,
    pub chain_id: u64,
    pub nonce: String,
    pub issued_at: String,
}

impl SignInMessage {
    pub fn new(auth: &AuthConfig, address: &str, nonce: &str) -> Self {
        // UTC with millisecond precision and a literal trailing Z
        let issued_at = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
        Self {
            domain: auth.domain.clone(),
            address: address.to_string(),
            uri: auth.uri.clone(),
            chain_id: auth.chain_id,
            nonce: nonce.to_string(),
            issued_at,
        }
    }

    #[cfg(test)]
    fn with_issued_at(mut self, issued_at: &str) -> Self {
        self.issued_at = issued_at.to_string();
        self
    }

    pub fn render(&self) -> String {
        format!(
            "{domain} wants you to sign in with your Ethereum account:\n\
             {address}\n\
             \n\
             {statement}\n\
             \n\
             URI: {uri}\n\
             Version: 1\n\
             Chain ID: {chain_id}\n\
             Nonce: {nonce}\n\
             Issued At: {issued_at}",
            domain = self.domain,
            address = self.address,
            statement = SIGN_IN_STATEMENT,
            uri = self.uri,
            chain_id = self.chain_id,
            nonce = self.nonce,
            issued_at = self.issued_at,
        )
    }
}

/// Runs the signature handshake against an unauthenticated client.
///
/// Any failing step aborts with no partial session. No retry here: the
/// campaign treats a failed handshake as "this identity failed" and
/// moves on.
pub async fn login(api: &dyn MissionApi, identity: &Identity, auth: &AuthConfig) -> Result<()> {
    let nonce = api.fetch_nonce().await.context("Nonce fetch failed")?;

    let message = SignInMessage::new(auth, &identity.address, &nonce).render();
    let signature = sign_personal(identity, &message).await?;

    api.sign_in(&message, &signature)
        .await
        .context("Sign-in rejected")?;
    Ok(())
}

/// EIP-191 personal-message signature, serialized as 0x-prefixed hex.
async fn sign_personal(identity: &Identity, message: &str) -> Result<String> {
    let wallet = identity.signer().context("Failed to load signer")?;
    let signature = wallet
        .sign_message(message)
        .await
        .context("Failed to sign message")?;
    Ok(format!("0x{}", hex::encode(signature.to_vec())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthConfig {
        AuthConfig {
            domain: "mission.superintent.ai".to_string(),
            uri: "https://mission.superintent.ai".to_string(),
            chain_id: 1,
        }
    }

    #[test]
    fn render_matches_expected_layout() {
        let message = SignInMessage::new(
            &auth(),
            "0x1111111111111111111111111111111111111111",
            "n0nce",
        )
        .with_issued_at("2026-01-02T03:04:05.678Z");

        let expected = "mission.superintent.ai wants you to sign in with your Ethereum account:\n\
            0x1111111111111111111111111111111111111111\n\
            \n\
            To securely sign in, please sign this message to verify you're the owner of this wallet.\n\
            \n\
            URI: https://mission.superintent.ai\n\
            Version: 1\n\
            Chain ID: 1\n\
            Nonce: n0nce\n\
            Issued At: 2026-01-02T03:04:05.678Z";

        assert_eq!(message.render(), expected);
    }

    #[test]
    fn render_is_byte_identical_for_identical_inputs() {
        let first = SignInMessage::new(&auth(), "0xABCD", "nonce-1")
            .with_issued_at("2026-01-02T03:04:05.678Z");
        let second = SignInMessage::new(&auth(), "0xABCD", "nonce-1")
            .with_issued_at("2026-01-02T03:04:05.678Z");

        assert_eq!(first.render().into_bytes(), second.render().into_bytes());
    }

    #[test]
    fn issued_at_has_millisecond_precision_and_z_suffix() {
        let message = SignInMessage::new(&auth(), "0xABCD", "n");

        assert!(message.issued_at.ends_with('Z'));
        // 2026-01-02T03:04:05.678Z
        assert_eq!(message.issued_at.len(), 24);
        assert_eq!(message.issued_at.as_bytes()[19], b'.');
    }
}
