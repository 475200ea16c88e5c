use crate::error::WalletError;
use ethers::signers::{LocalWallet, Signer};
use ethers::utils::to_checksum;
use rand::rngs::OsRng;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A freshly generated wallet identity: secret key plus its EIP-55
/// checksummed address. Immutable once created; the key is wiped from
/// memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Identity {
    /// 0x-prefixed hex private key
    pub private_key: String,
    /// Checksum-cased address derived from the key
    pub address: String,
}

impl Identity {
    /// Re-derives the signing wallet from the stored key.
    pub fn signer(&self) -> Result<LocalWallet, WalletError> {
        let key = self.private_key.trim_start_matches("0x");
        if key.len() != 64 {
            return Err(WalletError::InvalidKeyLength { length: key.len() });
        }
        key.parse::<LocalWallet>()
            .map_err(|_| WalletError::InvalidKeyFormat)
    }

    /// Abbreviated address for log lines, e.g. `0x1234...aBcD`.
    pub fn short_address(&self) -> String {
        if self.address.len() < 10 {
            return self.address.clone();
        }
        format!(
            "{}...{}",
            &self.address[..6],
            &self.address[self.address.len() - 4..]
        )
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("address", &self.address)
            .field("private_key", &"***REDACTED***")
            .finish()
    }
}

pub struct WalletGenerator;

impl WalletGenerator {
    /// Creates a new random identity from the OS CSPRNG.
    pub fn generate() -> Identity {
        let wallet = LocalWallet::new(&mut OsRng);
        Self::from_wallet(&wallet)
    }

    /// Builds an identity from an existing private key (0x prefix optional).
    pub fn from_private_key(key: &str) -> Result<Identity, WalletError> {
        let trimmed = key.trim().trim_start_matches("0x");
        if trimmed.len() != 64 {
            return Err(WalletError::InvalidKeyLength {
                length: trimmed.len(),
            });
        }
        let wallet: LocalWallet = trimmed
            .parse()
            .map_err(|_| WalletError::InvalidKeyFormat)?;
        Ok(Self::from_wallet(&wallet))
    }

    fn from_wallet(wallet: &LocalWallet) -> Identity {
        Identity {
            private_key: format!("0x{}", hex::encode(wallet.signer().to_bytes().as_slice())),
            address: to_checksum(&wallet.address(), None),
        }
    }
}
