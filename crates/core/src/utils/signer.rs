use crate::bindings::account_system::AccountSystem7702::Action;
use alloy::primitives::{Address, B256, Bytes, U256, keccak256};
use alloy::signers::SignerSync;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::{Eip712Domain, SolStruct, SolValue};
use eyre::{Result, WrapErr, eyre};
use log::debug;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_DOMAIN_NAME: &str = "AccountSystem7702";
pub const DEFAULT_DOMAIN_VERSION: &str = "1";

/// How an [`Action`] is turned into the digest the account system recovers
/// the signer from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningScheme {
    /// EIP-712 typed data over the `Action` struct.
    #[default]
    Eip712,
    /// EIP-191 `personal_sign` over `keccak256(abi.encode(action))`.
    Personal,
}

impl FromStr for SigningScheme {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "eip712" | "eip-712" => Ok(SigningScheme::Eip712),
            "personal" | "eip191" | "eip-191" => Ok(SigningScheme::Personal),
            other => Err(eyre!(
                "must be one of eip712, personal (got {:?})",
                other
            )),
        }
    }
}

impl fmt::Display for SigningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningScheme::Eip712 => write!(f, "eip712"),
            SigningScheme::Personal => write!(f, "personal"),
        }
    }
}

pub enum ActionSigner {
    Eip712(Eip712Domain),
    Personal,
}

impl ActionSigner {
    // The delegated EOA is the verifying contract under EIP-7702.
    pub fn eip712(name: &str, version: &str, chain_id: u64, account: Address) -> Self {
        ActionSigner::Eip712(Eip712Domain::new(
            Some(Cow::Owned(name.to_string())),
            Some(Cow::Owned(version.to_string())),
            Some(U256::from(chain_id)),
            Some(account),
            None,
        ))
    }

    pub fn personal() -> Self {
        ActionSigner::Personal
    }

    pub fn scheme(&self) -> SigningScheme {
        match self {
            ActionSigner::Eip712(_) => SigningScheme::Eip712,
            ActionSigner::Personal => SigningScheme::Personal,
        }
    }

    /// The 32-byte value the signature commits to, before any EIP-191 prefix.
    pub fn digest(&self, action: &Action) -> B256 {
        match self {
            ActionSigner::Eip712(domain) => action.eip712_signing_hash(domain),
            ActionSigner::Personal => keccak256(action.abi_encode()),
        }
    }

    /// Returns a 65-byte `r || s || v` signature with `v` in {27, 28}.
    pub fn sign(&self, action: &Action, key: &PrivateKeySigner) -> Result<Bytes> {
        let digest = self.digest(action);
        debug!("Signing action digest {} ({})", digest, self.scheme());

        let signature = match self {
            ActionSigner::Eip712(_) => key.sign_hash_sync(&digest),
            ActionSigner::Personal => key.sign_message_sync(digest.as_slice()),
        }
        .wrap_err("failed to sign action")?;

        Ok(Bytes::copy_from_slice(&signature.as_bytes()))
    }
}
