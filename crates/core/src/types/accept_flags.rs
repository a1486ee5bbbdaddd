use crate::utils::signer::SigningScheme;
use alloy::primitives::{Address, U256};
use eyre::{Result, eyre};
use std::path::PathBuf;

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// Raw flag values as they arrive from the command line.
#[derive(Debug, Clone)]
pub struct AcceptFlags {
    pub keyfile: String,
    pub password: String,
    pub rpc: String,
    pub target: String,
    pub account: String,
    pub action_nonce: Option<String>,
    pub value: String,
    pub fee_token: String,
    pub fee_value: String,
    pub is_basis_points: bool,
    pub chain_id: Option<String>,
    pub signing_scheme: Option<String>,
    pub domain_name: Option<String>,
    pub domain_version: Option<String>,
}

impl Default for AcceptFlags {
    fn default() -> Self {
        Self {
            keyfile: String::new(),
            password: String::new(),
            rpc: String::new(),
            target: String::new(),
            account: String::new(),
            action_nonce: None,
            value: "0".to_string(),
            fee_token: ZERO_ADDRESS.to_string(),
            fee_value: "0".to_string(),
            is_basis_points: false,
            chain_id: None,
            signing_scheme: None,
            domain_name: None,
            domain_version: None,
        }
    }
}

/// Typed inputs for a single `accept` run.
///
/// Produced only by [`AcceptFlags::validate`], so holding one means every
/// address and integer has already been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptParams {
    pub keyfile: PathBuf,
    pub password: String,
    pub rpc: String,
    pub target: Address,
    pub account: Address,
    pub action_nonce: Option<U256>,
    pub value: U256,
    pub fee_token: Address,
    pub fee_value: U256,
    pub is_basis_points: bool,
    pub chain_id: Option<u64>,
    pub signing_scheme: Option<SigningScheme>,
    pub domain_name: Option<String>,
    pub domain_version: Option<String>,
}

impl AcceptFlags {
    pub fn validate(&self) -> Result<AcceptParams> {
        if self.keyfile.is_empty() {
            return Err(eyre!(
                "--keyfile not specified (this should be a path to an Ethereum account keystore file)"
            ));
        }

        if self.rpc.is_empty() {
            return Err(eyre!(
                "--rpc not specified (this should be a URL to an Ethereum JSONRPC API)"
            ));
        }

        let target = parse_address("--target", &self.target)?;
        let account = parse_address("--account", &self.account)?;

        let action_nonce = match self.action_nonce.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_big_int("--action-nonce", raw)?),
        };

        let value = parse_big_int_or_zero("--value", &self.value)?;
        let fee_token = parse_address("--fee-token", &self.fee_token)?;
        let fee_value = parse_big_int_or_zero("--fee-value", &self.fee_value)?;

        let chain_id = match self.chain_id.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| eyre!("--chain-id is not a valid chain id"))?,
            ),
        };

        let signing_scheme = match self.signing_scheme.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<SigningScheme>()
                    .map_err(|e| eyre!("--signing-scheme {}", e))?,
            ),
        };

        Ok(AcceptParams {
            keyfile: PathBuf::from(&self.keyfile),
            password: self.password.clone(),
            rpc: self.rpc.clone(),
            target,
            account,
            action_nonce,
            value,
            fee_token,
            fee_value,
            is_basis_points: self.is_basis_points,
            chain_id,
            signing_scheme,
            domain_name: self.domain_name.clone().filter(|s| !s.is_empty()),
            domain_version: self.domain_version.clone().filter(|s| !s.is_empty()),
        })
    }
}

// 40 hex digits with an optional 0x prefix. Mixed case is accepted without
// checksum verification.
fn parse_address(flag: &str, raw: &str) -> Result<Address> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(eyre!("{} is not a valid Ethereum address", flag));
    }
    digits
        .parse::<Address>()
        .map_err(|_| eyre!("{} is not a valid Ethereum address", flag))
}

fn parse_big_int(flag: &str, raw: &str) -> Result<U256> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(eyre!("{} is not a valid big integer", flag));
    }
    U256::from_str_radix(raw, 10).map_err(|_| eyre!("{} is not a valid big integer", flag))
}

fn parse_big_int_or_zero(flag: &str, raw: &str) -> Result<U256> {
    if raw.is_empty() {
        return Ok(U256::ZERO);
    }
    parse_big_int(flag, raw)
}
