pub mod actions {
    pub mod accept_action;
    pub mod execute_call;
}
pub mod bindings {
    pub mod account_system;
    pub mod degen_gambit;
}
pub mod types {
    pub mod accept_flags;
    pub mod accept_report;
    pub mod config_wrapper;
}
pub mod utils {
    pub mod chain_client;
    pub mod keystore;
    pub mod signer;
}

use crate::actions::accept_action::AcceptAction;
use crate::actions::execute_call::pack_execute;
use crate::types::accept_flags::AcceptFlags;
use crate::types::accept_report::AcceptReport;
use crate::types::config_wrapper::ConfigWrapper;
use crate::utils::chain_client::{ChainClient, resolve_action_nonce};
use crate::utils::keystore::{check_account, load_signer};
use crate::utils::signer::{
    ActionSigner, DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION, SigningScheme,
};
use eyre::{Result, WrapErr};
use log::{debug, info};
use std::future::Future;

pub use crate::utils::chain_client::connect;

/// Builds, signs and packs an `execute` call that makes `account` accept its
/// pending DegenGambit outcome.
///
/// Flags are validated before anything else happens; the keystore is opened
/// next and `dial` is only invoked once both have succeeded.
pub async fn accept<C, F, Fut>(
    flags: &AcceptFlags,
    config: &ConfigWrapper,
    dial: F,
) -> Result<AcceptReport>
where
    C: ChainClient,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<C>>,
{
    let params = flags.validate()?;

    let signing_config = config.get_signing_config()?;
    let scheme = match (params.signing_scheme, signing_config.scheme.as_deref()) {
        (Some(scheme), _) => scheme,
        (None, Some(raw)) => raw
            .parse::<SigningScheme>()
            .wrap_err("invalid signing.scheme in config")?,
        (None, None) => SigningScheme::default(),
    };
    let rpc_url = config.get_rpc_url(&params.rpc)?;

    let key = load_signer(&params.keyfile, &params.password).wrap_err("Failed to load key")?;
    check_account(&key, params.account);

    let client = dial(rpc_url).await.wrap_err("failed to connect to RPC")?;

    let nonce = resolve_action_nonce(&client, params.account, params.action_nonce).await?;

    let accept_action = AcceptAction::new(&params, nonce);
    debug!("{}", accept_action.describe());
    let action = accept_action.build();

    let action_signer = match scheme {
        SigningScheme::Eip712 => {
            let chain_id = match params.chain_id {
                Some(chain_id) => chain_id,
                None => client
                    .chain_id()
                    .await
                    .wrap_err("failed to get chain id")?,
            };
            let name = params
                .domain_name
                .as_deref()
                .or(signing_config.domain_name.as_deref())
                .unwrap_or(DEFAULT_DOMAIN_NAME);
            let version = params
                .domain_version
                .as_deref()
                .or(signing_config.domain_version.as_deref())
                .unwrap_or(DEFAULT_DOMAIN_VERSION);
            info!(
                "Signing with EIP-712 domain {} v{} on chain {}",
                name, version, chain_id
            );
            ActionSigner::eip712(name, version, chain_id, params.account)
        }
        SigningScheme::Personal => ActionSigner::personal(),
    };

    let signature = action_signer.sign(&action, &key)?;
    let calldata = pack_execute(vec![action.clone()], vec![signature.clone()])?;

    Ok(AcceptReport {
        signature,
        action,
        calldata,
    })
}
