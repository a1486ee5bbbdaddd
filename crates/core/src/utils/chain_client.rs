use crate::bindings::account_system::AccountSystem7702;
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use eyre::{Result, WrapErr, eyre};
use log::{debug, info};

/// The two reads the accept flow needs from the chain.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Current action-nonce counter of the account system deployed at (or
    /// delegated to by) `account`.
    async fn action_nonce(&self, account: Address) -> Result<U256>;
    async fn chain_id(&self) -> Result<u64>;
}

pub struct RpcChainClient<P> {
    provider: P,
}

impl<P> RpcChainClient<P>
where
    P: Provider + Clone,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P> ChainClient for RpcChainClient<P>
where
    P: Provider + Clone,
{
    async fn action_nonce(&self, account: Address) -> Result<U256> {
        let account_system = AccountSystem7702::new(account, self.provider.clone());
        let nonce = account_system.nonce().call().await?.nonce;
        Ok(nonce)
    }

    async fn chain_id(&self) -> Result<u64> {
        Ok(self.provider.get_chain_id().await?)
    }
}

impl<C> ChainClient for &C
where
    C: ChainClient,
{
    async fn action_nonce(&self, account: Address) -> Result<U256> {
        (**self).action_nonce(account).await
    }

    async fn chain_id(&self) -> Result<u64> {
        (**self).chain_id().await
    }
}

// Accepts http(s), ws(s) and ipc endpoints.
pub async fn connect(rpc_url: String) -> Result<impl ChainClient> {
    debug!("Connecting to {}", rpc_url);
    let provider = ProviderBuilder::new().on_builtin(&rpc_url).await?;
    Ok(RpcChainClient::new(provider))
}

/// Picks the nonce for the next action.
///
/// An explicit nonce is used as given. Otherwise the account's on-chain
/// counter is read and incremented. The read is not atomic with submission,
/// so two runs racing against the same account can compute the same nonce;
/// the account system rejects whichever lands second.
pub async fn resolve_action_nonce<C: ChainClient>(
    client: &C,
    account: Address,
    explicit: Option<U256>,
) -> Result<U256> {
    if let Some(nonce) = explicit {
        debug!("Using explicit action nonce {}", nonce);
        return Ok(nonce);
    }

    let current = client
        .action_nonce(account)
        .await
        .wrap_err("failed to get nonce")?;
    let next = current
        .checked_add(U256::from(1))
        .ok_or_else(|| eyre!("action nonce of {} is exhausted", account))?;
    info!("Account {} is at nonce {}, using {}", account, current, next);
    Ok(next)
}
