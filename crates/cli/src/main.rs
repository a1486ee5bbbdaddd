use account7702::types::accept_flags::{AcceptFlags, ZERO_ADDRESS};
use account7702::types::config_wrapper::ConfigWrapper;
use account7702::{accept, connect};
use clap::{ArgAction, Parser, Subcommand};
use dotenv::dotenv;
use eyre::Result;
use log::debug;
use std::env;

const PASSWORD_ENV: &str = "KEYSTORE_PASSWORD";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(long = "config", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accept a slot machine
    Accept {
        /// The keyfile to use to sign the transaction
        #[arg(long = "keyfile")]
        keyfile: String,

        /// The password to use to sign the transaction (falls back to $KEYSTORE_PASSWORD)
        #[arg(long = "password")]
        password: Option<String>,

        /// The RPC to use, as a URL, env:VAR, or an [rpc_endpoints] name from the config
        #[arg(long = "rpc")]
        rpc: String,

        /// The DegenGambit contract to accept on
        #[arg(long = "target")]
        target: String,

        /// The EIP-7702 account the action executes from
        #[arg(long = "account")]
        account: String,

        /// The action nonce to use (read from the account and incremented when omitted)
        #[arg(long = "action-nonce")]
        action_nonce: Option<String>,

        /// The value to forward with the call
        #[arg(long = "value", default_value = "0")]
        value: String,

        /// The fee token, zero address for native currency
        #[arg(long = "fee-token", default_value = ZERO_ADDRESS)]
        fee_token: String,

        /// The fee value
        #[arg(long = "fee-value", default_value = "0")]
        fee_value: String,

        /// Whether the fee value is a basis point
        #[arg(
            long = "is-basis-points",
            action = ArgAction::Set,
            num_args = 0..=1,
            default_value_t = false,
            default_missing_value = "true"
        )]
        is_basis_points: bool,

        /// Chain id for the EIP-712 domain (queried from the RPC when omitted)
        #[arg(long = "chain-id")]
        chain_id: Option<String>,

        /// Digest to sign: eip712 (default) or personal
        #[arg(long = "signing-scheme")]
        signing_scheme: Option<String>,

        /// EIP-712 domain name
        #[arg(long = "domain-name")]
        domain_name: Option<String>,

        /// EIP-712 domain version
        #[arg(long = "domain-version")]
        domain_version: Option<String>,
    },
}

impl Commands {
    // Password is left empty here and resolved after validation.
    fn accept_flags(&self) -> (AcceptFlags, Option<String>) {
        match self {
            Commands::Accept {
                keyfile,
                password,
                rpc,
                target,
                account,
                action_nonce,
                value,
                fee_token,
                fee_value,
                is_basis_points,
                chain_id,
                signing_scheme,
                domain_name,
                domain_version,
            } => (
                AcceptFlags {
                    keyfile: keyfile.clone(),
                    password: String::new(),
                    rpc: rpc.clone(),
                    target: target.clone(),
                    account: account.clone(),
                    action_nonce: action_nonce.clone(),
                    value: value.clone(),
                    fee_token: fee_token.clone(),
                    fee_value: fee_value.clone(),
                    is_basis_points: *is_basis_points,
                    chain_id: chain_id.clone(),
                    signing_scheme: signing_scheme.clone(),
                    domain_name: domain_name.clone(),
                    domain_version: domain_version.clone(),
                },
                password.clone(),
            ),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Accept { .. } => {
            let (mut flags, password) = cli.command.accept_flags();

            // Reject malformed flags before touching the filesystem.
            flags.validate()?;

            dotenv().ok();
            flags.password = password
                .or_else(|| env::var(PASSWORD_ENV).ok())
                .unwrap_or_default();

            let config = ConfigWrapper::from_file(cli.config.as_deref())?;
            let report = accept(&flags, &config, connect).await?;
            debug!("Accept run complete");

            println!("{}", report);
        }
    }

    Ok(())
}
