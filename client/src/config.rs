//! Demo Configuration
//!
//! Everything has a default, so running the binary with no arguments
//! targets devnet with the keypair stored in `./.env`.
//! Each flag can also be set through its environment variable.

use clap::{Parser, ValueEnum};
use solana_sdk::{commitment_config::CommitmentConfig, native_token::LAMPORTS_PER_SOL};
use std::{fmt, path::PathBuf};

// =============================================================================
// CLUSTER
// =============================================================================

/// Public Solana clusters the demo knows how to reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Cluster {
    Devnet,
    Testnet,
    #[value(name = "mainnet-beta")]
    MainnetBeta,
    /// A `solana-test-validator` on this machine.
    Localnet,
}

impl Cluster {
    /// Default JSON-RPC endpoint for the cluster.
    pub fn url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://localhost:8899",
        }
    }

    /// Name used in explorer `?cluster=` query strings.
    pub fn name(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// DEMO CONFIG
// =============================================================================

/// Command line / environment configuration for the demo binary.
#[derive(Parser, Clone, Debug)]
#[command(name = "spl-token-demo", version, about)]
pub struct DemoConfig {
    /// Cluster to run against.
    #[arg(long, env = "SOLANA_CLUSTER", value_enum, default_value_t = Cluster::Devnet)]
    pub cluster: Cluster,

    /// Override the cluster's RPC endpoint.
    #[arg(long, env = "SOLANA_RPC_URL")]
    pub rpc_url: Option<String>,

    /// File holding `PRIVATE_KEY=[..]`; created if missing.
    #[arg(long, env = "DEMO_ENV_FILE", default_value = ".env")]
    pub env_file: PathBuf,

    /// Decimals of the demo mint.
    #[arg(long, env = "DEMO_DECIMALS", default_value_t = 2)]
    pub decimals: u8,

    /// Airdrop 1 SOL when the payer holds less than this many SOL.
    #[arg(long, env = "DEMO_AIRDROP_THRESHOLD_SOL", default_value_t = 1.0)]
    pub airdrop_threshold_sol: f64,

    /// tracing filter directive.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl DemoConfig {
    /// The endpoint actually used: the override if present, else the cluster default.
    pub fn rpc_url(&self) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| self.cluster.url().to_string())
    }

    pub fn commitment(&self) -> CommitmentConfig {
        CommitmentConfig::confirmed()
    }

    /// Airdrop threshold in lamports. Negative or NaN input counts as zero.
    pub fn airdrop_threshold_lamports(&self) -> u64 {
        sol_to_lamports(self.airdrop_threshold_sol)
    }
}

/// Convert SOL to lamports, saturating at the u64 bounds.
pub fn sol_to_lamports(sol: f64) -> u64 {
    // `as` saturates float-to-int casts and maps NaN to 0.
    (sol * LAMPORTS_PER_SOL as f64) as u64
}
