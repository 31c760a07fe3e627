//! Demo driver: connect, load the payer, run the scenario.

use anyhow::Context;
use clap::Parser;
use solana_sdk::signature::Signer;
use spl_token_demo::{
    initialize_keypair, logging::init_logging, run_demo, DemoConfig, DemoPlan, Explorer,
    SolanaRpc,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DemoConfig::parse();
    init_logging(&config.log_filter);

    let rpc_url = config.rpc_url();
    let rpc = SolanaRpc::new(&rpc_url, config.commitment());
    let explorer = Explorer::for_endpoint(config.cluster, config.rpc_url.as_deref());
    info!(cluster = %config.cluster, url = %rpc_url, "connected");

    let user = initialize_keypair(&rpc, &config.env_file, config.airdrop_threshold_lamports())
        .await
        .context("failed to initialize payer keypair")?;

    let report = run_demo(&rpc, &explorer, &user, DemoPlan::with_decimals(config.decimals))
        .await
        .context("token demo failed")?;

    info!(
        payer = %user.pubkey(),
        mint = %report.mint,
        receiver = %report.receiver,
        "demo complete"
    );

    Ok(())
}
