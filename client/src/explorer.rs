//! Block Explorer Links
//!
//! Every mint, account and transaction the demo produces is logged as a
//! link to the Solana explorer:
//!
//! ```text
//! https://explorer.solana.com/address/<pubkey>?cluster=devnet
//! https://explorer.solana.com/tx/<signature>?cluster=devnet
//! ```
//!
//! Mainnet links carry no cluster parameter. Custom endpoints use the
//! explorer's `cluster=custom&customUrl=<url>` form.

use crate::config::Cluster;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use url::form_urlencoded;

const EXPLORER_BASE: &str = "https://explorer.solana.com";

/// Builds explorer URLs for one cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explorer {
    query: String,
}

impl Explorer {
    /// Links for a well-known cluster.
    pub fn new(cluster: Cluster) -> Self {
        match cluster {
            Cluster::MainnetBeta => Self {
                query: String::new(),
            },
            Cluster::Localnet => Self::custom(cluster.url()),
            _ => Self {
                query: format!("?cluster={}", cluster.name()),
            },
        }
    }

    /// Links for an arbitrary RPC endpoint.
    pub fn custom(rpc_url: &str) -> Self {
        let encoded: String = form_urlencoded::byte_serialize(rpc_url.as_bytes()).collect();
        Self {
            query: format!("?cluster=custom&customUrl={}", encoded),
        }
    }

    /// Pick the right form for a cluster and optional endpoint override.
    pub fn for_endpoint(cluster: Cluster, rpc_url: Option<&str>) -> Self {
        match rpc_url {
            Some(url) if url != cluster.url() => Self::custom(url),
            _ => Self::new(cluster),
        }
    }

    /// Link to an account (mint, token account, wallet).
    pub fn address(&self, address: &Pubkey) -> String {
        format!("{}/address/{}{}", EXPLORER_BASE, address, self.query)
    }

    /// Link to a transaction.
    pub fn tx(&self, signature: &Signature) -> String {
        format!("{}/tx/{}{}", EXPLORER_BASE, signature, self.query)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(Cluster::Devnet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devnet_address_link() {
        let key = Pubkey::new_unique();
        assert_eq!(
            Explorer::new(Cluster::Devnet).address(&key),
            format!("https://explorer.solana.com/address/{}?cluster=devnet", key)
        );
    }

    #[test]
    fn test_tx_link() {
        let sig = Signature::default();
        assert_eq!(
            Explorer::new(Cluster::Testnet).tx(&sig),
            format!("https://explorer.solana.com/tx/{}?cluster=testnet", sig)
        );
    }

    #[test]
    fn test_mainnet_has_no_cluster_param() {
        let key = Pubkey::new_unique();
        assert_eq!(
            Explorer::new(Cluster::MainnetBeta).address(&key),
            format!("https://explorer.solana.com/address/{}", key)
        );
    }

    #[test]
    fn test_custom_endpoint_is_encoded() {
        let explorer = Explorer::for_endpoint(Cluster::Devnet, Some("http://127.0.0.1:8899"));
        let link = explorer.tx(&Signature::default());
        assert!(link.ends_with("?cluster=custom&customUrl=http%3A%2F%2F127.0.0.1%3A8899"));
    }

    #[test]
    fn test_override_equal_to_default_keeps_cluster() {
        let explorer =
            Explorer::for_endpoint(Cluster::Devnet, Some("https://api.devnet.solana.com"));
        assert_eq!(explorer, Explorer::new(Cluster::Devnet));
    }
}
