//! Flare chain metadata
//!
//! Maps EVM chain ids to the networks receipts can be recorded on.

use crate::types::Network;

/// Flare mainnet chain id.
pub const FLARE_CHAIN_ID: u64 = 14;
/// Coston2 testnet chain id.
pub const COSTON2_CHAIN_ID: u64 = 114;

/// Static details of a supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    /// EVM chain id
    pub id: u64,
    /// Display name
    pub name: &'static str,
    /// Network receipts are recorded on
    pub network: Network,
    /// Native currency symbol
    pub currency: &'static str,
    /// Public JSON-RPC endpoint
    pub rpc_url: &'static str,
    /// Block explorer root
    pub explorer_url: &'static str,
}

static CHAINS: [ChainInfo; 2] = [
    ChainInfo {
        id: FLARE_CHAIN_ID,
        name: "Flare",
        network: Network::Flare,
        currency: "FLR",
        rpc_url: "https://flare-api.flare.network/ext/C/rpc",
        explorer_url: "https://flare-explorer.flare.network",
    },
    ChainInfo {
        id: COSTON2_CHAIN_ID,
        name: "Coston2",
        network: Network::Coston2,
        currency: "C2FLR",
        rpc_url: "https://coston2-api.flare.network/ext/C/rpc",
        explorer_url: "https://coston2-explorer.flare.network",
    },
];

/// Details for `chain_id`, if supported.
pub fn chain_info(chain_id: u64) -> Option<&'static ChainInfo> {
    CHAINS.iter().find(|chain| chain.id == chain_id)
}

/// Whether receipts can be recorded for `chain_id`.
pub fn is_supported_chain(chain_id: u64) -> bool {
    chain_info(chain_id).is_some()
}

/// Network for a wallet's chain id; Coston2 when unknown or absent.
pub fn detect_network(chain_id: Option<u64>) -> Network {
    chain_id
        .and_then(chain_info)
        .map(|chain| chain.network)
        .unwrap_or_default()
}

/// Currency symbol for a wallet's chain id; `C2FLR` when unknown or absent.
pub fn detect_currency(chain_id: Option<u64>) -> &'static str {
    chain_id
        .and_then(chain_info)
        .map_or("C2FLR", |chain| chain.currency)
}

/// Explorer link for a transaction, or an empty string for unknown chains.
pub fn explorer_tx_url(tx_hash: &str, chain_id: u64) -> String {
    chain_info(chain_id)
        .map(|chain| format!("{}/tx/{}", chain.explorer_url, tx_hash))
        .unwrap_or_default()
}

/// Explorer link for an address, or an empty string for unknown chains.
pub fn explorer_address_url(address: &str, chain_id: u64) -> String {
    chain_info(chain_id)
        .map(|chain| format!("{}/address/{}", chain.explorer_url, address))
        .unwrap_or_default()
}
