pub mod address;
pub mod general;
pub mod registry;

pub use general::{Provider, ProviderError};
pub use registry::RpcRegistry;
use serde::Deserialize;
use std::collections::HashSet;

pub const ERC20_ABI: &[u8] = include_bytes!("abi/erc20.json");

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
    Vana,
    Ethereum,
    Base,
    OptimisticEthereum,
    BinanceSmartChain,
    PolygonPos,
    Opbnb,
    Zksync,
    Mantle,
    Scroll,
    ArbitrumOne,
    Avalanche,
    Linea,
    Blast,
    Solana,
    Xdai,
    Fantom,
    ZklinkNova,
    Tron,
    KucoinCommunityChain,
    MantaPacific,
    XLayer,
    MerlinChain,
    Bitlayer,
    Cronos,
}

lazy_static::lazy_static! {
    static ref NON_EVM_CHAINS: HashSet<u8> = {
        let mut h = HashSet::new();

        h.insert(Chain::Solana as u8);
        h.insert(Chain::Tron as u8);
        h.insert(Chain::ZklinkNova as u8);

        h
    };
}

impl Chain {
    pub const ALL: [Chain; 25] = [
        Chain::Vana,
        Chain::Ethereum,
        Chain::Base,
        Chain::OptimisticEthereum,
        Chain::BinanceSmartChain,
        Chain::PolygonPos,
        Chain::Opbnb,
        Chain::Zksync,
        Chain::Mantle,
        Chain::Scroll,
        Chain::ArbitrumOne,
        Chain::Avalanche,
        Chain::Linea,
        Chain::Blast,
        Chain::Solana,
        Chain::Xdai,
        Chain::Fantom,
        Chain::ZklinkNova,
        Chain::Tron,
        Chain::KucoinCommunityChain,
        Chain::MantaPacific,
        Chain::XLayer,
        Chain::MerlinChain,
        Chain::Bitlayer,
        Chain::Cronos,
    ];

    /// Chains that don't follow the EVM account/contract model. Their
    /// balances cannot be read through an ERC-20 `balanceOf` call.
    pub fn is_non_evm(self) -> bool {
        NON_EVM_CHAINS.contains(&(self as u8))
    }

    pub fn rpc_env_key(self) -> &'static str {
        match self {
            Chain::Vana => "VANA_RPC",
            Chain::Ethereum => "ETHEREUM_RPC",
            Chain::Base => "BASE_RPC",
            Chain::OptimisticEthereum => "OPTIMISM_RPC",
            Chain::BinanceSmartChain => "BSC_RPC",
            Chain::PolygonPos => "POLYGON_RPC",
            Chain::Opbnb => "OPBNB_RPC",
            Chain::Zksync => "ZKSYNC_RPC",
            Chain::Mantle => "MANTLE_RPC",
            Chain::Scroll => "SCROLL_RPC",
            Chain::ArbitrumOne => "ARBITRUM_RPC",
            Chain::Avalanche => "AVALANCHE_RPC",
            Chain::Linea => "LINEA_RPC",
            Chain::Blast => "BLAST_RPC",
            Chain::Solana => "SOLANA_RPC",
            Chain::Xdai => "GNOSIS_RPC",
            Chain::Fantom => "FANTOM_RPC",
            Chain::ZklinkNova => "ZKLINK_RPC",
            Chain::Tron => "TRON_RPC",
            Chain::KucoinCommunityChain => "KCC_RPC",
            Chain::MantaPacific => "MANTA_RPC",
            Chain::XLayer => "XLAYER_RPC",
            Chain::MerlinChain => "MERLIN_RPC",
            Chain::Bitlayer => "BITLAYER_RPC",
            Chain::Cronos => "CRONOS_RPC",
        }
    }
}
