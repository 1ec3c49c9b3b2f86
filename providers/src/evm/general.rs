use crate::{evm::ERC20_ABI, BalanceQuerier};
use async_trait::async_trait;
use web3::{
    contract::{Contract, Options},
    transports::Http,
    types::{Address, U256},
    Web3,
};

pub struct Provider {
    rpc_url: String,
    pub single: Web3<Http>,
}

impl Provider {
    pub fn connect(rpc_url: &str) -> Result<Self, ProviderError> {
        let transport =
            Http::new(rpc_url).map_err(|_| ProviderError::Connectivity(rpc_url.to_string()))?;

        Ok(Self {
            rpc_url: rpc_url.to_string(),
            single: Web3::new(transport),
        })
    }

    /// Liveness probe (`web3_clientVersion`). A dead endpoint must surface
    /// as a connectivity failure rather than an ambiguous decode failure on
    /// the contract call that would follow.
    pub async fn ensure_connected(&self) -> Result<(), ProviderError> {
        self.single
            .web3()
            .client_version()
            .await
            .map(|_| ())
            .map_err(|_| ProviderError::Connectivity(self.rpc_url.clone()))
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("RPC endpoint `{0}` is unreachable")]
    Connectivity(String),
    #[error("Invalid address `{0}`")]
    InvalidAddress(String),
    #[error(transparent)]
    Call(#[from] web3::contract::Error),
}

#[async_trait]
impl BalanceQuerier for Provider {
    type Address = Address;
    type Balance = U256;
    type Error = ProviderError;

    async fn get_fungible_balance(
        &self,
        token_address: Self::Address,
        owner_address: Self::Address,
    ) -> Result<Self::Balance, Self::Error> {
        let contract = Contract::from_json(self.single.eth(), token_address, ERC20_ABI)
            .map_err(|e| ProviderError::Call(e.into()))?;

        contract
            .query("balanceOf", (owner_address,), None, Options::default(), None)
            .await
            .map_err(ProviderError::Call)
    }
}

#[cfg(test)]
mod test {
    use crate::evm::{general::ProviderError, Provider};

    // Port 1 is unassigned on loopback, so the probe gets a refused
    // connection instead of an RPC response.
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

    #[tokio::test]
    async fn probe_fails_on_unreachable_endpoint() {
        let provider = Provider::connect(DEAD_ENDPOINT).unwrap();

        let err = provider.ensure_connected().await.unwrap_err();

        assert!(matches!(err, ProviderError::Connectivity(_)));
    }
}
