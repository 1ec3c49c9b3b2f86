pub mod evm;

use async_trait::async_trait;

pub use evm::{Chain, Provider, RpcRegistry};
pub use web3::types::{Address, U256};

#[async_trait]
pub trait BalanceQuerier {
    type Address;
    type Balance;
    type Error;

    async fn get_fungible_balance(
        &self,
        token_address: Self::Address,
        owner_address: Self::Address,
    ) -> Result<Self::Balance, Self::Error>;
}

#[macro_export]
macro_rules! address {
    ($addr:expr) => {{
        use std::str::FromStr;
        web3::types::Address::from_str($addr).expect(&format!("Invalid address {}", $addr))
    }};
}
