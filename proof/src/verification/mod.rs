use crate::verification::errors::VerificationError;
use providers::{
    evm::{address, Chain, Provider, RpcRegistry},
    BalanceQuerier, U256,
};

pub mod errors;

/// Checks whether `wallet_address` holds a non-zero balance of the ERC-20
/// token at `token_address` on `chain`.
///
/// Each invocation is independent: the endpoint is resolved, probed and
/// queried fresh, and nothing is cached or retried. A failed check is
/// surfaced as an error, never reported as "does not own the token".
pub async fn check_ownership(
    registry: &RpcRegistry,
    chain: Chain,
    token_address: &str,
    wallet_address: &str,
) -> Result<bool, VerificationError> {
    if chain.is_non_evm() {
        // TODO: query non-EVM balances (SPL token accounts, TRC-20) instead
        // of assuming ownership
        return Ok(true);
    }

    let rpc_url = registry
        .resolve(chain)
        .ok_or_else(|| VerificationError::NoEndpointForChain(format!("{chain:?}")))?;

    // Malformed input must never reach the wire, so both addresses are
    // validated before the endpoint is contacted.
    let token = address::parse_address(token_address)?;
    let wallet = address::parse_address(wallet_address)?;

    let provider = Provider::connect(rpc_url)?;
    provider.ensure_connected().await?;

    let balance = provider.get_fungible_balance(token, wallet).await?;

    log::debug!("balanceOf({wallet_address}) for token {token_address} on {chain:?} = {balance}");

    Ok(balance > U256::zero())
}
