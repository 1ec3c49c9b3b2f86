use ownership_proof::{
    types::{CheckOwnershipRequest, CheckOwnershipResult, RpcRegistry},
    verification,
};

pub async fn check_ownership(
    registry: &RpcRegistry,
    request: &CheckOwnershipRequest,
) -> CheckOwnershipResult {
    let checked = verification::check_ownership(
        registry,
        request.chain,
        &request.token_address,
        &request.wallet_address,
    )
    .await;

    match checked {
        Ok(owned) => CheckOwnershipResult {
            owned: Some(owned),
            error: None,
        },
        Err(e) => CheckOwnershipResult {
            owned: None,
            error: Some(e.to_string()),
        },
    }
}
