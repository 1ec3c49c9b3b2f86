use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub use providers::{Address, Chain, RpcRegistry, U256};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckOwnershipRequest {
    pub chain: Chain,
    pub token_address: String,
    pub wallet_address: String,
}

/// `owned` is only present when ownership was positively determined one way
/// or the other; a failed check carries `error` instead and is never
/// reported as `owned: false`.
#[skip_serializing_none]
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckOwnershipResult {
    pub owned: Option<bool>,
    pub error: Option<String>,
}

#[cfg(test)]
mod test {
    use crate::types::{Chain, CheckOwnershipRequest, CheckOwnershipResult};

    #[test]
    fn request_deserializes_from_camel_case() {
        let request: CheckOwnershipRequest = serde_json::from_str(
            r#"{
                "chain": "optimistic-ethereum",
                "tokenAddress": "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
                "walletAddress": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
            }"#,
        )
        .unwrap();

        assert_eq!(request.chain, Chain::OptimisticEthereum);
        assert_eq!(
            request.token_address,
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"
        );
    }

    #[test]
    fn result_omits_absent_fields() {
        let ok = CheckOwnershipResult {
            owned: Some(true),
            error: None,
        };
        let failed = CheckOwnershipResult {
            owned: None,
            error: Some("boom".to_string()),
        };

        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"owned":true}"#);
        assert_eq!(
            serde_json::to_string(&failed).unwrap(),
            r#"{"error":"boom"}"#
        );
    }
}
