use crate::evm::Chain;
use std::collections::HashMap;

/// Chain -> RPC endpoint URL mapping. Built once at process start and
/// read-only afterwards; resolution is a pure lookup with no side effects.
#[derive(Default)]
pub struct RpcRegistry {
    urls: HashMap<u8, String>,
}

impl RpcRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chain: Chain, rpc_url: String) {
        self.urls.insert(chain as u8, rpc_url);
    }

    /// Reads one `{NAME}_RPC` variable per known chain. Chains whose
    /// variable is unset stay absent from the registry and fail resolution
    /// at call time instead of falling back to a shared public endpoint.
    pub fn from_env() -> Self {
        let mut registry = Self::new();

        for chain in Chain::ALL {
            match std::env::var(chain.rpc_env_key()) {
                Ok(url) => registry.insert(chain, url),
                Err(_) => log::warn!(
                    "Environment variable `{}` not found, chain {:?} will be unavailable",
                    chain.rpc_env_key(),
                    chain
                ),
            }
        }

        registry
    }

    pub fn resolve(&self, chain: Chain) -> Option<&str> {
        self.urls.get(&(chain as u8)).map(String::as_str)
    }
}

#[cfg(test)]
mod test {
    use crate::evm::{Chain, RpcRegistry};

    #[test]
    fn resolve_known_chain() {
        let mut registry = RpcRegistry::new();
        registry.insert(Chain::Ethereum, "http://localhost:8545".to_string());

        assert_eq!(
            registry.resolve(Chain::Ethereum),
            Some("http://localhost:8545")
        );
    }

    #[test]
    fn resolve_unknown_chain() {
        let mut registry = RpcRegistry::new();
        registry.insert(Chain::Ethereum, "http://localhost:8545".to_string());

        assert_eq!(registry.resolve(Chain::PolygonPos), None);
    }

    #[test]
    fn from_env_skips_unset_chains() {
        std::env::set_var("VANA_RPC", "http://localhost:9545");
        std::env::remove_var("MERLIN_RPC");

        let registry = RpcRegistry::from_env();

        assert_eq!(registry.resolve(Chain::Vana), Some("http://localhost:9545"));
        assert_eq!(registry.resolve(Chain::MerlinChain), None);
    }
}
