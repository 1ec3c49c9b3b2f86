use providers::evm::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("No RPC endpoint configured for chain `{0}`")]
    NoEndpointForChain(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
