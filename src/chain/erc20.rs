use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use async_trait::async_trait;
use log::debug;

use super::contracts::IERC20;
use super::error::ChainError;

/// Raw decoded results of the four standard ERC-20 metadata calls.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

/// Read-only view of a token contract.
///
/// Handlers depend on this trait rather than on a concrete provider,
/// so the RPC client stays swappable and tests can substitute a stub.
#[async_trait]
pub trait Erc20Reader: Send + Sync {
    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, ChainError>;
}

/// `Erc20Reader` backed by an alloy provider.
pub struct RpcErc20Reader {
    provider: DynProvider,
}

impl RpcErc20Reader {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Erc20Reader for RpcErc20Reader {
    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, ChainError> {
        debug!("Fetching ERC-20 metadata for {}", token);

        let erc20 = IERC20::new(token, &self.provider);
        let name_call = erc20.name();
        let symbol_call = erc20.symbol();
        let decimals_call = erc20.decimals();
        let total_supply_call = erc20.totalSupply();

        // All four reads go out at once; the first rejection fails the
        // whole fetch and no partial result survives.
        let (name, symbol, decimals, total_supply) = tokio::try_join!(
            name_call.call(),
            symbol_call.call(),
            decimals_call.call(),
            total_supply_call.call(),
        )?;

        Ok(TokenMetadata {
            name,
            symbol,
            decimals,
            total_supply,
        })
    }
}
