use alloy::primitives::Address;
use log::debug;

use crate::chain::{ChainError, Erc20Reader};
use crate::handlers::token::dto::TokenDetails;

/// Service layer for token-related business logic
pub struct TokenService;

impl TokenService {
    /// Fetch the ERC-20 metadata for a contract and shape it for the wire.
    ///
    /// # Arguments
    /// * `reader` - Chain access handle
    /// * `address` - The token contract address
    ///
    /// # Returns
    /// * `Ok(TokenDetails)` - Metadata with exact scaled total supply
    /// * `Err(ChainError)` - Error if any of the four contract reads fails
    pub async fn get_token_details(
        reader: &dyn Erc20Reader,
        address: Address,
    ) -> Result<TokenDetails, ChainError> {
        debug!("Fetching token details for {}", address);

        let metadata = reader.token_metadata(address).await?;

        debug!(
            "Retrieved metadata for {}: {} ({})",
            address, metadata.name, metadata.symbol
        );
        Ok(TokenDetails::from(metadata))
    }
}
