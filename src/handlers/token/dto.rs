use serde::{Deserialize, Serialize};

use crate::chain::units::format_units;
use crate::chain::TokenMetadata;

/// Query parameters for GET /token-details.
///
/// `contractAddress` is optional here so a missing parameter surfaces
/// through the service's own error envelope instead of the framework's
/// default deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetailsQuery {
    pub contract_address: Option<String>,
}

/// Response model for the token details endpoint.
///
/// `total_supply` carries the human-readable scaled value and
/// `total_supply_with_decimal` the raw integer, matching the public
/// wire format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    pub name: String,
    pub symbol: String,
    pub decimals: String,
    pub total_supply: String,
    pub total_supply_with_decimal: String,
}

impl From<TokenMetadata> for TokenDetails {
    fn from(metadata: TokenMetadata) -> Self {
        Self {
            name: metadata.name,
            symbol: metadata.symbol,
            decimals: metadata.decimals.to_string(),
            total_supply: format_units(metadata.total_supply, metadata.decimals),
            total_supply_with_decimal: metadata.total_supply.to_string(),
        }
    }
}

/// Success envelope wrapping a response payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}
