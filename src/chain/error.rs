use thiserror::Error;

/// Failures surfaced by the chain access layer, split by whether the
/// node rejected the call itself or the transport failed underneath it.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The node processed the request but the call could not execute:
    /// no contract code at the address, execution reverted, or the
    /// return data did not decode as the expected ERC-20 type.
    #[error("contract call failed: {0}")]
    ContractCall(alloy::contract::Error),

    /// The node could not be reached or returned a malformed response.
    #[error("rpc transport failure: {0}")]
    Transport(alloy::contract::Error),
}

impl From<alloy::contract::Error> for ChainError {
    fn from(error: alloy::contract::Error) -> Self {
        match &error {
            alloy::contract::Error::TransportError(e) if !e.is_error_resp() => {
                ChainError::Transport(error)
            }
            _ => ChainError::ContractCall(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::rpc::json_rpc::ErrorPayload;
    use alloy::transports::{RpcError, TransportErrorKind};

    #[test]
    fn test_node_error_response_maps_to_contract_call() {
        let payload = ErrorPayload {
            code: 3,
            message: "execution reverted".into(),
            data: None,
        };
        let error = alloy::contract::Error::TransportError(RpcError::ErrorResp(payload));
        assert!(matches!(ChainError::from(error), ChainError::ContractCall(_)));
    }

    #[test]
    fn test_network_failure_maps_to_transport() {
        let error =
            alloy::contract::Error::TransportError(TransportErrorKind::custom_str("conn refused"));
        assert!(matches!(ChainError::from(error), ChainError::Transport(_)));
    }
}
