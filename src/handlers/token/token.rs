use actix_web::{web, HttpResponse};
use alloy::primitives::Address;
use log::{error, info};
use std::sync::Arc;

use crate::{
    chain::Erc20Reader,
    errors::ApiError,
    handlers::token::dto::{ApiResponse, TokenDetailsQuery},
    handlers::token::service::TokenService,
};

/// GET /token-details?contractAddress={address} - Returns ERC-20 metadata
///
/// # Arguments
/// * `reader` - Shared chain access handle
/// * `query` - Query parameters containing the contract address
///
/// # Returns
/// JSON envelope with name, symbol, decimals and total supply
pub async fn get_token_details_handler(
    reader: web::Data<Arc<dyn Erc20Reader>>,
    query: web::Query<TokenDetailsQuery>,
) -> Result<HttpResponse, ApiError> {
    let address_str = match &query.contract_address {
        Some(address) => address,
        None => {
            error!("Missing contractAddress query parameter");
            return Err(ApiError::MissingParameter);
        }
    };

    info!("Handling GET /token-details request for {}", address_str);

    let address = match address_str.parse::<Address>() {
        Ok(address) => address,
        Err(e) => {
            error!("Invalid address format: {}", e);
            return Err(ApiError::InvalidAddress);
        }
    };

    match TokenService::get_token_details(reader.get_ref().as_ref(), address).await {
        Ok(details) => {
            info!("Successfully retrieved token details for {}", address);
            Ok(HttpResponse::Ok().json(ApiResponse::success(details)))
        }
        Err(e) => {
            // Full detail stays in the server log; the client only sees
            // the generic message for the error class.
            error!("Error fetching token details: {}", e);
            Err(ApiError::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ChainError, TokenMetadata};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use alloy::primitives::U256;
    use alloy::rpc::json_rpc::ErrorPayload;
    use alloy::transports::{RpcError, TransportErrorKind};
    use async_trait::async_trait;

    enum StubOutcome {
        Success,
        ContractCall,
        Transport,
    }

    struct StubReader {
        outcome: StubOutcome,
    }

    #[async_trait]
    impl Erc20Reader for StubReader {
        async fn token_metadata(&self, _token: Address) -> Result<TokenMetadata, ChainError> {
            match self.outcome {
                StubOutcome::Success => Ok(TokenMetadata {
                    name: "Test Token".to_string(),
                    symbol: "TST".to_string(),
                    decimals: 18,
                    total_supply: "1000000000000000000".parse::<U256>().unwrap(),
                }),
                StubOutcome::ContractCall => {
                    let payload = ErrorPayload {
                        code: 3,
                        message: "execution reverted".into(),
                        data: None,
                    };
                    Err(ChainError::ContractCall(
                        alloy::contract::Error::TransportError(RpcError::ErrorResp(payload)),
                    ))
                }
                StubOutcome::Transport => Err(ChainError::Transport(
                    alloy::contract::Error::TransportError(TransportErrorKind::custom_str(
                        "connection refused",
                    )),
                )),
            }
        }
    }

    fn stub_app(
        outcome: StubOutcome,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let reader: Arc<dyn Erc20Reader> = Arc::new(StubReader { outcome });
        App::new()
            .app_data(web::Data::new(reader))
            .route("/token-details", web::get().to(get_token_details_handler))
    }

    #[actix_web::test]
    async fn test_missing_contract_address_is_bad_request() {
        let app = test::init_service(stub_app(StubOutcome::Success)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/token-details").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "contractAddress is required");
    }

    #[actix_web::test]
    async fn test_malformed_contract_address_is_bad_request() {
        let app = test::init_service(stub_app(StubOutcome::Success)).await;

        let req = test::TestRequest::get()
            .uri("/token-details?contractAddress=not-an-address")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid contractAddress provided");
    }

    #[actix_web::test]
    async fn test_valid_address_returns_token_details() {
        let app = test::init_service(stub_app(StubOutcome::Success)).await;

        let req = test::TestRequest::get()
            .uri("/token-details?contractAddress=0x1f9840a85d5af5bf1d1762f925bdaddc4201f984")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["name"], "Test Token");
        assert_eq!(body["data"]["symbol"], "TST");
        assert_eq!(body["data"]["decimals"], "18");
        assert_eq!(body["data"]["totalSupply"], "1.0");
        assert_eq!(body["data"]["totalSupplyWithDecimal"], "1000000000000000000");
    }

    #[actix_web::test]
    async fn test_contract_call_failure_is_internal_error_with_hint() {
        let app = test::init_service(stub_app(StubOutcome::ContractCall)).await;

        let req = test::TestRequest::get()
            .uri("/token-details?contractAddress=0x1f9840a85d5af5bf1d1762f925bdaddc4201f984")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "error");
        assert_eq!(
            body["message"],
            "Contract call failed, possibly due to incorrect contractAddress."
        );
    }

    #[actix_web::test]
    async fn test_transport_failure_is_generic_internal_error() {
        let app = test::init_service(stub_app(StubOutcome::Transport)).await;

        let req = test::TestRequest::get()
            .uri("/token-details?contractAddress=0x1f9840a85d5af5bf1d1762f925bdaddc4201f984")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Internal Server Error. Please try again later.");
    }
}
