use alloy::providers::{DynProvider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use alloy::transports::layers::FallbackLayer;
use anyhow::{anyhow, Context, Result};
use std::num::NonZeroUsize;
use tower::ServiceBuilder;

/// Builds the shared RPC provider from the configured endpoint URLs.
///
/// All URLs are wired behind a fallback layer, so a single endpoint and
/// a primary-plus-backup list go through the same construction path.
pub fn create_provider(rpcs: &[String]) -> Result<DynProvider> {
    let transport_count = NonZeroUsize::new(rpcs.len())
        .ok_or_else(|| anyhow!("no RPC URL configured"))?;
    let fallback_layer = FallbackLayer::default().with_active_transport_count(transport_count);

    let transports = rpcs
        .iter()
        .map(|url| {
            let parsed: url::Url = url
                .parse()
                .with_context(|| format!("invalid RPC URL: {}", url))?;
            Ok(Http::new(parsed))
        })
        .collect::<Result<Vec<_>>>()?;

    let transport = ServiceBuilder::new()
        .layer(fallback_layer)
        .service(transports);
    let client = RpcClient::builder().transport(transport, false);
    Ok(ProviderBuilder::new().connect_client(client).erased())
}
