use std::sync::Arc;

use assetgate_core::assets::resource::AssetResource;
use assetgate_core::assets::service::AssetService;
use assetgate_core::assets::store::AssetStore;
use assetgate_core::validation::interceptor::MethodValidator;

use crate::config::{ServerConfig, ValidationMode};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Asset entry points, with the interceptor installed or not.
    pub assets: Arc<AssetResource>,
}

impl AppState {
    /// Wire the asset service for the configured validation mode.
    ///
    /// The interceptor is installed only in [`ValidationMode::Interceptor`];
    /// the extractors check [`AssetResource::is_intercepted`] and stay out of
    /// the way when it is.
    pub fn new(config: ServerConfig, store: Arc<dyn AssetStore>) -> Self {
        let validation = &config.validation;
        let options = validation.rule_options();

        let service = AssetService::new(store, options).with_manual_checks(validation.manual_checks);
        let interceptor = match validation.mode {
            ValidationMode::Interceptor => Some(MethodValidator::new(options)),
            ValidationMode::Extractor => None,
        };

        tracing::info!(
            mode = ?validation.mode,
            allow_equal_dates = validation.allow_equal_dates,
            manual_checks = validation.manual_checks,
            "Asset validation configured"
        );

        Self {
            config: Arc::new(config),
            assets: Arc::new(AssetResource::new(service, interceptor)),
        }
    }
}
