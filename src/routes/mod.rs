use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use jamboagri_contact::DeliveryProvider;

mod about;
mod contact;
mod crops;
pub mod health;
mod index;
mod spa;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub provider: Arc<dyn DeliveryProvider>,
    pub asset_version: String,
}

impl AppState {
    pub fn new(config: crate::config::Config, provider: Arc<dyn DeliveryProvider>) -> Self {
        Self {
            config,
            provider,
            asset_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

/// Routes registered by [`router`]'s caller, typically the JSON API.
pub type RegisterRoutes = fn(Router<AppState>) -> Router<AppState>;

/// Default API routes: liveness and readiness checks.
pub fn register_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
}

pub fn router(app_state: AppState, register: RegisterRoutes) -> Router {
    let public_dir = PathBuf::from(&app_state.config.site.public_dir);

    let pages = Router::new()
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/crops", get(crops::page))
        .route("/contact", get(contact::page).post(contact::action));

    register(pages)
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback_service(spa::service(public_dir))
        .with_state(app_state)
}
