use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use storefront_api::bootstrap::app_context::{AppContext, AppServices};
use storefront_api::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        storefront_api::presentation::http::categories::list_categories,
        storefront_api::presentation::http::categories::get_category,
        storefront_api::presentation::http::categories::list_category_products,
        storefront_api::presentation::http::categories::create_category,
        storefront_api::presentation::http::categories::update_category,
        storefront_api::presentation::http::categories::delete_category,
        storefront_api::presentation::http::products::search_products,
        storefront_api::presentation::http::products::get_product,
        storefront_api::presentation::http::cart::get_cart,
        storefront_api::presentation::http::cart::add_to_cart,
        storefront_api::presentation::http::cart::update_cart_item,
        storefront_api::presentation::http::cart::clear_cart,
        storefront_api::presentation::http::profile::get_profile,
        storefront_api::presentation::http::profile::create_profile,
        storefront_api::presentation::http::profile::update_profile,
        storefront_api::presentation::http::health::health,
    ),
    components(schemas(
        storefront_api::presentation::http::categories::CategoryResponse,
        storefront_api::presentation::http::categories::CategoryRequest,
        storefront_api::presentation::http::products::ProductResponse,
        storefront_api::presentation::http::cart::CartResponse,
        storefront_api::presentation::http::cart::CartItemResponse,
        storefront_api::presentation::http::cart::UpdateCartItemRequest,
        storefront_api::presentation::http::profile::ProfileResponse,
        storefront_api::presentation::http::profile::ProfileRequest,
        storefront_api::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Categories", description = "Product categories"),
        (name = "Products", description = "Product catalog"),
        (name = "Cart", description = "Per-user shopping cart"),
        (name = "Profile", description = "User profile data"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "storefront_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting storefront backend");

    // Database
    let pool = storefront_api::infrastructure::db::connect_pool(&cfg).await?;
    storefront_api::infrastructure::db::migrate(&pool).await?;

    let category_repo = Arc::new(
        storefront_api::infrastructure::db::repositories::category_repository_sqlx::SqlxCategoryRepository::new(
            pool.clone(),
        ),
    );
    let product_repo = Arc::new(
        storefront_api::infrastructure::db::repositories::product_repository_sqlx::SqlxProductRepository::new(
            pool.clone(),
        ),
    );
    let cart_repo = Arc::new(
        storefront_api::infrastructure::db::repositories::cart_repository_sqlx::SqlxCartRepository::new(
            pool.clone(),
        ),
    );
    let profile_repo = Arc::new(
        storefront_api::infrastructure::db::repositories::profile_repository_sqlx::SqlxProfileRepository::new(
            pool.clone(),
        ),
    );
    let user_repo = Arc::new(
        storefront_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );

    let services = AppServices::new(category_repo, product_repo, cart_repo, profile_repo, user_repo);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => CorsLayer::new()
                .allow_origin(v)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
            Err(_) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
        }
    } else if cfg.is_production {
        // FRONTEND_URL is mandatory in production (enforced earlier); fall back to deny
        CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::PUT,
                http::Method::DELETE,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
    } else {
        // Development convenience
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::PUT,
                http::Method::DELETE,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
            .allow_credentials(true)
    };

    // Route paths are the wire contract with existing clients; everything
    // mounts at the root, no prefix.
    let app = Router::new()
        .merge(storefront_api::presentation::http::health::routes(
            pool.clone(),
        ))
        .merge(storefront_api::presentation::http::categories::routes(
            ctx.clone(),
        ))
        .merge(storefront_api::presentation::http::products::routes(
            ctx.clone(),
        ))
        .merge(storefront_api::presentation::http::cart::routes(ctx.clone()))
        .merge(storefront_api::presentation::http::profile::routes(
            ctx.clone(),
        ))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
