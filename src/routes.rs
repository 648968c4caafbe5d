// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

pub fn router(app_state: AppState) -> Router {
    // Rotas públicas: cadastro e login
    let public_routes = Router::new()
        .route("/user", post(handlers::user::create_user))
        .route("/user/signin", post(handlers::user::sign_in));

    // Todo o resto exige token
    let protected_routes = Router::new()
        .route(
            "/user/{id}",
            get(handlers::user::find_user).put(handlers::user::update_user),
        )
        .route("/person", post(handlers::person::create_person))
        .route("/person/{id}", get(handlers::person::find_person))
        .route("/address", post(handlers::address::create_address))
        .route(
            "/address/person/{personId}",
            get(handlers::address::find_addresses_by_person),
        )
        .route(
            "/product",
            post(handlers::product::create_product).get(handlers::product::list_products),
        )
        .route(
            "/product/{id}",
            get(handlers::product::find_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
        .route(
            "/category",
            post(handlers::category::create_category).get(handlers::category::list_categories),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
