// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Users ---
        handlers::user::create_user,
        handlers::user::sign_in,
        handlers::user::find_user,
        handlers::user::update_user,

        // --- Persons ---
        handlers::person::create_person,
        handlers::person::find_person,

        // --- Addresses ---
        handlers::address::create_address,
        handlers::address::find_addresses_by_person,

        // --- Products ---
        handlers::product::create_product,
        handlers::product::list_products,
        handlers::product::find_product,
        handlers::product::update_product,
        handlers::product::delete_product,

        // --- Categories ---
        handlers::category::create_category,
        handlers::category::list_categories,
    ),
    components(
        schemas(
            // --- Users ---
            models::user::UserRole,
            models::user::User,
            models::user::UserWithPerson,
            models::user::CreateUserPayload,
            models::user::SignInPayload,
            models::user::UpdateUserPayload,
            models::user::CreatedUserResponse,
            models::user::AuthResponse,

            // --- Persons / Addresses ---
            models::person::Person,
            models::person::CreatePersonPayload,
            models::address::Address,
            models::address::CreateAddressPayload,

            // --- Catalog ---
            models::product::Product,
            models::product::CategoryRef,
            models::product::CreateProductPayload,
            models::product::UpdateProductPayload,
            models::category::Category,
            models::category::CreateCategoryPayload,
        )
    ),
    tags(
        (name = "Users", description = "Cadastro, login e dados do usuário"),
        (name = "Persons", description = "Dados pessoais vinculados ao usuário"),
        (name = "Addresses", description = "Endereços das pessoas"),
        (name = "Products", description = "Catálogo de produtos"),
        (name = "Categories", description = "Categorias do catálogo")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
