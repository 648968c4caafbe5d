// src/middleware/rbac.rs

use axum::{
    extract::{FromRequestParts, RawPathParams},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    models::user::{User, UserRole},
};

/// 1. O Trait que define uma política de acesso por papel.
///
/// `allow_self` restringe a ação ao próprio usuário quando a rota tem `{id}`
/// (admin não sofre essa restrição).
pub trait RolePolicy: Send + Sync + 'static {
    fn required_roles() -> &'static [UserRole];

    fn allow_self() -> bool {
        false
    }
}

/// 2. O Extractor (Guardião). Depende do `auth_guard` ter rodado antes.
pub struct RequireRole<T>(pub PhantomData<T>);

pub fn check_permission(
    role: UserRole,
    required_roles: &[UserRole],
    allow_self: bool,
    current_user_id: i32,
    target_user_id: Option<i32>,
) -> bool {
    if !required_roles.contains(&role) {
        return false;
    }

    if role == UserRole::Admin {
        return true;
    }

    match (allow_self, target_user_id) {
        (true, Some(target)) => target == current_user_id,
        _ => true,
    }
}

// O `{id}` da rota, quando existe e é numérico
async fn target_user_id<S>(parts: &mut Parts, state: &S) -> Option<i32>
where
    S: Send + Sync,
{
    let params = RawPathParams::from_request_parts(parts, state).await.ok()?;
    params
        .iter()
        .find(|(key, _)| *key == "id")
        .and_then(|(_, value)| value.parse().ok())
}

// 3. Implementação do FromRequestParts
impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RolePolicy,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<User>()
            .cloned()
            .ok_or(AppError::InvalidToken)?;

        let target = if T::allow_self() {
            target_user_id(parts, state).await
        } else {
            None
        };

        if !check_permission(user.role, T::required_roles(), T::allow_self(), user.id, target) {
            tracing::warn!(user_id = user.id, role = ?user.role, "Acesso negado pela política de papéis");
            return Err(AppError::Forbidden);
        }

        Ok(RequireRole(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS POLÍTICAS (TIPOS)
// ---

/// Cadastro de produtos e categorias.
pub struct CatalogManagers;
impl RolePolicy for CatalogManagers {
    fn required_roles() -> &'static [UserRole] {
        &[UserRole::Admin, UserRole::Manager]
    }
}

/// Edição de conta: cada um edita a própria, admin edita qualquer uma.
pub struct AccountOwner;
impl RolePolicy for AccountOwner {
    fn required_roles() -> &'static [UserRole] {
        &[UserRole::Admin, UserRole::Manager, UserRole::User]
    }

    fn allow_self() -> bool {
        true
    }
}
