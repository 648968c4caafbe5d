// src/services/user_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::user::{UpdateUserPayload, User, UserChanges, UserWithPerson},
    services::auth::hash_password,
};

#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { user_repo, bcrypt_cost }
    }

    pub async fn find_with_person(&self, id: i32) -> Result<UserWithPerson, AppError> {
        self.user_repo
            .find_with_person(id)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    // Só os campos presentes no payload são alterados; senha nova é re-hasheada
    pub async fn update_user(&self, id: i32, payload: UpdateUserPayload) -> Result<User, AppError> {
        let password_hash = match payload.password.as_deref() {
            Some(password) => Some(hash_password(password, self.bcrypt_cost).await?),
            None => None,
        };

        let changes = UserChanges {
            username: payload.username,
            password_hash,
            role: payload.role,
        };

        self.user_repo
            .update(id, &changes)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::memory::in_memory,
        models::user::UserRole,
        services::auth::verify_password,
    };

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let (store, repos) = in_memory();
        let user = store.seed_user("john_doe", "hash-antigo", UserRole::User);
        let service = UserService::new(repos.users, 4);

        let updated = service
            .update_user(
                user.id,
                UpdateUserPayload {
                    username: Some("jane_doe".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "jane_doe");
        assert_eq!(updated.password_hash, "hash-antigo");
        assert_eq!(updated.role, UserRole::User);
    }

    #[tokio::test]
    async fn update_rehashes_new_password() {
        let (store, repos) = in_memory();
        let user = store.seed_user("john_doe", "hash-antigo", UserRole::User);
        let service = UserService::new(repos.users, 4);

        let updated = service
            .update_user(
                user.id,
                UpdateUserPayload {
                    password: Some("nova-senha".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(verify_password("nova-senha", &updated.password_hash).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (_, repos) = in_memory();
        let service = UserService::new(repos.users, 4);

        assert!(matches!(
            service.find_with_person(42).await.unwrap_err(),
            AppError::UserNotFound
        ));
        assert!(matches!(
            service.update_user(42, UpdateUserPayload::default()).await.unwrap_err(),
            AppError::UserNotFound
        ));
    }

    #[tokio::test]
    async fn username_taken_by_another_user_conflicts() {
        let (store, repos) = in_memory();
        store.seed_user("john_doe", "h", UserRole::User);
        let other = store.seed_user("jane_doe", "h", UserRole::User);
        let service = UserService::new(repos.users, 4);

        let err = service
            .update_user(
                other.id,
                UpdateUserPayload {
                    username: Some("john_doe".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UsernameAlreadyExists));
    }
}
