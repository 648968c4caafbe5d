// src/services/person_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::PersonRepository,
    models::person::{normalize_cpf, CreatePersonPayload, NewPerson, Person},
};

#[derive(Clone)]
pub struct PersonService {
    person_repo: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(person_repo: Arc<dyn PersonRepository>) -> Self {
        Self { person_repo }
    }

    // Sem `userId` no payload, a pessoa fica com o usuário que fez a requisição
    pub async fn create_person(
        &self,
        acting_user_id: i32,
        payload: CreatePersonPayload,
    ) -> Result<Person, AppError> {
        let new_person = NewPerson {
            cpf: normalize_cpf(&payload.cpf),
            name: payload.name,
            birth: payload.birth,
            email: payload.email,
            user_id: payload.user_id.unwrap_or(acting_user_id),
        };

        self.person_repo.create(&new_person).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Person, AppError> {
        self.person_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::PersonNotFound)
    }
}
