// src/db/memory.rs
//
// Implementação em memória de todos os repositórios, usada nos testes.
// Reproduz as regras que o Postgres garante: username único, FKs e uma pessoa por usuário.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::{error::AppError, pagination::Pagination},
    db::{
        AddressRepository, CategoryRepository, PersonRepository, ProductRepository,
        Repositories, UserRepository,
    },
    models::{
        address::{Address, CreateAddressPayload},
        category::Category,
        person::{NewPerson, Person},
        product::{CategoryRef, CreateProductPayload, Product, UpdateProductPayload},
        user::{User, UserChanges, UserRole, UserWithPerson},
    },
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    persons: Vec<Person>,
    addresses: Vec<Address>,
    products: Vec<Product>,
    categories: Vec<Category>,
    next_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn resolve_categories(&mut self, refs: &[CategoryRef]) -> Result<Vec<Category>, AppError> {
        let mut resolved: Vec<Category> = Vec::new();
        for category_ref in refs {
            let category = match category_ref.id {
                Some(id) => self
                    .categories
                    .iter()
                    .find(|c| c.id == id)
                    .cloned()
                    .ok_or(AppError::CategoryNotFound)?,
                None => {
                    let category = Category {
                        id: self.next_id(),
                        name: category_ref.name.trim().to_string(),
                        created_at: Utc::now(),
                    };
                    self.categories.push(category.clone());
                    category
                }
            };
            if !resolved.iter().any(|c| c.id == category.id) {
                resolved.push(category);
            }
        }
        resolved.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(resolved)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    /// Insere um usuário direto no estado, já com o papel desejado.
    pub fn seed_user(&self, username: &str, password_hash: &str, role: UserRole) -> User {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let user = User {
            id: state.next_id(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role,
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());
        user
    }
}

pub fn in_memory() -> (Arc<MemoryStore>, Repositories) {
    let store = Arc::new(MemoryStore::default());
    let repos = Repositories {
        users: store.clone(),
        persons: store.clone(),
        addresses: store.clone(),
        products: store.clone(),
        categories: store.clone(),
    };
    (store, repos)
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        {
            let state = self.state.lock().unwrap();
            if state.users.iter().any(|u| u.username == username) {
                return Err(AppError::UsernameAlreadyExists);
            }
        }
        Ok(self.seed_user(username, password_hash, UserRole::User))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_with_person(&self, id: i32) -> Result<Option<UserWithPerson>, AppError> {
        let state = self.state.lock().unwrap();
        let Some(user) = state.users.iter().find(|u| u.id == id).cloned() else {
            return Ok(None);
        };
        let person = state.persons.iter().find(|p| p.user_id == Some(id)).cloned();
        Ok(Some(UserWithPerson { user, person }))
    }

    async fn update(&self, id: i32, changes: &UserChanges) -> Result<Option<User>, AppError> {
        let mut state = self.state.lock().unwrap();
        if let Some(username) = &changes.username {
            if state.users.iter().any(|u| u.id != id && &u.username == username) {
                return Err(AppError::UsernameAlreadyExists);
            }
        }
        let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(username) = &changes.username {
            user.username = username.clone();
        }
        if let Some(hash) = &changes.password_hash {
            user.password_hash = hash.clone();
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }
}

#[async_trait]
impl PersonRepository for MemoryStore {
    async fn create(&self, person: &NewPerson) -> Result<Person, AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.users.iter().any(|u| u.id == person.user_id) {
            return Err(AppError::UserNotFound);
        }
        if state.persons.iter().any(|p| p.user_id == Some(person.user_id)) {
            return Err(AppError::PersonAlreadyExists);
        }
        let created = Person {
            id: state.next_id(),
            cpf: person.cpf.clone(),
            name: person.name.clone(),
            birth: person.birth,
            email: person.email.clone(),
            user_id: Some(person.user_id),
            created_at: Utc::now(),
        };
        state.persons.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.persons.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl AddressRepository for MemoryStore {
    async fn create(&self, address: &CreateAddressPayload) -> Result<Address, AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.persons.iter().any(|p| p.id == address.person_id) {
            return Err(AppError::PersonNotFound);
        }
        let created = Address {
            id: state.next_id(),
            street: address.street.clone(),
            number: address.number.clone(),
            complement: address.complement.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            person_id: address.person_id,
            created_at: Utc::now(),
        };
        state.addresses.push(created.clone());
        Ok(created)
    }

    async fn find_by_person_id(
        &self,
        person_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Address>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .addresses
            .iter()
            .filter(|a| a.person_id == person_id)
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(pagination.limit).unwrap_or(0))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn create(&self, product: &CreateProductPayload) -> Result<Product, AppError> {
        let mut state = self.state.lock().unwrap();
        let categories = match &product.categories {
            Some(refs) => state.resolve_categories(refs)?,
            None => Vec::new(),
        };
        let now = Utc::now();
        let created = Product {
            id: Uuid::new_v4(),
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
            categories,
            created_at: now,
            updated_at: now,
        };
        state.products.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self, pagination: Pagination) -> Result<Vec<Product>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .products
            .iter()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(pagination.limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateProductPayload,
    ) -> Result<Option<Product>, AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.products.iter().any(|p| p.id == id) {
            return Ok(None);
        }
        let categories = match &changes.categories {
            Some(refs) => Some(state.resolve_categories(refs)?),
            None => None,
        };
        let Some(product) = state.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            product.name = name.clone();
        }
        if let Some(description) = &changes.description {
            product.description = description.clone();
        }
        if let Some(image_url) = &changes.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(categories) = categories {
            product.categories = categories;
        }
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut state = self.state.lock().unwrap();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        Ok(state.products.len() < before)
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn create(&self, name: &str) -> Result<Category, AppError> {
        let mut state = self.state.lock().unwrap();
        let category = Category {
            id: state.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        let state = self.state.lock().unwrap();
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}
