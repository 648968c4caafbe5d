// src/services/address_service.rs

use std::sync::Arc;

use crate::{
    common::{error::AppError, pagination::Pagination},
    db::AddressRepository,
    models::address::{Address, CreateAddressPayload},
};

#[derive(Clone)]
pub struct AddressService {
    address_repo: Arc<dyn AddressRepository>,
}

impl AddressService {
    pub fn new(address_repo: Arc<dyn AddressRepository>) -> Self {
        Self { address_repo }
    }

    pub async fn create_address(&self, payload: &CreateAddressPayload) -> Result<Address, AppError> {
        self.address_repo.create(payload).await
    }

    pub async fn find_by_person(
        &self,
        person_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Address>, AppError> {
        self.address_repo.find_by_person_id(person_id, pagination).await
    }
}
