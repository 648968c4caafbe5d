pub mod address_service;
pub mod auth;
pub mod category_service;
pub mod person_service;
pub mod product_service;
pub mod user_service;
