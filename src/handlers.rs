pub mod address;
pub mod category;
pub mod person;
pub mod product;
pub mod user;
