pub mod home;
pub mod product;
pub mod user;
