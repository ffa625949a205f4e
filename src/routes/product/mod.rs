mod handler;
mod model;

pub use handler::{add_product, delete_product, find_by_id, list_products, update_product};
pub use model::{ProductOperations, ProductPayload, ProductRequest};
