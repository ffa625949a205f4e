mod handler;
mod model;

pub use handler::{delete_user, find_by_id, list_users, login, register, update_user};
pub use model::{LoginRequest, UserOperations, UserPayload};
