//! Sign in and sign out on top of the backend session service.
//!
//! Credentials are checked by the backend, the only thing kept here is the
//! access token it hands out, stored in the private identity cookie.

mod models;
pub mod routes;
pub mod view;

pub use models::{Credentials, EMAIL_FIELD, PASSWORD_FIELD};
