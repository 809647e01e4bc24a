pub mod app;
pub mod config;
pub mod contact;
pub mod error;
pub mod extract;
pub mod handler;
pub mod medical;
pub mod middleware;
pub mod openapi;
pub mod resource;
pub mod store;
pub mod validation;

pub use error::{AError, AResult};
