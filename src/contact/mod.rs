mod model;
pub(crate) mod routes;

pub use model::Contact;
pub use routes::router;
