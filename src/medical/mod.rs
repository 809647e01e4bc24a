mod model;
pub(crate) mod routes;

pub use model::Medical;
pub use routes::router;
