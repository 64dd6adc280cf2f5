pub mod routes;

pub use routes::{api_router, ApiState};
