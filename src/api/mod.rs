pub mod cors;
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
