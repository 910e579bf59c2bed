pub mod app;
pub mod routes;
pub mod websocket;

pub use app::*;
pub use routes::*;
pub use websocket::*;
