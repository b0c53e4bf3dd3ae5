//! Sift HTTP gateway library (used by the server binary and tests).

pub mod gateway;

pub use gateway::{HandlerState, create_router_with_state};
