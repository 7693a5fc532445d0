//! Types for communication between the hbnb backend and frontend.

pub mod request;
pub mod response;

pub const TOKEN_COOKIE_NAME: &str = "token";
