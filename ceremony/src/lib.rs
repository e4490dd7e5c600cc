pub mod api;
pub mod authenticator;
pub mod client;
pub mod display;
pub mod error;
pub mod registration;
pub mod security;
