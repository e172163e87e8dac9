pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod feed;
pub mod middleware;
pub mod seed;
pub mod server;

pub use client::JourneyClient;
pub use error::JourneyError;
pub use feed::{Company, Listing, ListingsResponse};
