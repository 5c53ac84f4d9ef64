pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod handler;
pub mod model;
pub mod seed;
