pub mod auth;
pub mod complaints;
pub mod error_convert;
pub mod navigation;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod openapi;
