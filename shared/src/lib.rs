#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod env;
pub mod graphics;
pub mod input;
pub mod logger;
pub mod models;
pub mod sampling;
pub mod viewer;
