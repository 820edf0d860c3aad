#![deny(unreachable_patterns)]
#![deny(unused_must_use)]
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

pub mod config;
pub mod controllers;
pub mod db;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod models;
mod routing;
pub mod server;
pub mod utils;
