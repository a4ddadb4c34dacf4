#![allow(dead_code)]

pub mod backends;
pub mod config;
pub mod server;
