#![allow(dead_code)]

pub mod env;
pub mod fake_backend;
pub mod http_server;
