#![allow(dead_code)]

pub mod payloads;
pub mod server;
pub mod sentidash_env;
