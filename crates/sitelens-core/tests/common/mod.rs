#![allow(dead_code)]

pub mod manifest_server;
