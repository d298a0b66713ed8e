#![allow(dead_code)]

pub mod architecture;
pub mod server;
pub mod state;
