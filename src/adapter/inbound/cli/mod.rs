//! CLI module graph.

pub mod check;
pub mod command;
pub mod dispatch;
pub mod fetch;
pub mod output;
pub mod run;
