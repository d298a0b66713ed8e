//! HTTP update source.
//!
//! Polls the configured candidate endpoints with a shared reqwest client and
//! normalizes JSON, plain-text and RSS/Atom bodies into
//! [`UpdateRecord`](crate::domain::UpdateRecord)s.

mod client;
mod fetcher;
mod parser;
mod settings;

pub use client::build_client;
pub use fetcher::HttpSource;
pub use parser::{parse_body, BodyFormat};
pub use settings::{CandidateConfig, SourceConfig, SourceFormat, TextScan};
