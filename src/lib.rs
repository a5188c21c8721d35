#![warn(rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod domain;
pub mod drain;
pub mod error;
pub mod parser;

pub use config::Settings;
pub use domain::{DrainError, Facility, Priority, Record};
pub use drain::{DrainAllowList, DrainMetadata, RecordAssembler};
pub use parser::SyslogHttpParser;
