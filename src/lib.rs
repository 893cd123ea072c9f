pub mod analyzers;
pub mod config;
pub mod countries;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod record;
