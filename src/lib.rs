pub mod analyzers;
pub mod error;
pub mod reader;
pub mod record;
