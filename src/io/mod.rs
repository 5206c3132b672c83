pub mod journal;
pub mod reader;
pub mod writer;
