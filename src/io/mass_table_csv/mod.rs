/// Reader for mass table files
pub mod reader;
