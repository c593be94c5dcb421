/// Structs and functions for working with protein entities.
pub mod protein;
