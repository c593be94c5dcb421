#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Readme.md"))]

// 3rd party imports
#[macro_use]
extern crate lazy_static;

// Internal imports including macros
/// Contains handy functions and macros
#[macro_use]
pub mod tools;

/// Chemistry related functions and information, e.g. element, residue and formula masses
pub mod chemistry;
/// Contains different entities, e.g. proteins
pub mod entities;
/// Input and output functions
pub mod io;
