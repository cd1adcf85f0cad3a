// Breeding Assistant Schema - Shared type definitions
// This crate holds the species-level data definitions shared between the
// main breeding-assistant crate and its build script, which compiles the
// bundled species files into a postcard blob.

pub use breeding_types::*;
pub use species_data::*;

pub mod breeding_types;
pub mod species_data;
