//! Use-Cases der Application-Layer-Orchestrierung.

pub mod assets;
pub mod elevation;
pub mod file_io;
pub mod selection;
