//! Inspection formats for programs

pub mod treeviz;
