//! Export functionality around the decomposition core: original-file
//! copy, portable `.eml` artifact, and the header report.

pub mod eml;
pub mod headers;
pub mod original;
