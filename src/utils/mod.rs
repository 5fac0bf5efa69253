// Utility modules: catalog access, leg distance estimation, formatting

pub mod catalog;
pub mod distance;
pub mod format;
pub mod hash;
