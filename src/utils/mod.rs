// Utility module exports

pub mod layering;
pub mod monitors;
