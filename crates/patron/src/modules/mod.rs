//! Script node modules.

pub mod patron;
