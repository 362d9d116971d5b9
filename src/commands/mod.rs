//! Command implementations for the agr and skill-add binaries

pub mod add;
pub mod completions;
pub mod helpers;
pub mod skill_add;
pub mod version;
