//! CLI command implementations

pub mod cart;
pub mod catalog;
pub mod completions;
pub mod configure;
pub mod init;
pub mod profiles;
pub mod validate;
