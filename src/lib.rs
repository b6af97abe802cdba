//! sartor: a terminal fitting room
//!
//! A guided suit-customization toolkit: step through fabric, color, style,
//! and measurements against a plain-text catalog, watch the price follow
//! every choice, and hand the finished configuration to a cart as a YAML
//! record.

pub mod boundary;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod schema;
pub mod yaml;
