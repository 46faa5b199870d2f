//! Port definitions for the payload subsystem.
//!
//! Ports are the trait seams between the domain and its callers:
//! - [`entity::Entity`]: wire serialisation and readiness checks
//! - [`validator::PayloadValidator`]: pre-send validation against platform limits

pub mod entity;
pub mod validator;
