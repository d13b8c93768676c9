//! HTTP handlers for the Flows domain

pub mod flows;
pub mod videos;
