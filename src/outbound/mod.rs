//! Outbound adapters: store implementations and collaborator clients.

pub mod gateway;
pub mod persistence;
