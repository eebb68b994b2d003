//! Command implementations for graphkit

pub mod dispatch;
pub mod input;
pub mod mst;
pub mod path;
pub mod traverse;
