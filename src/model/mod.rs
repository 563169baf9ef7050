//! # Record Model
//!
//! Typed shapes for gelataria records as they cross the API and store
//! boundaries, plus the external-identifier codec.

pub mod gelataria;
pub mod id;

pub use gelataria::{
    Gelataria, GelatariaCollection, GelatariaDocument, GelatariaUpdate, NewGelataria,
};
pub use id::{InvalidIdentifier, RecordId};
