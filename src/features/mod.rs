//! Domain-level frontend features and their shared logic. Routes import
//! these modules to keep view code focused while credential handling stays
//! in one dedicated area.

pub(crate) mod auth;
