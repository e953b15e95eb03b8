//! Types shared by the hub frontend and the dev backend: aggregates, DTOs,
//! typed list filters, bulk requests and field metadata.

pub mod domain;
pub mod enums;
pub mod shared;
