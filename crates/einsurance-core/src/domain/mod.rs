//! Domain Module
//!
//! Entities and form state shared by the clients and the view models.

pub mod customer;
pub mod page;
pub mod payment;
pub mod registration;
