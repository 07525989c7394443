//! HTTP handlers: generic resource proxying plus the multi-step routes.

pub mod campaigns;
pub mod categories;
pub mod collections;
pub mod customers;
pub mod inventory;
pub mod promotions;
pub mod resource;
