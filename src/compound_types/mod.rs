//! Compound types used in the delivery-checkout domain
//!
//! Combines the basic types into the entities the computations consume.
//! Both types are read-only inputs supplied by the backend API client.
//!
//! # Type List
//!
//! - [`Voucher`] - A discount instrument and its terms
//! - [`DeliveryInfo`] - Base delivery fee and distance

mod delivery_info;
mod voucher;

pub use delivery_info::DeliveryInfo;
pub use voucher::Voucher;
