//! # Delivery Checkout Sample Application
//!
//! A sample checkout-computation service for a food-delivery platform.
//!
//! ## Overview
//!
//! Two pure, independent computations sit at the core of this crate:
//!
//! - **Shipping fee resolution**: given a base delivery fee and the vouchers
//!   available to a customer, pick the most advantageous free-shipping
//!   voucher and compute the payable fee.
//! - **Order progress projection**: map a raw backend order-status string
//!   onto a fixed six-step delivery-progress sequence, classifying every
//!   step as completed, active, or upcoming.
//!
//! Both are exposed over a small HTTP API; neither performs I/O itself.
//!
//! ## Module Structure
//!
//! - `simple_types`: Constrained primitive types (`FeeAmount`, `VoucherCode`, `OrderId`, etc.)
//! - `compound_types`: Compound types (`Voucher`, `DeliveryInfo`)
//! - `workflow`: The two computations and their result types
//! - `dto`: Serialization types and the defensive input-normalization boundary
//! - `api`: HTTP entry points

#![forbid(unsafe_code)]

pub mod api;
pub mod compound_types;
pub mod dto;
pub mod simple_types;
pub mod workflow;
