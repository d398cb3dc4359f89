//! Parties domain module (customers).
//!
//! Order placement only cares whether a customer exists, but the record carries
//! the contact details the order is ultimately addressed to.

pub mod customer;

pub use customer::Customer;
