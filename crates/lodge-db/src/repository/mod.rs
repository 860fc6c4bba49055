//! # Repository Implementations
//!
//! One repository per aggregate. The booking store is the only
//! aggregate Lodge persists.

pub mod booking;

pub use booking::{BookingRepository, NewBooking};
