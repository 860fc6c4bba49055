//! # Desk Commands
//!
//! Request/response functions behind the CLI subcommands. Each command
//! validates its input, delegates valuation to lodge-core and storage
//! to lodge-db, and returns a serializable response - no command knows
//! how its result is rendered.

pub mod booking;
pub mod dashboard;
pub mod receipt;

pub use booking::{
    book_room, cancel_booking, list_bookings, search_bookings, update_booking, BookingRequest,
    BookingResponse,
};
pub use dashboard::{compute_dashboard, render_dashboard};
pub use receipt::{generate_receipt, ReceiptArtifact};
