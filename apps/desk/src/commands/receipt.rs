//! # Receipt Command
//!
//! Composes a receipt for a stored booking, writes the document and
//! hands it to the viewer.
//!
//! ## Flow
//! ```text
//! booking id ──► record store ──► Booking snapshot
//!                                     │
//!                                     ▼
//!                    lodge_core::compose (CURRENT tax policy)
//!                                     │
//!                                     ▼
//!                    sink::write_receipt ──► receipts/Receipt_<ref>_<date>.txt
//!                                     │
//!                                     ▼
//!                    sink::open_file (optional, best-effort)
//! ```

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use lodge_core::{compose, Receipt};
use lodge_db::Database;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::sink;

/// A composed receipt and where its document landed.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptArtifact {
    /// The composed document model.
    pub receipt: Receipt,

    /// Path the rendered document was written to.
    pub path: PathBuf,
}

/// Generates the receipt for a booking.
///
/// ## Arguments
/// * `id` - booking identifier
/// * `open_viewer` - hand the document to the host's default viewer
///   after writing it
pub async fn generate_receipt(
    db: &Database,
    config: &AppConfig,
    id: &str,
    open_viewer: bool,
) -> Result<ReceiptArtifact, AppError> {
    debug!(id = %id, "generate_receipt command");

    let booking = db
        .bookings()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking", id))?;

    let receipt = compose(
        &booking,
        &config.rate_table(),
        config.tax_rate(),
        Utc::now(),
    )?;

    let path = sink::write_receipt(&config.receipts_dir, &config.hotel, &receipt)?;

    info!(
        reference = %receipt.reference,
        path = %path.display(),
        diverges = receipt.stored_total_note.is_some(),
        "Receipt generated"
    );

    if open_viewer {
        sink::open_file(&path);
    }

    Ok(ReceiptArtifact { receipt, path })
}

// =============================================================================
// Unit Tests
// =============================================================================
