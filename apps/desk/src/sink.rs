//! # Document Sink
//!
//! Renders composed receipts to durable text documents and hands them
//! to the host's default viewer.
//!
//! The core guarantees the CONTENT of a receipt; everything here is
//! presentation. The one contract callers rely on is the path scheme:
//!
//! ```text
//! <receipts_dir>/Receipt_<reference>_<YYYY-MM-DD>.txt
//! ```
//!
//! One artifact per reference per day - regenerating the same receipt
//! on the same day overwrites, it does not version.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::NaiveDate;
use tracing::{debug, warn};

use lodge_core::Receipt;

use crate::config::HotelIdentity;

/// File name for a receipt artifact: `Receipt_<reference>_<date>.txt`.
pub fn receipt_file_name(reference: &str, date: NaiveDate) -> String {
    format!("Receipt_{}_{}.txt", reference, date.format("%Y-%m-%d"))
}

/// Renders a receipt document and writes it under `dir`.
///
/// The directory is created on first use. An existing same-day artifact
/// for the reference is overwritten.
pub fn write_receipt(
    dir: &Path,
    hotel: &HotelIdentity,
    receipt: &Receipt,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(receipt_file_name(
        &receipt.reference,
        receipt.generated_at.date_naive(),
    ));

    std::fs::write(&path, render_text(hotel, receipt))?;
    debug!(path = %path.display(), "Receipt written");

    Ok(path)
}

/// Renders the receipt as a plain-text document.
pub fn render_text(hotel: &HotelIdentity, receipt: &Receipt) -> String {
    let mut doc = String::new();
    let rule = "=".repeat(64);

    // Hotel identity header
    doc.push_str(&rule);
    doc.push('\n');
    doc.push_str(&format!("{}\n", hotel.name));
    doc.push_str(&format!("{}\n", hotel.address));
    doc.push_str(&format!("Tel: {} / {}\n", hotel.phone, hotel.email));
    doc.push_str(&format!(
        "Receipt Date: {}\n",
        receipt.generated_at.format("%Y-%m-%d %H:%M")
    ));
    doc.push_str(&rule);
    doc.push_str("\n\n");

    // Title & reference
    doc.push_str(&format!("Booking Receipt - {}\n\n", receipt.reference));

    // Guest & stay block
    doc.push_str(&format!("{:<13}: {}\n", "Guest Name", receipt.guest_name));
    doc.push_str(&format!("{:<13}: {}\n", "Phone", receipt.phone));
    doc.push_str(&format!("{:<13}: {}\n", "Email", receipt.email));
    doc.push_str(&format!(
        "{:<13}: {}\n",
        "ID/Passport", receipt.document_number
    ));
    doc.push_str(&format!(
        "{:<13}: {}\n",
        "Room Type", receipt.room_category
    ));
    doc.push_str(&format!("{:<13}: {}\n\n", "Nights", receipt.nights));

    // Charges table
    doc.push_str(&format!(
        "{:<28} {:>5} {:>12} {:>14}\n",
        "Description", "Qty", "Rate", "Amount"
    ));
    doc.push_str(&format!("{}\n", "-".repeat(62)));
    for line in &receipt.lines {
        let quantity = line
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_default();
        doc.push_str(&format!(
            "{:<28} {:>5} {:>12} {:>14}\n",
            line.description,
            quantity,
            line.rate,
            line.amount.to_string()
        ));
    }
    doc.push('\n');

    // Stored total note (only present when totals diverge)
    if let Some(note) = &receipt.stored_total_note {
        doc.push_str(&format!("Note: {note}\n\n"));
    }

    // Machine-readable summary (printed QR payload)
    doc.push_str("Scan for booking summary:\n");
    doc.push_str(&format!("  {}\n", receipt.qr_payload));
    doc.push_str("Use this at check-in for quick lookup.\n\n");

    // Payment / terms footer
    doc.push_str("Payment Method: Cash / Card on file\n");
    doc.push_str(
        "Terms: Please present a valid ID at check-in. Cancellations within\n\
         24h may incur charges. Taxes subject to local regulations.\n\n",
    );
    doc.push_str(&format!(
        "Thank you for choosing {}. We wish you a pleasant stay!\n",
        hotel.name
    ));

    doc
}

/// Opens a document with the host's default viewer. Best-effort: a
/// missing opener leaves the saved file in place and only logs.
pub fn open_file(path: &Path) {
    let result = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(path).spawn()
    } else {
        Command::new("xdg-open").arg(path).spawn()
    };

    if let Err(err) = result {
        warn!(path = %path.display(), %err, "Could not open receipt viewer");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
