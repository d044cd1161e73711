use chrono::{Datelike, NaiveDate};

/// Prefix marking bills materialized for preview only — a preview id must
/// never be confused with a persisted bill id.
pub const PREVIEW_PREFIX: &str = "PREVIEW-";

/// Default persisted-bill id: `BILL-<unix millis>`. The timestamp is
/// supplied by the caller; the engine never consults a clock.
pub fn bill_id(timestamp_millis: i64) -> String {
    format!("BILL-{timestamp_millis}")
}

/// Preview-marked id: `PREVIEW-<unix millis>`.
pub fn preview_bill_id(timestamp_millis: i64) -> String {
    format!("{PREVIEW_PREFIX}{timestamp_millis}")
}

pub fn is_preview_id(id: &str) -> bool {
    id.starts_with(PREVIEW_PREFIX)
}

/// Gapless bill number sequence for shops that number invoices
/// sequentially instead of by timestamp.
///
/// Generates numbers in the format `{prefix}{year}-{sequential}`,
/// e.g. "BILL-2024-001", "BILL-2024-002". The counter resets when the
/// sequence advances into a new year.
#[derive(Debug, Clone)]
pub struct BillNumberSequence {
    prefix: String,
    year: i32,
    next_number: u64,
    zero_pad: usize,
}

impl BillNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, year: i32, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next_number,
            zero_pad: 3,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next bill number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            num,
            width = self.zero_pad
        )
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            self.next_number,
            width = self.zero_pad
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Advance to the date's year if it is later, resetting the counter to 1.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let date_year = date.year();
        if date_year > self.year {
            self.year = date_year;
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_ids() {
        assert_eq!(bill_id(1718445600000), "BILL-1718445600000");
        assert_eq!(preview_bill_id(1718445600000), "PREVIEW-1718445600000");
    }

    #[test]
    fn preview_ids_are_recognized() {
        assert!(is_preview_id(&preview_bill_id(1718445600000)));
        assert!(!is_preview_id(&bill_id(1718445600000)));
    }

    #[test]
    fn sequential_numbering() {
        let mut seq = BillNumberSequence::new("BILL-", 2024);
        assert_eq!(seq.next_number(), "BILL-2024-001");
        assert_eq!(seq.next_number(), "BILL-2024-002");
        assert_eq!(seq.next_number(), "BILL-2024-003");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = BillNumberSequence::new("BILL-", 2024);
        assert_eq!(seq.peek(), "BILL-2024-001");
        assert_eq!(seq.peek(), "BILL-2024-001");
        assert_eq!(seq.next_number(), "BILL-2024-001");
        assert_eq!(seq.peek(), "BILL-2024-002");
    }

    #[test]
    fn starting_at_and_padding() {
        let mut seq = BillNumberSequence::starting_at("B", 2024, 42).with_padding(5);
        assert_eq!(seq.next_number(), "B2024-00042");
    }

    #[test]
    fn auto_advance_year() {
        let mut seq = BillNumberSequence::new("BILL-", 2024);
        seq.next_number();

        let jan_2025 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(seq.auto_advance(jan_2025));
        assert_eq!(seq.next_number(), "BILL-2025-001");

        // Same year doesn't advance
        let feb_2025 = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert!(!seq.auto_advance(feb_2025));
        assert_eq!(seq.next_number(), "BILL-2025-002");
    }
}
