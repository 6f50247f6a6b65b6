//! Synthetic node identifiers for flowchart output.
//!
//! Flowchart nodes are named with short letter codes instead of persistent
//! element ids. Codes follow spreadsheet-column order: `A` … `Z`, then `AA`,
//! `AB`, … `ZZ`, then `AAA`, and so on. The sequence is infinite, never
//! repeats, and sorts by length first and alphabetically second, so discovery
//! order is preserved in the codes themselves.
//!
//! # Examples
//!
//! ```
//! use drawnix_export_core::identifier::{SyntheticIds, synthetic_id};
//!
//! let mut ids = SyntheticIds::new();
//! assert_eq!(ids.next_id(), "A");
//! assert_eq!(ids.next_id(), "B");
//! assert_eq!(synthetic_id(26), "AA");
//! ```

const ALPHABET_LEN: u128 = 26;

/// Returns the code at zero-based position `index` of the sequence.
pub fn synthetic_id(index: usize) -> String {
    // Bijective base-26: there is no zero digit.
    let mut remaining = index as u128 + 1;
    let mut letters = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        let digit = (remaining % ALPHABET_LEN) as u8;
        letters.push(char::from(b'A' + digit));
        remaining /= ALPHABET_LEN;
    }
    letters.iter().rev().collect()
}

/// An endless allocator of synthetic identifiers, starting at `A`.
///
/// Each conversion creates its own generator so identifiers never leak
/// between outputs.
#[derive(Debug, Clone, Default)]
pub struct SyntheticIds {
    next: usize,
}

impl SyntheticIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next identifier.
    pub fn next_id(&mut self) -> String {
        let id = synthetic_id(self.next);
        self.next += 1;
        id
    }

    /// Returns how many identifiers have been handed out.
    pub fn issued(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        let mut ids = SyntheticIds::new();
        let codes: Vec<String> = (0..26).map(|_| ids.next_id()).collect();

        assert_eq!(codes.first().map(String::as_str), Some("A"));
        assert_eq!(codes.last().map(String::as_str), Some("Z"));
        assert_eq!(ids.next_id(), "AA");
    }

    #[test]
    fn test_two_letter_continuation() {
        assert_eq!(synthetic_id(26), "AA");
        assert_eq!(synthetic_id(27), "AB");
        assert_eq!(synthetic_id(51), "AZ");
        assert_eq!(synthetic_id(52), "BA");
        assert_eq!(synthetic_id(701), "ZZ");
        assert_eq!(synthetic_id(702), "AAA");
    }

    #[test]
    fn test_issued_counts_generated_ids() {
        let mut ids = SyntheticIds::new();
        ids.next_id();
        ids.next_id();

        assert_eq!(ids.issued(), 2);
        assert_eq!(ids.next_id(), "C");
    }
}
