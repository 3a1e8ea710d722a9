use crate::{
    error::{Error, Result},
    value::NonBlankTrimmedString,
};
use std::{collections::HashMap, io::BufRead};
use tracing::{debug, error, warn};

/// Counts occurrences of values, keyed by [`NonBlankTrimmedString`].
///
/// Distinct instances holding equal text land on the same entry.
#[derive(Debug, Default)]
pub struct Tally {
    counts: HashMap<NonBlankTrimmedString, usize>,
    order: Vec<NonBlankTrimmedString>,
    skipped: usize,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw line.
    ///
    /// Blank lines are skipped unless `strict` is set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidValue` for a blank line when `strict` is set.
    pub fn record(&mut self, raw: &str, strict: bool) -> Result<()> {
        let value = match NonBlankTrimmedString::new(raw) {
            Ok(value) => value,
            Err(err @ Error::InvalidValue(_)) if !strict => {
                warn!(%err, "skipping line");
                self.skipped += 1;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        if let Some(count) = self.counts.get_mut(&value) {
            *count += 1;
        } else {
            debug!(%value, "first occurrence");
            self.order.push(value.clone());
            self.counts.insert(value, 1);
        }
        Ok(())
    }

    /// Record every line of `reader`.
    ///
    /// # Errors
    ///
    /// - Returns `Error::Io` if reading fails (including non UTF-8 input).
    /// - Returns `Error::InvalidValue` for a blank line when `strict` is set.
    pub fn read_from(reader: impl BufRead, strict: bool) -> Result<Self> {
        let mut tally = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Err(err) = tally.record(&line, strict) {
                error!(%err, line = index + 1, "rejected value");
                return Err(err);
            }
        }
        Ok(tally)
    }

    #[must_use]
    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Values with their counts, in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&NonBlankTrimmedString, usize)> {
        self.order.iter().map(|v| (v, self.counts[v]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn equal_values_share_entry() {
        let mut tally = Tally::new();
        for line in ["xyz", "  xyz", "abc", "xyz\t"] {
            tally.record(line, false).expect("lenient");
        }
        assert_eq!(tally.count("xyz"), 3);
        assert_eq!(tally.count("abc"), 1);
        assert_eq!(tally.count("missing"), 0);
    }

    #[test]
    fn entries_in_first_seen_order() {
        let mut tally = Tally::new();
        for line in ["b", "a", "b"] {
            tally.record(line, false).expect("lenient");
        }
        let entries: Vec<_> = tally.entries().map(|(v, c)| (v.as_str(), c)).collect();
        assert_eq!(entries, [("b", 2), ("a", 1)]);
    }

    #[test]
    fn blank_lines_skipped_when_lenient() {
        let mut tally = Tally::new();
        tally.record("   ", false).expect("lenient");
        tally.record("", false).expect("lenient");
        assert_eq!(tally.skipped(), 2);
        assert_eq!(tally.entries().count(), 0);
    }

    #[test]
    fn reads_lines_from_reader() {
        let input = Cursor::new("xyz\n\n  xyz \nabc\n");
        let tally = Tally::read_from(input, false).expect("lenient");
        assert_eq!(tally.count("xyz"), 2);
        assert_eq!(tally.count("abc"), 1);
        assert_eq!(tally.skipped(), 1);
    }

    #[test]
    fn reader_stops_on_blank_line_when_strict() {
        let input = Cursor::new("xyz\n \nabc\n");
        assert!(matches!(
            Tally::read_from(input, true),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn unreadable_input_is_io_error() {
        let input = Cursor::new(b"xyz\n\xff\xfe\n".to_vec());
        assert!(matches!(
            Tally::read_from(input, false),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn blank_lines_fail_when_strict() {
        let mut tally = Tally::new();
        assert!(matches!(
            tally.record(" ", true),
            Err(Error::InvalidValue(_))
        ));
        assert_eq!(tally.skipped(), 0);
    }
}
