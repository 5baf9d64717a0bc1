//! Select the display unit and width used to render bucket labels.
//!
//! A [Formatters] table is an ordered list of tiers, each responsible for every limit up to
//! (and including) its `max`. The tier is chosen once, from the limit of a bucket function, so
//! all of its labels share one unit and one width.

use crate::{Error, TimeUnit};

const US: i64 = TimeUnit::Microseconds.nanos();
const MS: i64 = TimeUnit::Milliseconds.nanos();
const S: i64 = TimeUnit::Seconds.nanos();
const MIN: i64 = TimeUnit::Minutes.nanos();
const H: i64 = TimeUnit::Hours.nanos();
const D: i64 = TimeUnit::Days.nanos();

/// One display tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Formatter {
    max: i64,
    width: usize,
    unit: TimeUnit,
}

impl Formatter {
    /// Create a tier covering limits up to `max` nanoseconds, rendered in `unit` and
    /// zero-padded to `width` digits.
    pub const fn new(max: i64, width: usize, unit: TimeUnit) -> Self {
        Self { max, width, unit }
    }

    /// Largest limit (in nanoseconds) handled by this tier.
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Number of digits labels are zero-padded to.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Display unit of the labels.
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Convert `nanos` into the display unit, truncating.
    pub const fn convert(&self, nanos: i64) -> i64 {
        self.unit.from_nanos(nanos)
    }

    /// Render `value` (already in the display unit) as a label.
    pub fn render(&self, value: i64) -> String {
        format!("{:0width$}{}", value, self.unit.suffix(), width = self.width)
    }
}

/// An immutable, ascending table of [Formatter] tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Formatters {
    tiers: &'static [Formatter],
}

impl Formatters {
    /// Tiers used unless a custom table is provided.
    ///
    /// A tier only switches to a coarser unit once the limit is at least 8 of that unit, so
    /// the smallest threshold (an eighth of the limit) never renders as zero.
    pub const STANDARD: [Formatter; 27] = [
        Formatter::new(10 - 1, 1, TimeUnit::Nanoseconds),
        Formatter::new(100 - 1, 2, TimeUnit::Nanoseconds),
        Formatter::new(US - 1, 3, TimeUnit::Nanoseconds),
        Formatter::new(8 * US - 1, 4, TimeUnit::Nanoseconds),
        Formatter::new(10 * US - 1, 1, TimeUnit::Microseconds),
        Formatter::new(100 * US - 1, 2, TimeUnit::Microseconds),
        Formatter::new(MS - 1, 3, TimeUnit::Microseconds),
        Formatter::new(8 * MS - 1, 4, TimeUnit::Microseconds),
        Formatter::new(10 * MS - 1, 1, TimeUnit::Milliseconds),
        Formatter::new(100 * MS - 1, 2, TimeUnit::Milliseconds),
        Formatter::new(S - 1, 3, TimeUnit::Milliseconds),
        Formatter::new(8 * S - 1, 4, TimeUnit::Milliseconds),
        Formatter::new(10 * S - 1, 1, TimeUnit::Seconds),
        Formatter::new(100 * S - 1, 2, TimeUnit::Seconds),
        Formatter::new(8 * MIN - 1, 3, TimeUnit::Seconds),
        Formatter::new(10 * MIN - 1, 1, TimeUnit::Minutes),
        Formatter::new(100 * MIN - 1, 2, TimeUnit::Minutes),
        Formatter::new(8 * H - 1, 3, TimeUnit::Minutes),
        Formatter::new(10 * H - 1, 1, TimeUnit::Hours),
        Formatter::new(100 * H - 1, 2, TimeUnit::Hours),
        Formatter::new(8 * D - 1, 3, TimeUnit::Hours),
        Formatter::new(10 * D - 1, 1, TimeUnit::Days),
        Formatter::new(100 * D - 1, 2, TimeUnit::Days),
        Formatter::new(1_000 * D - 1, 3, TimeUnit::Days),
        Formatter::new(10_000 * D - 1, 4, TimeUnit::Days),
        Formatter::new(100_000 * D - 1, 5, TimeUnit::Days),
        Formatter::new(i64::MAX, 6, TimeUnit::Days),
    ];

    /// Create a table from custom tiers.
    ///
    /// Tiers must be non-empty, have strictly increasing `max` values and a non-zero width.
    pub fn new(tiers: &'static [Formatter]) -> Result<Self, Error> {
        if tiers.is_empty() {
            return Err(Error::InvalidTable("no tiers"));
        }
        if tiers.iter().any(|tier| tier.width == 0) {
            return Err(Error::InvalidTable("width must be at least 1"));
        }
        if tiers.windows(2).any(|pair| pair[0].max >= pair[1].max) {
            return Err(Error::InvalidTable("max must be strictly increasing"));
        }
        Ok(Self { tiers })
    }

    /// Returns the tiers of this table, in ascending order.
    pub fn tiers(&self) -> &'static [Formatter] {
        self.tiers
    }

    /// Returns the first tier whose `max` is at least `limit`.
    ///
    /// Limits larger than every tier saturate to the last tier.
    pub fn select(&self, limit: i64) -> &'static Formatter {
        let idx = self.tiers.partition_point(|tier| tier.max < limit);
        let tiers: &'static [Formatter] = self.tiers;
        tiers.get(idx).unwrap_or(&tiers[tiers.len() - 1])
    }
}

impl Default for Formatters {
    fn default() -> Self {
        Self {
            tiers: &Self::STANDARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_standard_table_is_valid() {
        let table = Formatters::new(&Formatters::STANDARD).unwrap();
        assert_eq!(table, Formatters::default());
        assert_eq!(table.tiers().last().unwrap().max(), i64::MAX);
    }

    #[test]
    fn test_standard_widths_fit() {
        // The largest value of each tier fits in its width, and the next tier starts at
        // a value of at least 8 in its own unit.
        let tiers = Formatters::STANDARD;
        for tier in tiers.iter() {
            let rendered = tier.convert(tier.max()).to_string();
            assert!(rendered.len() <= tier.width(), "{tier:?}");
        }
        for pair in tiers.windows(2) {
            if pair[0].unit() == pair[1].unit() {
                continue;
            }
            assert!(pair[1].convert(pair[0].max() + 1) >= 8, "{:?}", pair[1]);
        }
    }

    #[test_case(1, 1, TimeUnit::Nanoseconds; "one nanosecond")]
    #[test_case(9, 1, TimeUnit::Nanoseconds; "inclusive max")]
    #[test_case(10, 2, TimeUnit::Nanoseconds; "just past max")]
    #[test_case(7_999, 4, TimeUnit::Nanoseconds; "below 8us")]
    #[test_case(8_000, 1, TimeUnit::Microseconds; "8us")]
    #[test_case(100_000_000, 3, TimeUnit::Milliseconds; "100ms")]
    #[test_case(3_000_000_000, 4, TimeUnit::Milliseconds; "3s")]
    #[test_case(60_000_000_000, 2, TimeUnit::Seconds; "60s")]
    #[test_case(480_000_000_000, 1, TimeUnit::Minutes; "8min")]
    #[test_case(86_400_000_000_000, 2, TimeUnit::Hours; "1d")]
    #[test_case(432_000_000_000_000, 3, TimeUnit::Hours; "5d")]
    #[test_case(i64::MAX, 6, TimeUnit::Days; "max")]
    fn test_select(limit: i64, width: usize, unit: TimeUnit) {
        let tier = Formatters::default().select(limit);
        assert_eq!(tier.width(), width);
        assert_eq!(tier.unit(), unit);
    }

    #[test]
    fn test_select_saturates() {
        static TIERS: [Formatter; 2] = [
            Formatter::new(99, 2, TimeUnit::Nanoseconds),
            Formatter::new(999, 3, TimeUnit::Nanoseconds),
        ];
        let table = Formatters::new(&TIERS).unwrap();
        assert_eq!(table.select(50), &TIERS[0]);
        assert_eq!(table.select(999), &TIERS[1]);
        assert_eq!(table.select(1_000_000), &TIERS[1]);
    }

    #[test]
    fn test_invalid_tables() {
        static EMPTY: [Formatter; 0] = [];
        static UNORDERED: [Formatter; 2] = [
            Formatter::new(999, 3, TimeUnit::Nanoseconds),
            Formatter::new(999, 3, TimeUnit::Nanoseconds),
        ];
        static ZERO_WIDTH: [Formatter; 1] = [Formatter::new(999, 0, TimeUnit::Nanoseconds)];
        assert!(matches!(
            Formatters::new(&EMPTY),
            Err(Error::InvalidTable(_))
        ));
        assert!(matches!(
            Formatters::new(&UNORDERED),
            Err(Error::InvalidTable(_))
        ));
        assert!(matches!(
            Formatters::new(&ZERO_WIDTH),
            Err(Error::InvalidTable(_))
        ));
    }

    #[test]
    fn test_render() {
        let tier = Formatter::new(100 * S - 1, 2, TimeUnit::Seconds);
        assert_eq!(tier.render(7), "07s");
        assert_eq!(tier.render(60), "60s");
        let tier = Formatter::new(8 * S - 1, 4, TimeUnit::Milliseconds);
        assert_eq!(tier.render(375), "0375ms");
        assert_eq!(tier.render(tier.convert(1_500_000_000)), "1500ms");
    }
}
