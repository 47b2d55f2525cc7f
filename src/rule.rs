//! Survive/spawn rule sets and the rule-text parser.
//!
//! A [`RuleSet`] answers "should a transition happen for this neighbor
//! count?" in O(1). Rule sets are built either from explicit count lists
//! or from human-readable rule strings like `"4-6,9"`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest meaningful neighbor count (Moore neighborhood in 3D).
pub const MAX_NEIGHBORS: u8 = 26;

/// An immutable membership predicate over neighbor counts.
///
/// Backed by a single `u64`, so membership queries are a bit test. Indices
/// `0..=63` are addressable; only `0..=26` ever occur as neighbor counts.
/// Equality compares the underlying bit pattern, which lets a host detect
/// pending-vs-applied configuration drift by value.
///
/// # Example
///
/// ```
/// use ca3d::RuleSet;
///
/// let survive = RuleSet::parse("4-6,9");
/// assert!(survive.contains(5));
/// assert!(!survive.contains(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleSet {
    bits: u64,
}

impl RuleSet {
    /// Creates an empty rule set (no count is a member).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule set from an explicit list of neighbor counts.
    ///
    /// Counts above [`MAX_NEIGHBORS`] are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use ca3d::RuleSet;
    ///
    /// let spawn = RuleSet::from_counts(&[4]);
    /// assert!(spawn.contains(4));
    /// ```
    pub fn from_counts(counts: &[u8]) -> Self {
        let mut set = Self::new();
        for &n in counts {
            if n <= MAX_NEIGHBORS {
                set.set(n, true);
            }
        }
        set
    }

    /// Returns true if `n` is a member.
    ///
    /// # Panics
    /// Panics if `n > 63`.
    pub fn contains(&self, n: u8) -> bool {
        assert!(n <= 63, "rule index out of range: {n}");
        self.bits & (1 << n) != 0
    }

    /// Returns membership of `n`, or `None` if `n > 63`.
    pub fn try_contains(&self, n: u8) -> Option<bool> {
        if n <= 63 {
            Some(self.bits & (1 << n) != 0)
        } else {
            None
        }
    }

    /// Sets or clears membership of `n`.
    ///
    /// # Panics
    /// Panics if `n > 63`.
    pub fn set(&mut self, n: u8, member: bool) {
        assert!(n <= 63, "rule index out of range: {n}");
        if member {
            self.bits |= 1 << n;
        } else {
            self.bits &= !(1 << n);
        }
    }

    /// Returns the raw bit pattern.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Returns true if no count is a member.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of member counts.
    pub fn len(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Parses a rule string into a rule set. Never fails.
    ///
    /// Whitespace is stripped, then tokens matching `<int>-<int>`
    /// (inclusive range) or `<int>` (singleton) are extracted left to
    /// right; anything else is skipped silently. Extracted values outside
    /// `[0, 26]` contribute nothing. Malformed input therefore yields a
    /// smaller (possibly empty) set, never an error; hosts rely on being
    /// able to feed partially-typed rule strings through this without
    /// diagnostics.
    ///
    /// # Example
    ///
    /// ```
    /// use ca3d::RuleSet;
    ///
    /// assert_eq!(RuleSet::parse("4-6,9"), RuleSet::from_counts(&[4, 5, 6, 9]));
    /// assert!(RuleSet::parse("").is_empty());
    /// assert!(RuleSet::parse("30").is_empty());
    /// ```
    pub fn parse(text: &str) -> Self {
        let bytes: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();

        let mut set = Self::new();
        let mut i = 0;
        while i < bytes.len() {
            if !bytes[i].is_ascii_digit() {
                i += 1;
                continue;
            }
            let (from, after_from) = scan_int(&bytes, i);

            // A `-` directly followed by another integer makes this a range
            // token; a trailing `-` leaves the first integer a singleton.
            let is_range = after_from + 1 < bytes.len()
                && bytes[after_from] == b'-'
                && bytes[after_from + 1].is_ascii_digit();

            if is_range {
                let (to, after_to) = scan_int(&bytes, after_from + 1);
                for n in from..=to.min(MAX_NEIGHBORS as u32) {
                    set.set(n as u8, true);
                }
                i = after_to;
            } else {
                if from <= MAX_NEIGHBORS as u32 {
                    set.set(from as u8, true);
                }
                i = after_from;
            }
        }
        set
    }
}

/// Scans a run of ASCII digits starting at `start`, saturating on
/// overflow. Returns the value and the index just past the run.
fn scan_int(bytes: &[u8], start: usize) -> (u32, usize) {
    let mut value: u32 = 0;
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add((bytes[i] - b'0') as u32);
        i += 1;
    }
    (value, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = RuleSet::new();
        for n in 0..=63 {
            assert!(!set.contains(n));
        }
        assert!(set.is_empty());
        assert_eq!(set.bits(), 0);
    }

    #[test]
    fn test_set_and_clear() {
        let mut set = RuleSet::new();
        set.set(5, true);
        set.set(26, true);
        assert!(set.contains(5));
        assert!(set.contains(26));
        assert_eq!(set.len(), 2);

        set.set(5, false);
        assert!(!set.contains(5));
        assert!(set.contains(26));
    }

    #[test]
    #[should_panic(expected = "rule index out of range")]
    fn test_contains_out_of_range_panics() {
        RuleSet::new().contains(64);
    }

    #[test]
    #[should_panic(expected = "rule index out of range")]
    fn test_set_out_of_range_panics() {
        RuleSet::new().set(64, true);
    }

    #[test]
    fn test_try_contains() {
        let set = RuleSet::from_counts(&[3]);
        assert_eq!(set.try_contains(3), Some(true));
        assert_eq!(set.try_contains(4), Some(false));
        assert_eq!(set.try_contains(64), None);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(RuleSet::parse("4-6,9"), RuleSet::from_counts(&[4, 5, 6, 9]));
        assert_ne!(RuleSet::parse("4"), RuleSet::parse("5"));
    }

    #[test]
    fn test_parse_range_and_singleton() {
        let set = RuleSet::parse("4-6,9");
        for n in 0..=MAX_NEIGHBORS {
            let expected = matches!(n, 4 | 5 | 6 | 9);
            assert_eq!(set.contains(n), expected, "count {n}");
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(RuleSet::parse("").is_empty());
    }

    #[test]
    fn test_parse_out_of_domain_singleton() {
        // 30 > 26: the token is extracted but contributes nothing.
        assert!(RuleSet::parse("30").is_empty());
    }

    #[test]
    fn test_parse_range_clamps_to_domain() {
        // 24-99 clamps to 24..=26; 30-40 is entirely out of domain.
        assert_eq!(
            RuleSet::parse("24-99"),
            RuleSet::from_counts(&[24, 25, 26])
        );
        assert!(RuleSet::parse("30-40").is_empty());
    }

    #[test]
    fn test_parse_whitespace_insensitive() {
        assert_eq!(
            RuleSet::parse(" 4 - 6 ,\t9 "),
            RuleSet::parse("4-6,9")
        );
    }

    #[test]
    fn test_parse_tolerates_garbage() {
        // Unrecognized characters are skipped, digits still extracted.
        assert_eq!(RuleSet::parse("abc4def"), RuleSet::from_counts(&[4]));
        assert!(RuleSet::parse("x,y;!").is_empty());
    }

    #[test]
    fn test_parse_dangling_dash() {
        // "5-" is a singleton followed by a stray dash; "-5" a stray dash
        // followed by a singleton.
        assert_eq!(RuleSet::parse("5-"), RuleSet::from_counts(&[5]));
        assert_eq!(RuleSet::parse("-5"), RuleSet::from_counts(&[5]));
    }

    #[test]
    fn test_parse_huge_integer_saturates() {
        // A digit run too long for u32 still parses (and lands out of
        // domain) instead of failing.
        assert!(RuleSet::parse("99999999999999999999").is_empty());
        assert_eq!(
            RuleSet::parse("3-99999999999999999999"),
            RuleSet::parse("3-26")
        );
    }

    #[test]
    fn test_parse_preset_rules() {
        // The "Amoeba" preset rule strings from the preset table.
        let survive = RuleSet::parse("9-26");
        assert_eq!(survive.len(), 18);

        let spawn = RuleSet::parse("5-7,12-13,15");
        for n in 0..=MAX_NEIGHBORS {
            let expected = matches!(n, 5 | 6 | 7 | 12 | 13 | 15);
            assert_eq!(spawn.contains(n), expected, "count {n}");
        }
    }
}
