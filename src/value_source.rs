//! Deterministic fake-value generator.
//!
//! A [`ValueSource`] owns one seeded pseudo-random stream. The numeric seed is
//! the CRC-32 of the opaque seed string (usually an endpoint identifier), so the
//! same seed and the same sequence of generator calls yield the same values on
//! every run and platform.
//!
//! ```text
//! "GET /users" ──crc32──▶ u64 ──StdRng::seed_from_u64──▶ word / number / date / ...
//! ```
//!
//! Every draw goes through fixed-width integer ranges (`u64`/`i64`) so the
//! stream does not depend on the pointer width of the target.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::Ipv4Addr;

/// Words used for generic text values.
static WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium", "doloremque", "aperiam",
    "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis", "et", "quasi", "architecto", "beatae", "vitae",
    "dicta", "sunt", "explicabo", "aspernatur", "odit", "fugit", "sed", "quia", "consequuntur", "magni", "dolores",
    "eos", "qui", "ratione", "sequi", "nesciunt", "neque", "dolorem", "ipsum", "dolor", "amet", "consectetur",
    "adipisci", "velit", "numquam", "eius", "modi", "tempora", "incidunt", "ut", "labore", "dolore", "magnam",
    "aliquam", "quaerat", "enim", "minima", "veniam", "quis", "nostrum", "exercitationem", "ullam", "corporis",
    "nemo", "ipsam", "voluptas", "omnis", "iste", "natus", "error", "similique", "rerum", "facilis", "expedita",
    "distinctio", "nam", "libero", "tempore", "cum", "soluta", "nobis", "eligendi", "optio", "cumque", "nihil",
    "impedit", "quo", "porro", "quisquam", "est", "minus", "id", "quod", "maxime", "placeat", "facere", "possimus",
];

static SAFE_EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

static URL_SUFFIXES: &[&str] = &["com", "org", "net", "info", "biz", "io"];

/// Continents and oceans that prefix canonical IANA zone names.
static ZONE_AREAS: &[&str] =
    &["Africa", "America", "Antarctica", "Arctic", "Asia", "Atlantic", "Australia", "Europe", "Indian", "Pacific"];

static CANONICAL_ZONES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| name.split_once('/').is_some_and(|(area, _)| ZONE_AREAS.contains(&area)))
        .collect()
});

/// Upper bound used when a numeric draw has no explicit maximum.
pub const MAX_RANDOM: i64 = 2_147_483_647;

/// Seeded generator for example values.
///
/// Construct one per field and let it be dropped with the aggregation that
/// created it; sharing an instance across fields makes values depend on call
/// order instead of only on the seed.
#[derive(Debug, Clone)]
pub struct ValueSource {
    seed: u64,
    rng: StdRng,
}

impl ValueSource {
    /// Derive the numeric seed from `seed` with CRC-32 and start a fresh stream.
    pub fn from_seed(seed: &str) -> Self {
        Self::from_numeric_seed(u64::from(seed_hash(seed)))
    }

    pub fn from_numeric_seed(seed: u64) -> Self {
        Self { seed, rng: StdRng::seed_from_u64(seed) }
    }

    /// The numeric seed this stream was started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A generic lower-case word.
    pub fn word(&mut self) -> String {
        self.pick(WORDS).to_string()
    }

    /// A number in `[min, max]`; bounds are swapped when given in reverse order.
    pub fn number_between(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }

    /// A random number with at most `digits` digits.
    ///
    /// Without `digits` a width between 1 and 9 is drawn first. With `strict`
    /// the result has exactly `digits` digits (no leading zero).
    pub fn random_number(&mut self, digits: Option<u32>, strict: bool) -> i64 {
        let digits = match digits {
            Some(d) => d.clamp(1, 18),
            None => self.rng.gen_range(1..=9u32),
        };
        let max = 10i64.pow(digits) - 1;
        if strict { self.rng.gen_range(10i64.pow(digits - 1)..=max) } else { self.rng.gen_range(0..=max) }
    }

    /// A string of exactly `len` decimal digits, leading digit non-zero.
    ///
    /// Built from 9–10 digit draws in `[100000000, MAX_RANDOM]` concatenated and
    /// cut to length, which keeps arbitrarily long digit counts representable.
    pub fn digit_string(&mut self, len: usize) -> String {
        let mut out = String::with_capacity(len + 10);
        while out.len() < len {
            let chunk = self.rng.gen_range(100_000_000..=MAX_RANDOM);
            out.push_str(&chunk.to_string());
        }
        out.truncate(len);
        out
    }

    /// A calendar date between the Unix epoch and 2038-01-19.
    ///
    /// The window is fixed (not "now") so generated dates are stable over time.
    pub fn date(&mut self) -> NaiveDate {
        let ts = self.rng.gen_range(0..=i64::from(i32::MAX));
        DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()).unwrap_or_default()
    }

    /// [`ValueSource::date`] formatted with a chrono `strftime` pattern.
    pub fn date_formatted(&mut self, format: &str) -> String {
        self.date().format(format).to_string()
    }

    /// One uniformly chosen element of `items`, or `None` for an empty slice.
    pub fn element<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..items.len() as u64) as usize;
        items.get(idx)
    }

    /// An address on one of the reserved `example.*` domains.
    pub fn safe_email(&mut self) -> String {
        let user = self.user_name();
        let domain = self.pick(SAFE_EMAIL_DOMAINS);
        format!("{user}@{domain}")
    }

    pub fn url(&mut self) -> String {
        let scheme = if self.rng.gen_bool(0.5) { "http" } else { "https" };
        let host = self.word();
        let suffix = self.pick(URL_SUFFIXES);
        let path = format!("{}-{}", self.word(), self.word());
        format!("{scheme}://www.{host}.{suffix}/{path}")
    }

    pub fn ipv4(&mut self) -> Ipv4Addr {
        Ipv4Addr::from(self.rng.gen_range(0..=u64::from(u32::MAX)) as u32)
    }

    /// An IANA time zone name such as `Europe/Paris`.
    ///
    /// Only `Area/Location` identifiers are drawn; legacy aliases such as
    /// `US/Pacific`, `EST5EDT` or `Etc/GMT+3` never appear.
    pub fn timezone(&mut self) -> &'static str {
        self.element(CANONICAL_ZONES.as_slice()).copied().unwrap_or("UTC")
    }

    fn user_name(&mut self) -> String {
        let first = self.word();
        match self.rng.gen_range(0..3u8) {
            0 => first,
            1 => format!("{first}.{}", self.word()),
            _ => format!("{first}{}", self.rng.gen_range(1..=99u32)),
        }
    }

    fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        self.element(items).copied().unwrap_or("lorem")
    }
}

/// Stable CRC-32 of a seed string.
pub fn seed_hash(seed: &str) -> u32 {
    crc32fast::hash(seed.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = ValueSource::from_seed("GET /users");
        let mut b = ValueSource::from_seed("GET /users");
        for _ in 0..20 {
            assert_eq!(a.word(), b.word());
            assert_eq!(a.number_between(0, 1000), b.number_between(0, 1000));
            assert_eq!(a.safe_email(), b.safe_email());
        }
    }

    #[test]
    fn seed_hash_is_crc32() {
        // Reference value of CRC-32/ISO-HDLC for the ASCII check string.
        assert_eq!(seed_hash("123456789"), 0xCBF4_3926);
    }

    #[test]
    fn number_between_accepts_reversed_bounds() {
        let mut source = ValueSource::from_numeric_seed(7);
        for _ in 0..100 {
            let n = source.number_between(10, 3);
            assert!((3..=10).contains(&n));
        }
    }

    #[test]
    fn strict_random_number_has_exact_width() {
        let mut source = ValueSource::from_numeric_seed(11);
        for digits in 1..=8 {
            let n = source.random_number(Some(digits), true);
            assert_eq!(n.to_string().len(), digits as usize);
        }
    }

    #[test]
    fn digit_string_has_exact_length() {
        let mut source = ValueSource::from_numeric_seed(3);
        for len in [9, 10, 11, 25] {
            let s = source.digit_string(len);
            assert_eq!(s.len(), len);
            assert!(s.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(s.as_bytes()[0], b'0');
        }
    }

    #[test]
    fn element_of_empty_slice_is_none() {
        let mut source = ValueSource::from_numeric_seed(1);
        let empty: [&str; 0] = [];
        assert!(source.element(&empty).is_none());
        assert_eq!(source.element(&["only"]), Some(&"only"));
    }

    #[test]
    fn generated_shapes() {
        let mut source = ValueSource::from_seed("shapes");
        let email = source.safe_email();
        assert!(email.contains("@example."));

        let url = source.url();
        assert!(url.starts_with("http://www.") || url.starts_with("https://www."));

        assert!(source.timezone().parse::<chrono_tz::Tz>().is_ok());

        let date = source.date();
        assert!(date >= NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert!(date <= NaiveDate::from_ymd_opt(2038, 1, 19).unwrap());
    }

    #[test]
    fn timezones_are_area_location_names() {
        let mut source = ValueSource::from_seed("zones");
        for _ in 0..500 {
            let zone = source.timezone();
            let (area, _) = zone.split_once('/').expect("area/location");
            assert!(ZONE_AREAS.contains(&area), "{zone}");
        }
        assert!(!CANONICAL_ZONES.contains(&"US/Pacific"));
        assert!(!CANONICAL_ZONES.contains(&"EST5EDT"));
        assert!(!CANONICAL_ZONES.contains(&"Etc/GMT+3"));
        assert!(CANONICAL_ZONES.contains(&"Europe/Paris"));
    }
}
