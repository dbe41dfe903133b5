//! Phone normalization.
//!
//! The code store was populated over time with three different phone formats:
//! digits-only local numbers, `55`-prefixed, and `+55`-prefixed. Rather than
//! assuming one canonical form at rest, a submitted number is reduced to its
//! local digits and expanded into all three variants for an OR-match lookup.

/// Brazilian country calling code, the only region the platform serves.
pub const COUNTRY_PREFIX: &str = "55";

/// Candidate representations of one submitted phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneCandidates {
    local: String,
}

impl PhoneCandidates {
    /// Normalize arbitrary user input (`"+55 (11) 99999-8888"`, `"11 99999 8888"`,
    /// …) by stripping every non-digit character. A leading `55` is treated as
    /// the country prefix only when more than 11 digits remain — an 11-digit
    /// local number may itself start with 55.
    pub fn from_raw(raw: &str) -> Self {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let local = if digits.starts_with(COUNTRY_PREFIX) && digits.len() > 11 {
            digits[COUNTRY_PREFIX.len()..].to_owned()
        } else {
            digits
        };
        Self { local }
    }

    /// Local number: digits only, no country prefix.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Canonical `+55…` form, used when talking to the delivery collaborator
    /// and when rewriting stored phones.
    pub fn e164(&self) -> String {
        format!("+{COUNTRY_PREFIX}{}", self.local)
    }

    /// The OR-match set checked against the store. Order carries no meaning.
    pub fn all(&self) -> [String; 3] {
        [
            self.local.clone(),
            format!("{COUNTRY_PREFIX}{}", self.local),
            self.e164(),
        ]
    }
}
