//! Country-mismatch detection between what the user typed and where the
//! results actually are.
//!
//! Detection is a substring heuristic, not geocoding. It sits behind the
//! [`CountryDetector`] trait so a real lookup can replace it without touching
//! the filter.

/// Finds the country a user named and the country the results point at.
pub trait CountryDetector {
    /// Country explicitly named in the user's (lowercased) location text.
    fn user_country(&self, lowered_query: &str) -> Option<&str>;

    /// Country implied by the joined, lowercased pick locations.
    fn result_country(&self, lowered_locations: &str) -> Option<&str>;
}

/// Token → label tables searched in order; the first hit wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryLexicon {
    user_tokens: Vec<(String, String)>,
    result_tokens: Vec<(String, String)>,
}

// Plain substrings of the typed text: "uk" also hits "Milwaukee".
const USER_TOKENS: [(&str, &str); 8] = [
    ("philippines", "Philippines"),
    ("usa", "USA"),
    ("united states", "USA"),
    ("canada", "Canada"),
    ("mexico", "Mexico"),
    ("uk", "UK"),
    ("united kingdom", "UK"),
    ("australia", "Australia"),
];

// Comma-prefixed so a city name that merely contains a country word does not
// match; the "united ..." forms follow a space instead.
const RESULT_TOKENS: [(&str, &str); 8] = [
    (", usa", "USA"),
    (" united states", "USA"),
    (", canada", "Canada"),
    (", mexico", "Mexico"),
    (", uk", "UK"),
    (" united kingdom", "UK"),
    (", australia", "Australia"),
    (", philippines", "Philippines"),
];

impl CountryLexicon {
    /// Builds a lexicon from custom tables. Tokens are matched lowercase.
    #[must_use]
    pub fn new<U, R>(user_tokens: U, result_tokens: R) -> Self
    where
        U: IntoIterator<Item = (String, String)>,
        R: IntoIterator<Item = (String, String)>,
    {
        let lower = |(k, v): (String, String)| (k.to_lowercase(), v);
        Self {
            user_tokens: user_tokens.into_iter().map(lower).collect(),
            result_tokens: result_tokens.into_iter().map(lower).collect(),
        }
    }
}

impl Default for CountryLexicon {
    fn default() -> Self {
        let owned = |(k, v): &(&str, &str)| ((*k).to_string(), (*v).to_string());
        Self {
            user_tokens: USER_TOKENS.iter().map(owned).collect(),
            result_tokens: RESULT_TOKENS.iter().map(owned).collect(),
        }
    }
}

fn first_match<'a>(table: &'a [(String, String)], haystack: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(token, _)| haystack.contains(token.as_str()))
        .map(|(_, label)| label.as_str())
}

impl CountryDetector for CountryLexicon {
    fn user_country(&self, lowered_query: &str) -> Option<&str> {
        first_match(&self.user_tokens, lowered_query)
    }

    fn result_country(&self, lowered_locations: &str) -> Option<&str> {
        first_match(&self.result_tokens, lowered_locations)
    }
}

/// Advisory text for a user/result country conflict, or `None` when the user
/// named no country, the results name none, or the two agree.
///
/// `user_location` is quoted back exactly as typed.
pub fn mismatch_note<'p, D, I>(detector: &D, user_location: &str, locations: I) -> Option<String>
where
    D: CountryDetector + ?Sized,
    I: IntoIterator<Item = &'p str>,
{
    let user_country = detector.user_country(&user_location.to_lowercase())?;

    let joined = locations
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" | ");
    let result_country = detector.result_country(&joined)?;

    if result_country == user_country {
        return None;
    }

    tracing::debug!(user_country, result_country, "location country mismatch");
    Some(format!(
        "I may be interpreting this location broadly. You typed “{user_location}”, but I’m seeing results in {result_country}. If this isn’t the right place, try adding a nearby city or being more specific."
    ))
}
