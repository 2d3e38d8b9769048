//! Field-name tokenization.

use smallvec::SmallVec;

/// Lower-cased name tokens. Most names have at most four.
pub type Tokens = SmallVec<[String; 4]>;

/// A field name split into tokens, plus the tokens joined without separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    pub tokens: Tokens,
    pub joined: String,
}

impl NormalizedName {
    pub fn new(raw: &str) -> Self {
        let tokens = tokenize(raw);
        let joined = tokens.concat();
        Self { tokens, joined }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the name's trailing tokens equal `suffix`.
    pub fn ends_with(&self, suffix: &[String]) -> bool {
        !suffix.is_empty() && self.tokens.ends_with(suffix)
    }

    /// Whether `needle` occurs as a contiguous run of tokens.
    pub fn contains_run(&self, needle: &[String]) -> bool {
        !needle.is_empty()
            && needle.len() <= self.tokens.len()
            && self.tokens.windows(needle.len()).any(|w| w == needle)
    }
}

/// Split on non-alphanumeric characters and camelCase boundaries, then
/// lower-case. `customerID` → `customer id`, `SSNNumber` → `ssn number`,
/// `ipv4Address` → `ipv4 address`.
pub fn tokenize(raw: &str) -> Tokens {
    let chars: Vec<char> = raw.chars().collect();
    let mut tokens = Tokens::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut tokens);
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                flush(&mut current, &mut tokens);
            }
        }
        current.extend(c.to_lowercase());
    }
    flush(&mut current, &mut tokens);
    tokens
}

fn flush(current: &mut String, tokens: &mut Tokens) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
