//! Password strength classification.
//!
//! A password is rated by which character classes it mixes: letters,
//! digits, and a fixed set of special characters. Length under four
//! characters is always weak, regardless of composition.

use std::sync::LazyLock;

use regex::Regex;

static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]").expect("letter regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("digit regex"));
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("special regex"));

/// Strength rating shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Average,
    Strong,
}

impl Strength {
    /// Numeric level used for the fill bar: 1..=3.
    pub fn level(self) -> u8 {
        match self {
            Strength::Weak => 1,
            Strength::Average => 2,
            Strength::Strong => 3,
        }
    }

    /// Display label for the strength text.
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Average => "average",
            Strength::Strong => "strong",
        }
    }
}

/// Classifies a password, or `None` for the empty string (no indicator).
///
/// Ordering matters: short passwords are weak no matter what they
/// contain; after that, three character classes beat two, two beat one.
pub fn classify(password: &str) -> Option<Strength> {
    if password.is_empty() {
        return None;
    }

    if password.chars().count() < 4 {
        return Some(Strength::Weak);
    }

    let has_letters = LETTERS.is_match(password);
    let has_digits = DIGITS.is_match(password);
    let has_special = SPECIAL.is_match(password);

    let classes = usize::from(has_letters) + usize::from(has_digits) + usize::from(has_special);
    let strength = match classes {
        3 => Strength::Strong,
        2 => Strength::Average,
        _ => Strength::Weak,
    };

    Some(strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_has_no_rating() {
        assert_eq!(classify(""), None);
    }

    #[test]
    fn short_passwords_are_weak_regardless_of_composition() {
        assert_eq!(classify("1!"), Some(Strength::Weak));
        assert_eq!(classify("a1!"), Some(Strength::Weak));
        assert_eq!(classify("abc"), Some(Strength::Weak));
    }

    #[test]
    fn single_class_is_weak() {
        assert_eq!(classify("abcdefg"), Some(Strength::Weak));
        assert_eq!(classify("1234567"), Some(Strength::Weak));
    }

    #[test]
    fn two_classes_are_average() {
        assert_eq!(classify("abc123"), Some(Strength::Average));
        assert_eq!(classify("abc!!"), Some(Strength::Average));
        assert_eq!(classify("123!!"), Some(Strength::Average));
    }

    #[test]
    fn three_classes_are_strong() {
        assert_eq!(classify("abc123!"), Some(Strength::Strong));
        assert_eq!(classify("a1,bcd"), Some(Strength::Strong));
    }

    #[test]
    fn only_the_fixed_special_set_counts() {
        // '-' and '_' are not in the special set, so this stays two-class.
        assert_eq!(classify("abc-123_"), Some(Strength::Average));
    }

    #[test]
    fn levels_and_labels() {
        assert_eq!(Strength::Weak.level(), 1);
        assert_eq!(Strength::Average.level(), 2);
        assert_eq!(Strength::Strong.level(), 3);
        assert_eq!(Strength::Strong.label(), "strong");
    }
}
