//! Validated unit names.

use std::fmt;

use serde::Serialize;

use crate::error::NameError;

/// A name that passed validation: at least two characters, an uppercase
/// first letter, and only letters, spaces, `'` and `"` after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UnitName(String);

impl UnitName {
    /// Validates `name`.
    ///
    /// # Errors
    /// Returns a [`NameError`] describing the first rule the name breaks.
    ///
    /// # Examples
    /// ```
    /// use hillbilly::UnitName;
    /// assert!(UnitName::parse("James O'Hara").is_ok());
    /// assert!(UnitName::parse("james").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, NameError> {
        let mut chars = name.chars();
        let Some(initial) = chars.next() else {
            return Err(NameError::TooShort(name.to_owned()));
        };
        if chars.clone().next().is_none() {
            return Err(NameError::TooShort(name.to_owned()));
        }
        if !initial.is_ascii_uppercase() {
            return Err(NameError::LowercaseInitial(name.to_owned()));
        }
        if let Some(character) = chars.find(|c| !is_name_character(*c)) {
            return Err(NameError::ForbiddenCharacter {
                name: name.to_owned(),
                character,
            });
        }
        Ok(Self(name.to_owned()))
    }

    /// The validated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_name_character(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '\'' | '"')
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Jo")]
    #[case("Billy Bob")]
    #[case("Ma \"Granny\" Clampett")]
    #[case("D'Artagnan")]
    fn accepts_well_formed_names(#[case] name: &str) {
        let parsed = UnitName::parse(name).expect("name should be valid");
        assert_eq!(parsed.as_str(), name);
    }

    #[rstest]
    #[case("", NameError::TooShort(String::new()))]
    #[case("J", NameError::TooShort("J".into()))]
    #[case("jethro", NameError::LowercaseInitial("jethro".into()))]
    #[case("'Jed", NameError::LowercaseInitial("'Jed".into()))]
    #[case("Jed2", NameError::ForbiddenCharacter { name: "Jed2".into(), character: '2' })]
    #[case("Jed-Bob", NameError::ForbiddenCharacter { name: "Jed-Bob".into(), character: '-' })]
    fn rejects_malformed_names(#[case] name: &str, #[case] expected: NameError) {
        assert_eq!(UnitName::parse(name), Err(expected));
    }
}
