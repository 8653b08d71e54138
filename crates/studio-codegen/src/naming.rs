//! Identifier derivation for generated code.

use convert_case::{Case, Casing};
use studio_registry::capitalize;

/// Derive a lowerCamelCase variable name from a display label.
///
/// `"Full Name"` becomes `fullName`, `"Date of Birth"` becomes `dateOfBirth`.
/// Characters other than ASCII letters, digits and whitespace are dropped.
/// A name that would start with a digit gets a `field` prefix, so
/// `"2nd Email"` becomes `field2ndEmail`.
pub fn to_var_name(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let name: String = cleaned
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let word = word.to_lowercase();
            if i == 0 {
                word
            } else {
                capitalize(&word)
            }
        })
        .collect();

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("field{}", name)
    } else {
        name
    }
}

/// Turn free text into a PascalCase component name, for callers that need to
/// sanitize a screen name before generating.
///
/// Falls back to `fallback` when nothing usable remains.
pub fn screen_identifier(raw: &str, fallback: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let name = cleaned.trim().to_case(Case::Pascal);

    match name.chars().next() {
        None => fallback.to_string(),
        Some(c) if c.is_ascii_digit() => format!("Screen{}", name),
        Some(_) => name,
    }
}

/// Identifiers the generated file already uses, plus JavaScript reserved words.
pub(crate) const RESERVED: &[&str] = &[
    "styles", "handleSubmit", "isValid", "useState", "await", "break", "case", "catch", "class",
    "const", "continue", "debugger", "default", "delete", "do", "else", "enum", "export",
    "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof", "let",
    "new", "null", "return", "static", "super", "switch", "this", "throw", "true", "try",
    "typeof", "undefined", "var", "void", "while", "with", "yield",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_var_name() {
        assert_eq!(to_var_name("Full Name"), "fullName");
        assert_eq!(to_var_name("Date of Birth"), "dateOfBirth");
        assert_eq!(to_var_name("  E-mail   ADDRESS "), "emailAddress");
        assert_eq!(to_var_name("Confirm Password"), "confirmPassword");
        assert_eq!(to_var_name("!!!"), "");
    }

    #[test]
    fn test_to_var_name_leading_digit() {
        assert_eq!(to_var_name("2nd Email"), "field2ndEmail");
        assert_eq!(to_var_name("#1 Choice"), "field1Choice");
        assert_eq!(to_var_name("Address 2"), "address2");
    }

    #[test]
    fn test_screen_identifier() {
        assert_eq!(screen_identifier("sign up screen", "MyScreen"), "SignUpScreen");
        assert_eq!(screen_identifier("  ", "MyScreen"), "MyScreen");
        assert_eq!(screen_identifier("2fa", "MyScreen").chars().next(), Some('S'));
    }
}
