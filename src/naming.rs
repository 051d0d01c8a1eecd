//! # Naming Module
//!
//! Case transformations shared by the scaffolder and the menu resolver.
//!
//! - [`snake_case`] drives file and folder names (`UserGroup` → `user_group`)
//! - [`pascal_case`] drives Ruby module and class names (`user_group` → `UserGroup`)
//! - [`humanize`] drives display-only fallbacks (`sales_report` → `Sales report`)
//!
//! Word boundaries follow `heck`: a lower→upper transition, an acronym
//! followed by a capitalised word (`HTMLParser` → `html_parser`) and any run
//! of non-alphanumeric separators. Separator runs collapse, and leading or
//! trailing separators are dropped, so `__user__group_` → `user_group`.
//!
//! A digit is not a word boundary. `snake_case(pascal_case(x))` therefore
//! gives back `snake_case(x)` only for names whose words start with a letter:
//! `report_2024` becomes `Report2024` and then `report2024`, and `user_2fa`
//! ends up as `user2fa`. Rails' `camelize`/`underscore` behave the same way.

use heck::{ToPascalCase, ToSnakeCase};

/// Convert a resource or model name to snake_case
///
/// # Example
///
/// ```rust
/// use trestlekit::naming::snake_case;
///
/// assert_eq!(snake_case("UserGroup"), "user_group");
/// assert_eq!(snake_case("User_Profile"), "user_profile");
/// ```
pub fn snake_case(name: &str) -> String {
    name.trim().to_snake_case()
}

/// Convert a resource or model name to PascalCase (Ruby constant form)
///
/// # Example
///
/// ```rust
/// use trestlekit::naming::pascal_case;
///
/// assert_eq!(pascal_case("user_group"), "UserGroup");
/// ```
pub fn pascal_case(name: &str) -> String {
    name.trim().to_pascal_case()
}

/// Render a configuration key as a human-readable label
///
/// Underscores become spaces, the result is lower-cased and the first letter
/// capitalised. Used only for display strings, never for identifiers.
pub fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let lowered = spaced.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("UserGroup"), "user_group");
        assert_eq!(snake_case("User_Profile"), "user_profile");
        assert_eq!(snake_case("user_group"), "user_group");
        assert_eq!(snake_case("MyResource"), "my_resource");
        assert_eq!(snake_case("Product"), "product");
    }

    #[test]
    fn test_snake_case_edge_cases() {
        assert_eq!(snake_case("user__group"), "user_group");
        assert_eq!(snake_case("_user_group_"), "user_group");
        assert_eq!(snake_case("HTMLParser"), "html_parser");
        assert_eq!(snake_case("  Padded  "), "padded");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("user_group"), "UserGroup");
        assert_eq!(pascal_case("UserGroup"), "UserGroup");
        assert_eq!(pascal_case("user"), "User");
        assert_eq!(pascal_case("my_resource"), "MyResource");
        assert_eq!(pascal_case("multiple___underscores"), "MultipleUnderscores");
    }

    #[test]
    fn test_digit_words_merge_on_round_trip() {
        assert_eq!(pascal_case("report_2024"), "Report2024");
        assert_eq!(snake_case(&pascal_case("report_2024")), "report2024");
        assert_eq!(snake_case(&pascal_case("user_2fa")), "user2fa");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("sales_report"), "Sales report");
        assert_eq!(humanize("dashboard"), "Dashboard");
        assert_eq!(humanize("USER_Settings"), "User settings");
        assert_eq!(humanize("_padded_"), "Padded");
        assert_eq!(humanize(""), "");
    }
}
