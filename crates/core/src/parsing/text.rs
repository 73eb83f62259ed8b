/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive membership test over a list of strings.
pub fn list_contains_ignore_case<S: AsRef<str>>(items: &[S], value: &str) -> bool {
    let value = value.to_lowercase();
    items.iter().any(|item| item.as_ref().to_lowercase() == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Show.S01E02.720p", "s01e02"));
        assert!(contains_ignore_case("show s01e02", "S01E02"));
        assert!(!contains_ignore_case("Show S01E03", "S01E02"));
    }

    #[test]
    fn test_list_contains_ignore_case() {
        let tags = vec!["Scene".to_string(), "x264".to_string()];
        assert!(list_contains_ignore_case(&tags, "scene"));
        assert!(list_contains_ignore_case(&tags, "X264"));
        assert!(!list_contains_ignore_case(&tags, "scen"));
        assert!(!list_contains_ignore_case::<String>(&[], "scene"));
    }
}
