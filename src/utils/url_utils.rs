/// Trims a submitted URL and prefixes `https://` when it carries no scheme.
/// Blank entries yield `None`.
pub fn normalize_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(url.to_string())
    } else {
        Some(format!("https://{}", url))
    }
}

pub fn normalize_urls<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .filter_map(|url| normalize_url(url.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blanks_adds_scheme_and_trims() {
        let urls = normalize_urls(&["example.com", " https://foo.bar ", ""]);
        assert_eq!(urls, vec!["https://example.com", "https://foo.bar"]);
    }

    #[test]
    fn keeps_existing_scheme_case_insensitively() {
        assert_eq!(
            normalize_url("HTTP://Example.com/path").as_deref(),
            Some("HTTP://Example.com/path")
        );
        assert_eq!(
            normalize_url("http://localhost:8080").as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert_eq!(normalize_url("   \t\n"), None);
        assert!(normalize_urls::<&str>(&[]).is_empty());
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let once = normalize_urls(&["foo.bar/x"]);
        assert_eq!(normalize_urls(once.as_slice()), once);
    }
}
