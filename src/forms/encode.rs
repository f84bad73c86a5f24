//! URL-encoded body serialization for form submissions.

/// Serializes field name/value pairs into an `application/x-www-form-urlencoded`
/// request body.
pub fn urlencoded_body(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_every_pair_in_order() {
        let body = urlencoded_body(&[
            ("name", "Jane Doe".to_string()),
            ("email", "jane@example.com".to_string()),
            ("message", "Hi & hello".to_string()),
        ]);
        assert_eq!(body, "name=Jane%20Doe&email=jane%40example.com&message=Hi%20%26%20hello");
    }

    #[test]
    fn empty_values_are_kept() {
        assert_eq!(urlencoded_body(&[("phone", String::new())]), "phone=");
    }
}
