pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Preview request built from the form that owns the watched control.
///
/// Always sent as a POST to the form's action, with the form's successful
/// controls as an urlencoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl PreviewRequest {
    pub const METHOD: &'static str = "POST";

    pub fn new(url: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            url: url.into(),
            fields,
        }
    }

    /// Encode fields in document order as `name=value` pairs joined by `&`.
    pub fn body(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(&normalize_newlines(name)),
                    urlencoding::encode(&normalize_newlines(value))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Browsers submit line breaks as CRLF; do the same for bare LF or CR.
fn normalize_newlines(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_body_keeps_field_order() {
        let request = PreviewRequest::new(
            "/admin/menuhin/menuitem/import/",
            fields(&[("csrfmiddlewaretoken", "abc"), ("klass", "menus.Main")]),
        );
        assert_eq!(request.body(), "csrfmiddlewaretoken=abc&klass=menus.Main");
    }

    #[test]
    fn test_body_escapes_reserved_characters() {
        let request = PreviewRequest::new("/", fields(&[("q", "a b&c=d/é")]));
        assert_eq!(request.body(), "q=a%20b%26c%3Dd%2F%C3%A9");
    }

    #[test]
    fn test_body_normalizes_line_breaks() {
        let request = PreviewRequest::new("/", fields(&[("notes", "one\ntwo\r\nthree\rfour")]));
        assert_eq!(
            request.body(),
            "notes=one%0D%0Atwo%0D%0Athree%0D%0Afour"
        );
    }

    #[test]
    fn test_repeated_names_and_empty_form() {
        let request = PreviewRequest::new("/", fields(&[("site", "1"), ("site", "2")]));
        assert_eq!(request.body(), "site=1&site=2");
        assert_eq!(PreviewRequest::new("/", Vec::new()).body(), "");
    }
}
