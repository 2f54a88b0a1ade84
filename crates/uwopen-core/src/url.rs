//! Request URL construction for the Open Data API.

/// Prefix shared by every v2 endpoint. Never mutated.
pub const BASE_URL: &str = "https://api.uwaterloo.ca/v2/";

/// Compose a request URL from an API key and ordered path segments.
///
/// Produces `{BASE_URL}{s1}/{s2}/.../{sN}.json?key={key}`. Segments are
/// joined literally with no percent-encoding; callers must supply values
/// that are already URL-path-safe. A segment containing `/` flattens into
/// additional path components, matching the upstream path grammar. Calling
/// with zero segments is not legal.
pub fn format(key: &str, segments: &[&str]) -> String {
    format!("{BASE_URL}{}.json?key={key}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_and_appends_key() {
        let url = format("abc", &["foodservices", "menu"]);
        assert_eq!(url, "https://api.uwaterloo.ca/v2/foodservices/menu.json?key=abc");
    }

    #[test]
    fn single_segment() {
        let url = format("K", &["events"]);
        assert_eq!(url, "https://api.uwaterloo.ca/v2/events.json?key=K");
    }

    #[test]
    fn segments_are_not_encoded() {
        let url = format("K", &["courses", "PHYS", "234"]);
        assert_eq!(url, "https://api.uwaterloo.ca/v2/courses/PHYS/234.json?key=K");
        assert_eq!(url.matches("?key=").count(), 1);
    }

    #[test]
    fn embedded_slash_flattens_into_path_components() {
        let url = format("K", &["buildings", "MC/4040"]);
        assert_eq!(
            url,
            "https://api.uwaterloo.ca/v2/buildings/MC/4040.json?key=K"
        );
    }
}
