//! URL construction contract, parameterised over the whole catalogue.

use uwopen_core::{ApiError, Segment, BASE_URL, CATALOGUE};

/// Placeholder parameter values `p0`, `p1`, … for a row's arity.
fn placeholder_params(arity: usize) -> Vec<String> {
    (0..arity).map(|i| format!("p{i}")).collect()
}

#[test]
fn every_row_builds_base_path_json_key() {
    for endpoint in CATALOGUE {
        let params = placeholder_params(endpoint.arity());
        let params: Vec<&str> = params.iter().map(String::as_str).collect();
        let url = endpoint.url("K", &params).expect("arity matches");

        assert!(
            url.starts_with(BASE_URL),
            "{url} must start with the base URL"
        );
        assert!(
            url.ends_with(".json?key=K"),
            "{url} must end with .json?key=K"
        );
    }
}

#[test]
fn every_row_places_segments_in_order() {
    for endpoint in CATALOGUE {
        let params = placeholder_params(endpoint.arity());
        let mut supplied = params.iter();

        let expected: Vec<&str> = endpoint
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Fixed(text) => *text,
                Segment::Param(_) => supplied.next().expect("one value per param").as_str(),
            })
            .collect();

        let params: Vec<&str> = params.iter().map(String::as_str).collect();
        let url = endpoint.url("K", &params).expect("arity matches");

        let path = url
            .strip_prefix(BASE_URL)
            .and_then(|rest| rest.strip_suffix(".json?key=K"))
            .expect("prefix and suffix verified above");
        let actual: Vec<&str> = path.split('/').collect();

        assert_eq!(actual, expected, "segment order for {}", endpoint.qualified_name());
        assert_eq!(url.matches("?key=").count(), 1, "single key parameter");
    }
}

#[test]
fn every_parameterised_row_rejects_missing_params() {
    for endpoint in CATALOGUE.iter().filter(|endpoint| endpoint.arity() > 0) {
        let err = endpoint.url("K", &[]).expect_err("params are required");
        assert!(
            matches!(err, ApiError::SegmentCount { supplied: 0, .. }),
            "arity validation for {}",
            endpoint.qualified_name()
        );
    }
}

#[test]
fn qualified_names_are_unique() {
    let mut names: Vec<String> = CATALOGUE
        .iter()
        .map(|endpoint| endpoint.qualified_name())
        .collect();
    names.sort();
    let before = names.len();
    names.dedup();
    assert_eq!(before, names.len());
}

#[test]
fn catalogue_spans_all_twelve_groups() {
    let mut groups: Vec<&str> = CATALOGUE.iter().map(|endpoint| endpoint.group).collect();
    groups.sort();
    groups.dedup();
    assert_eq!(
        groups,
        vec![
            "api",
            "buildings",
            "codes",
            "courses",
            "events",
            "foodservices",
            "news",
            "resources",
            "server",
            "services",
            "terms",
            "weather",
        ]
    );
}
