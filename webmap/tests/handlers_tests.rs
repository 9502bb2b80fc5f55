use webmap::handlers::*;

#[test]
fn test_parse_seed_url_with_scheme() {
    let result = parse_seed_url("https://example.com").unwrap();
    assert_eq!(result.as_str(), "https://example.com/");
}

#[test]
fn test_parse_seed_url_without_scheme() {
    let result = parse_seed_url("example.com").unwrap();
    assert_eq!(result.as_str(), "http://example.com/");
}

#[test]
fn test_parse_seed_url_keeps_path() {
    let result = parse_seed_url("example.com/docs/intro").unwrap();
    assert_eq!(result.as_str(), "http://example.com/docs/intro");
}

#[test]
fn test_parse_seed_url_invalid() {
    let result = parse_seed_url("not a valid url!!!");
    assert!(result.is_err());
}

#[test]
fn test_resolve_output_path_plain() {
    let path = resolve_output_path("maps/site_map.html");
    assert_eq!(path.to_str().unwrap(), "maps/site_map.html");
}

#[test]
fn test_resolve_output_path_tilde() {
    let path = resolve_output_path("~/site_map.html");
    let rendered = path.to_str().unwrap();
    assert!(!rendered.starts_with('~'));
    assert!(rendered.ends_with("site_map.html"));
}

#[test]
fn test_extract_url_path_reexport() {
    assert_eq!(
        webmap::extract_url_path("https://example.com/a/b"),
        "/a/b"
    );
    assert_eq!(webmap::extract_url_path("https://example.com"), "/");
}
