use std::path::PathBuf;
use url::Url;

/// Parse the seed argument as a URL, trying to add http:// if needed
pub fn parse_seed_url(input: &str) -> Result<Url, String> {
    if let Ok(url) = Url::parse(input) {
        return Ok(url);
    }

    let with_scheme = format!("http://{}", input);
    Url::parse(&with_scheme).map_err(|_| format!("'{}' is not a valid URL", input))
}

/// Expand a user-supplied output path (tilde included)
pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}
