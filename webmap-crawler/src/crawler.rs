use crate::error::{CrawlError, Result};
use crate::result::SiteMap;
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Sequential site crawler. Starting from a seed URL it walks every internal
/// page reachable through hyperlinks and records the directed edges between
/// pages, the external links it saw, and the URLs that failed to fetch.
///
/// Traversal order is LIFO: the most recently discovered page is fetched
/// next, giving depth-first-like exploration. Fetches are strictly
/// sequential; a page failure is recorded and never aborts the crawl.
pub struct Crawler {
    client: Client,
    root: Option<String>,
    progress_callback: Option<ProgressCallback>,
}

/// Links lifted out of one parsed page: the optional `<base href>` value and
/// every `a[href]` attribute in document order.
struct PageLinks {
    base: String,
    hrefs: Vec<String>,
}

impl Crawler {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Webmap/0.1 (site link mapper)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs / 2))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            root: None,
            progress_callback: None,
        }
    }

    /// Override the site boundary prefix. Defaults to the normalized seed URL.
    pub fn with_root(mut self, root: String) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Crawl to exhaustion from `seed_url` and return the frozen [`SiteMap`].
    ///
    /// Only an unparsable seed fails the run as a whole. Individual page
    /// failures land in the broken set and the crawl continues.
    pub async fn crawl(&self, seed_url: &str) -> Result<SiteMap> {
        let seed = Url::parse(seed_url)
            .map_err(|e| CrawlError::InvalidUrl(format!("{}: {}", seed_url, e)))?;
        let seed = normalize(&seed);
        let root = self.root.clone().unwrap_or_else(|| seed.clone());

        info!("Starting crawl of {} (root prefix {})", seed, root);

        let mut map = SiteMap::new(root.clone());
        // The seed counts as discovered, so a link back to it is not re-fetched.
        map.visited.insert(seed.clone());

        let mut frontier: Vec<(String, Option<String>)> = vec![(seed, None)];

        // LIFO pop: last-discovered page is visited next.
        while let Some((url, origin)) = frontier.pop() {
            info!(
                "Visiting {} (from {})",
                url,
                origin.as_deref().unwrap_or("seed")
            );
            if let Some(ref callback) = self.progress_callback {
                callback(url.clone());
            }

            let body = match self.fetch_page(&url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Fetch failed for {}: {}", url, e);
                    map.broken.insert(url);
                    continue;
                }
            };

            let links = extract_links(&body);
            self.collect_links(&url, &links, &root, &mut map, &mut frontier);
        }

        info!(
            "Crawl complete: {} pages, {} edges, {} external, {} broken",
            map.page_count(),
            map.edge_count(),
            map.external.len(),
            map.broken.len()
        );
        Ok(map)
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Classify every link found on `page_url`: internal links are normalized,
    /// edged, and enqueued on first discovery; everything else lands in the
    /// external set. Malformed hrefs are skipped.
    fn collect_links(
        &self,
        page_url: &str,
        links: &PageLinks,
        root: &str,
        map: &mut SiteMap,
        frontier: &mut Vec<(String, Option<String>)>,
    ) {
        for href in &links.hrefs {
            if href.starts_with("mailto:") {
                continue;
            }

            let resolved = match resolve_href(page_url, &links.base, href) {
                Some(resolved) => resolved,
                None => {
                    debug!("Skipping malformed link {:?} on {}", href, page_url);
                    continue;
                }
            };

            if resolved.as_str().starts_with(root) {
                let normalized = normalize(&resolved);
                // Every occurrence records its edge, not just the first
                // discovery of the target.
                map.edges.insert((page_url.to_string(), normalized.clone()));
                if map.visited.insert(normalized.clone()) {
                    frontier.push((normalized, Some(page_url.to_string())));
                }
            } else {
                map.external.insert(resolved.into());
            }
        }
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a page body and pull out its `<base href>` (empty string when
/// absent) and every anchor href. Parsing is best-effort and never fails.
fn extract_links(html: &str) -> PageLinks {
    let document = Html::parse_document(html);

    let base_selector = Selector::parse("base[href]").unwrap();
    let base = document
        .select(&base_selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .unwrap_or("")
        .to_string();

    let link_selector = Selector::parse("a[href]").unwrap();
    let hrefs = document
        .select(&link_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    PageLinks { base, hrefs }
}

/// Resolve one href against the page. Already-absolute hrefs are parsed
/// as-is; relative ones are joined in two stages: first against the page's
/// `<base href>`, then against the page URL itself.
fn resolve_href(page_url: &str, base: &str, href: &str) -> Option<Url> {
    if href.starts_with("http") {
        return Url::parse(href).ok();
    }
    let page = Url::parse(page_url).ok()?;
    page.join(base).ok()?.join(href).ok()
}

/// Strip query string and fragment, keeping scheme, host, and path.
fn normalize(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.to_string()
}
