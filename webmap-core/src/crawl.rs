use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;
use webmap_crawler::{CrawlError, Crawler, SiteMap};

/// Options for configuring a crawl operation
pub struct CrawlOptions {
    /// Seed URL the crawl starts from.
    pub seed: String,
    /// Site boundary prefix; defaults to the seed when `None`.
    pub root: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Drive an interactive spinner while crawling.
    pub show_progress: bool,
}

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Execute a crawl with the given options and return the frozen site map.
pub async fn execute_crawl(options: CrawlOptions) -> Result<SiteMap, CrawlError> {
    let CrawlOptions {
        seed,
        root,
        timeout_secs,
        show_progress,
    } = options;

    let progress_bar = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let visited_count = Arc::new(AtomicUsize::new(0));

    let mut crawler = Crawler::with_timeout(timeout_secs);
    if let Some(root) = root {
        crawler = crawler.with_root(root);
    }
    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        let count_clone = visited_count.clone();
        crawler = crawler.with_progress_callback(Arc::new(move |url: String| {
            let count = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            pb_clone.set_message(format!("Crawling... {} pages ({})", count, extract_url_path(&url)));
            pb_clone.tick();
        }));
    }

    let site_map = crawler.crawl(&seed).await?;

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!(
            "Crawl complete! {} pages, {} edges",
            site_map.page_count(),
            site_map.edge_count()
        ));
    }

    Ok(site_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_url_path_root() {
        assert_eq!(extract_url_path("https://site.example"), "/");
        assert_eq!(extract_url_path("https://site.example/"), "/");
    }

    #[test]
    fn test_extract_url_path_nested() {
        assert_eq!(
            extract_url_path("https://site.example/a/b/c"),
            "/a/b/c"
        );
    }

    #[test]
    fn test_extract_url_path_unparsable_passthrough() {
        assert_eq!(extract_url_path("not a url"), "not a url");
    }
}
