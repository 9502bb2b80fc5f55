// Report generation from a finished crawl

use crate::crawl::extract_url_path;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;
use webmap_crawler::SiteMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Generate a human-readable crawl report
pub fn generate_crawl_report(site_map: &SiteMap) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Root URL:        {}\n", site_map.root));
    report.push_str(&format!("  Pages visited:   {}\n", site_map.page_count()));
    report.push_str(&format!("  Internal links:  {}\n", site_map.edge_count()));
    report.push_str(&format!("  External links:  {}\n", site_map.external.len()));
    report.push_str(&format!("  Broken links:    {}\n", site_map.broken.len()));
    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    report.push_str(&format!("## Pages under {}\n", site_map.root));
    for url in &site_map.visited {
        report.push_str(&format!("  {}\n", extract_url_path(url)));
    }
    report.push('\n');

    if !site_map.broken.is_empty() {
        report.push_str("## Broken links\n");
        for url in &site_map.broken {
            report.push_str(&format!("  {}\n", url));
        }
        report.push('\n');
    }

    if !site_map.external.is_empty() {
        report.push_str("## External links by host\n");
        for (host, links) in group_external_by_host(site_map) {
            report.push_str(&format!("  {} ({})\n", host, links.len()));
            for link in links {
                report.push_str(&format!("    {}\n", link));
            }
        }
        report.push('\n');
    }

    report
}

pub fn generate_json_report(site_map: &SiteMap) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "webmap",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "summary": {
                "root": site_map.root,
                "pages_visited": site_map.page_count(),
                "internal_links": site_map.edge_count(),
                "external_links": site_map.external.len(),
                "broken_links": site_map.broken.len()
            },
            "edges": site_map.edges,
            "external": site_map.external,
            "broken": site_map.broken,
            "visited": site_map.visited
        }
    });

    serde_json::to_string_pretty(&json_report)
}

/// Group external links by their host; unparsable links group under "other".
fn group_external_by_host(site_map: &SiteMap) -> BTreeMap<String, Vec<&str>> {
    let mut by_host: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for link in &site_map.external {
        let host = Url::parse(link)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "other".to_string());
        by_host.entry(host).or_default().push(link);
    }
    by_host
}
