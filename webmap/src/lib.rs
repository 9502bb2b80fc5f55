// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{parse_seed_url, resolve_output_path};

// Re-export crawl functionality from webmap-core
pub use webmap_core::crawl::{CrawlOptions, execute_crawl, extract_url_path};
pub use webmap_core::report::{ReportFormat, generate_crawl_report, generate_json_report};
