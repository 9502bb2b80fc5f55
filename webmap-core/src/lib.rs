pub mod crawl;
pub mod map;
pub mod report;

use colored::Colorize;

pub fn print_banner() {
    println!(
        "{}",
        r#"
              __
 _    _____  / /  __ _  ___ ____
| |/|/ / -_)/ _ \/  ' \/ _ `/ _ \
|__,__/\__//_.__/_/_/_/\_,_/ .__/
                          /_/       "#
            .bright_cyan()
    );
    println!(
        "{}",
        format!(
            "webmap v{} - website link-graph mapper",
            env!("CARGO_PKG_VERSION")
        )
        .bright_blue()
    );
    println!();
}
