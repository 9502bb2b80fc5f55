use anyhow::{Context, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use std::path::Path;
use webmap::handlers::{parse_seed_url, resolve_output_path};
use webmap_core::crawl::{CrawlOptions, execute_crawl};
use webmap_core::map::SiteGraph;
use webmap_core::print_banner;
use webmap_core::report::{ReportFormat, generate_crawl_report, generate_json_report};
use webmap_crawler::SiteMap;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("crawl", primary_command)) => {
            if let Err(e) = handle_crawl(primary_command, quiet).await {
                eprintln!("{} {:#}", "[!]".bright_red(), e);
                std::process::exit(1);
            }
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

async fn handle_crawl(args: &ArgMatches, quiet: bool) -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let seed_arg = args.get_one::<String>("url").expect("url is required");
    let seed = parse_seed_url(seed_arg).map_err(|e| anyhow!(e))?;
    let root = args.get_one::<String>("root").cloned();
    let output = resolve_output_path(args.get_one::<String>("output").expect("has default"));
    let timeout_secs = *args.get_one::<u64>("timeout").expect("has default");
    let no_map = args.get_flag("no-map");

    let report_arg = args.get_one::<String>("report").expect("has default");
    let report_format = ReportFormat::from_str(report_arg)
        .ok_or_else(|| anyhow!("unknown report format '{}' (expected text or json)", report_arg))?;

    if !quiet {
        println!("Mapping {}\n", seed.as_str().bright_cyan());
    }

    let options = CrawlOptions {
        seed: seed.into(),
        root,
        timeout_secs,
        show_progress: !quiet,
    };
    let site_map = execute_crawl(options).await?;

    if site_map.edges.is_empty() && !site_map.broken.is_empty() {
        println!(
            "{} The seed URL could not be fetched; the resulting map is empty.",
            "[!]".bright_yellow()
        );
    }

    match report_format {
        ReportFormat::Text => print!("{}", generate_crawl_report(&site_map)),
        ReportFormat::Json => {
            let json = generate_json_report(&site_map).context("failed to render JSON report")?;
            println!("{}", json);
        }
    }

    if !no_map {
        write_map(&site_map, &output, quiet)?;
    }

    Ok(())
}

fn write_map(site_map: &SiteMap, output: &Path, quiet: bool) -> anyhow::Result<()> {
    let graph = SiteGraph::from_edges(&site_map.edges);
    graph
        .save(output)
        .with_context(|| format!("failed to write map to {}", output.display()))?;

    if !quiet {
        println!(
            "{} Map written to {} ({} nodes, {} edges)",
            "[+]".bright_green(),
            output.display(),
            graph.node_count(),
            graph.edge_count()
        );
    }
    Ok(())
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
