use crate::CLAP_STYLING;
use clap::{arg, command};
use webmap_core::map::DEFAULT_MAP_FILE;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("webmap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("webmap")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and progress output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("crawl")
                .about(
                    "Crawl a site from a seed URL and export its internal link graph as an \
                interactive HTML map.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The seed URL to start crawling from"),
                )
                .arg(
                    arg!(--"root" <PREFIX>)
                        .required(false)
                        .help(
                            "Site boundary prefix; links outside it are recorded as external \
                        (default: the seed URL)",
                        ),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Path of the HTML map artifact")
                        .default_value(DEFAULT_MAP_FILE),
                )
                .arg(
                    arg!(--"report" <FORMAT>)
                        .required(false)
                        .help("Crawl report format printed to stdout: text or json")
                        .default_value("text"),
                )
                .arg(
                    arg!(--"timeout" <SECS>)
                        .required(false)
                        .help("Per-request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"no-map" "Skip writing the HTML map artifact")
                        .action(clap::ArgAction::SetTrue)
                        .required(false),
                ),
        )
}
