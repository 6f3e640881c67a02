/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use dsi_progress_logger::prelude::*;
use hopgraph::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use std::time::SystemTime;

pub mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));

    pub fn version_string() -> String {
        format!(
            "{}
build info: {} build for {} with {}",
            PKG_VERSION, PROFILE, TARGET, RUSTC_VERSION
        )
    }
}

#[derive(Args, Debug)]
/// Shared CLI arguments for reading edge lists.
pub struct EdgeListArgs {
    /// The file containing the edge list, or "-" for standard input.
    pub edges: PathBuf,

    #[arg(long, default_value_t = '#')]
    /// Ignore lines that start with this symbol.
    pub comment_symbol: char,

    #[arg(long, default_value_t = 1)]
    /// The identifier of the first node; identifiers are shifted so that it
    /// becomes node 0.
    pub first_node_id: usize,

    #[arg(long)]
    /// The number of nodes; if not specified, it is one plus the largest
    /// node found.
    pub num_nodes: Option<usize>,

    #[arg(long)]
    /// How many edges to read, ignoring comment and blank lines.
    pub max_edges: Option<usize>,
}

impl EdgeListArgs {
    /// Returns a reader configured by these arguments.
    pub fn reader(&self) -> EdgeListReader {
        EdgeListReader::new()
            .comment_symbol(self.comment_symbol)
            .first_node_id(self.first_node_id)
            .num_nodes(self.num_nodes)
            .max_edges(self.max_edges)
    }

    /// Reads the edge list and compacts it into a [`CsrGraph`].
    pub fn load_graph(&self, global_args: &GlobalArgs) -> Result<CsrGraph> {
        let mut pl = ProgressLogger::default();
        pl.display_memory(true);
        if let Some(duration) = global_args.log_interval {
            pl.log_interval(duration);
        }

        let reader = self.reader();
        let arcs = if self.edges.as_os_str() == "-" {
            reader.read(std::io::stdin().lock(), &mut pl)?
        } else {
            reader.load(&self.edges, &mut pl)?
        };

        let graph = arcs
            .build_csr()
            .with_context(|| format!("Could not build a graph from {}", self.edges.display()))?;
        log::info!(
            "Built a graph with {} nodes and {} arcs",
            graph.num_nodes(),
            graph.num_arcs()
        );
        Ok(graph)
    }
}

/// Parses a duration from a string.
/// For compatibility with Java, if no suffix is given, it is assumed to be in milliseconds.
/// You can use suffixes, the available ones are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4 seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let too_long = || anyhow!("Duration {:?} is too long", value);
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            let secs_per_unit = match c {
                's' => 1,
                'm' => 60,
                'h' => 60 * 60,
                'd' => 60 * 60 * 24,
                _ => bail!("Invalid duration suffix: {}", c),
            };
            let secs = dur.checked_mul(secs_per_unit).ok_or_else(too_long)?;
            duration = duration
                .checked_add(Duration::from_secs(secs))
                .ok_or_else(too_long)?;
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration = duration
            .checked_add(Duration::from_millis(dur))
            .ok_or_else(too_long)?;
    }
    Ok(duration)
}

/// Initializes the `env_logger` logger with a custom format including
/// timestamps with elapsed time since initialization.
pub fn init_env_logger() -> Result<()> {
    use jiff::SpanRound;
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64);
        let span = span.round(span_round).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder
        .try_init()
        .context("Could not initialize the logger")?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes "s"
    /// for seconds, "m" for minutes, "h" for hours, and "d" for days. If no
    /// suffix is provided it is assumed to be in milliseconds.
    /// Example: "1d2h3m4s567" is parsed as 1 day + 2 hours + 3 minutes + 4
    /// seconds + 567 milliseconds = 93784567 milliseconds.
    pub log_interval: Option<Duration>,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(subcommand)]
    Bench(bench::SubCommands),
    Info(info::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "hopgraph", version=build_info::version_string())]
/// Tools to ingest undirected edge lists and measure breadth-first visits.
///
/// Noteworthy environment variables:
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

pub mod bench;
pub mod info;

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Bench(args) => {
            bench::main(cli.args, args)?;
        }
        SubCommands::Info(args) => {
            info::main(cli.args, args)?;
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
pub fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let days = elapsed_seconds / (60 * 60 * 24);
    elapsed_seconds %= 60 * 60 * 24;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match days {
        0 => {}
        1 => result.push_str("1 day "),
        _ => result.push_str(&format!("{} days ", days)),
    }
    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}
