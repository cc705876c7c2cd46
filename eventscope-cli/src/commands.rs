use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;

use eventscope_config::EventscopeConfig;
use eventscope_core::prelude::*;
use eventscope_feed::FeedFormat;
use eventscope_telemetry::EventLogger;

use crate::error::CliError;
use crate::render::Renderer;

#[derive(Parser, Debug)]
#[command(version, about = "Query and aggregate timestamped simulation events")]
pub struct Cli {
    /// Configuration file (defaults to config/eventscope.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Event file to load; the built-in mock flight log is used when omitted
    #[arg(long, global = true)]
    pub feed: Option<PathBuf>,

    /// Event file format; guessed from the file extension when omitted
    #[arg(long, global = true)]
    pub format: Option<FeedFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print events in input order
    List,
    /// Print events sorted by timestamp
    Sort(SortArgs),
    /// Print events of one kind or one source
    Filter(Selector),
    /// Print events grouped by kind or source
    Group(GroupArgs),
    /// Print the sum of values of one kind or one source
    Sum(Selector),
    /// Print the mean value of one kind or one source
    Mean(Selector),
    /// Print the first event (in input order) strictly after a timestamp
    FirstAfter(FirstAfterArgs),
    /// Print count/total/min/max/mean per source
    Summary,
}

#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    /// ascending or descending (defaults to query.default_order)
    #[arg(long)]
    pub order: Option<SortOrder>,
    /// Reorder the loaded sequence itself instead of a copy
    #[arg(long)]
    pub in_place: bool,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct Selector {
    /// sensor_reading, control_input or actuator_command
    #[arg(long)]
    pub kind: Option<EventKind>,
    /// Exact, case-sensitive source name
    #[arg(long)]
    pub source: Option<String>,
}

impl Selector {
    fn matches(&self, event: &Event) -> bool {
        match (&self.kind, &self.source) {
            (Some(kind), _) => event.kind() == *kind,
            (None, Some(source)) => event.source() == source,
            (None, None) => false,
        }
    }

    fn label(&self) -> String {
        match (&self.kind, &self.source) {
            (Some(kind), _) => format!("kind {}", kind),
            (None, Some(source)) => format!("source {:?}", source),
            (None, None) => "nothing".to_string(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupKey {
    Kind,
    Source,
}

#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    #[arg(long, value_enum, default_value_t = GroupKey::Source)]
    pub by: GroupKey,
}

#[derive(Args, Debug, Clone)]
pub struct FirstAfterArgs {
    /// Threshold in seconds; an event exactly at the threshold does not qualify
    #[arg(allow_negative_numbers = true)]
    pub threshold: f64,
    /// Sort ascending by time before scanning
    #[arg(long)]
    pub sorted: bool,
}

/// Loads events from `--feed`, then `feed.path` from configuration, then the mock flight log.
pub fn load_events(cli: &Cli, config: &EventscopeConfig) -> Result<Vec<Event>, CliError> {
    let format = match (cli.format, config.feed.format.as_deref()) {
        (Some(format), _) => Some(format),
        (None, Some(name)) => Some(name.parse::<FeedFormat>()?),
        (None, None) => None,
    };

    match cli.feed.as_ref().or(config.feed.path.as_ref()) {
        Some(path) => Ok(eventscope_feed::load_from_path(path, format)?),
        None => {
            debug!("No event file given, using the mock flight log");
            Ok(eventscope_feed::flight_log())
        }
    }
}

/// Runs one command over `events`, writing the rendered result to `out`.
pub fn execute<W: Write>(
    command: Commands,
    mut events: Vec<Event>,
    config: &EventscopeConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let renderer = Renderer::from(&config.render);
    let input = events.len();

    match command {
        Commands::List => {
            renderer.write_listing(out, &events)?;
            EventLogger::log_query("list", input, input);
        }
        Commands::Sort(args) => {
            let order = match args.order {
                Some(order) => order,
                None => config.query.default_order.parse()?,
            };
            if args.in_place {
                sort_by_time_in_place(&mut events, order);
                renderer.write_listing(out, &events)?;
            } else {
                let sorted = sort_by_time(&events, order);
                renderer.write_listing(out, &sorted)?;
            }
            EventLogger::log_query("sort_by_time", input, input);
        }
        Commands::Filter(selector) => {
            let filtered = match (&selector.kind, &selector.source) {
                (Some(kind), _) => filter_by_kind(&events, *kind),
                (None, Some(source)) => filter_by_source(&events, source),
                (None, None) => Vec::new(),
            };
            renderer.write_listing(out, &filtered)?;
            EventLogger::log_query("filter", input, filtered.len());
        }
        Commands::Group(args) => {
            let groups: Vec<(String, Vec<Event>)> = match args.by {
                GroupKey::Kind => group_by_kind(&events)
                    .into_iter()
                    .map(|(kind, members)| (kind.to_string(), members))
                    .collect(),
                GroupKey::Source => group_by_source(&events).into_iter().collect(),
            };
            for (key, members) in &groups {
                writeln!(out, "== {} ({} events)", key, members.len())?;
                renderer.write_listing(out, members)?;
            }
            EventLogger::log_query("group", input, groups.len());
        }
        Commands::Sum(selector) => {
            let sum = sum_value_where(&events, |e| selector.matches(e));
            writeln!(out, "Sum of values for {}: {}", selector.label(), renderer.number(sum))?;
            EventLogger::log_query("sum", input, count_where(&events, |e| selector.matches(e)));
        }
        Commands::Mean(selector) => {
            let summary = summarize_where(&events, |e| selector.matches(e));
            match summary.mean() {
                Some(mean) => writeln!(
                    out,
                    "Mean value for {}: {}",
                    selector.label(),
                    renderer.number(mean)
                )?,
                None => writeln!(out, "No matching events for {}", selector.label())?,
            }
            EventLogger::log_query("mean", input, summary.count);
        }
        Commands::FirstAfter(args) => {
            if args.sorted {
                sort_by_time_in_place(&mut events, SortOrder::Ascending);
            }
            match first_after(&events, args.threshold) {
                Some(event) => writeln!(out, "{}", renderer.event_line(event))?,
                None => writeln!(
                    out,
                    "No event after {}",
                    renderer.number(args.threshold)
                )?,
            }
            let found = usize::from(position_after(&events, args.threshold).is_some());
            EventLogger::log_query("first_after", input, found);
        }
        Commands::Summary => {
            let summaries = summarize_by_source(&events);
            for (source, summary) in &summaries {
                writeln!(out, "{}", renderer.summary_line(source, summary))?;
            }
            writeln!(out, "{}", renderer.summary_line("all", &summarize(&events)))?;
            EventLogger::log_query("summary", input, summaries.len());
        }
    }
    Ok(())
}
