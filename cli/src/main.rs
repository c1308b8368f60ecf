//! dovetail CLI - demonstrations of step-bounded evaluation and dovetailing.
//!
//! # Commands
//!
//! ```text
//! dovetail graph [FUNCTION...]              graphs over the configured window
//! dovetail halts --steps T [FUNCTION...]    Kleene's T3 on every window input
//! dovetail eval FUNCTION INPUT [--steps T]  one evaluation
//! dovetail search FUNCTION <reach V | collide | collide-recorded>
//! dovetail pairs [--count N]                pairing encoding round trips
//! ```
//!
//! Defaults come from `~/.dovetail/config.toml` (see `dovetail-config`);
//! flags override them. A config file that exists but does not parse stops
//! the run. Diagnostics go to stderr through `tracing`
//! (`RUST_LOG`), results to stdout.

mod catalog;
mod render;

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dovetail_config::Settings;
use dovetail_core::{PartialFunction, Steps, UndefinedPolicy, Window, t3};
use dovetail_engine::{
    Schedule, Search, SearchEvent, SearchLimit, SearchObserver, TracingObserver, semidecide,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[derive(Parser)]
#[command(name = "dovetail")]
#[command(about = "Step-bounded partial functions, Kleene's T predicates and dovetailing")]
struct Cli {
    /// First input of the window used by `graph` and `halts`
    #[arg(long, global = true)]
    start: Option<u64>,
    /// Number of inputs in the window
    #[arg(long, global = true)]
    offset: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print function graphs over the window
    Graph {
        /// Functions to print (all built-ins when omitted)
        functions: Vec<String>,
    },
    /// Print whether each window input halts within a budget
    Halts {
        #[arg(long)]
        steps: u64,
        functions: Vec<String>,
    },
    /// Evaluate one function on one input
    Eval {
        function: String,
        input: u64,
        /// Step budget; unbounded when omitted
        #[arg(long)]
        steps: Option<u64>,
        /// What an unbounded call on a diverging input does
        #[arg(long, value_enum)]
        on_undefined: Option<PolicyArg>,
    },
    /// Run a dovetailing semi-decider
    Search {
        function: String,
        #[command(subcommand)]
        property: Property,
        /// Give up after this many rounds
        #[arg(long, global = true)]
        rounds: Option<u64>,
        /// Search forever, ignoring any configured round limit
        #[arg(long, global = true, conflicts_with = "rounds")]
        unbounded: bool,
        #[arg(long, global = true, value_enum)]
        schedule: Option<ScheduleArg>,
        /// Narrate every probe on stdout
        #[arg(long, global = true, value_enum)]
        events: Option<EventFormat>,
    },
    /// Print the pairing encoding of the first codes
    Pairs {
        #[arg(long, default_value_t = 10)]
        count: u64,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum Property {
    /// Some input produces VALUE
    Reach { value: u64 },
    /// Two distinct inputs produce the same output (paired search)
    Collide,
    /// Two distinct inputs produce the same output (single search, outputs recorded)
    CollideRecorded,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Abort,
    Continue,
}

impl From<PolicyArg> for UndefinedPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Abort => UndefinedPolicy::Abort,
            PolicyArg::Continue => UndefinedPolicy::Continue,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScheduleArg {
    Diagonal,
    Pairing,
}

impl From<ScheduleArg> for Schedule {
    fn from(value: ScheduleArg) -> Self {
        match value {
            ScheduleArg::Diagonal => Schedule::Diagonal,
            ScheduleArg::Pairing => Schedule::Pairing,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EventFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::load().context("loading dovetail config")?;
    let window = Window::new(
        cli.start.unwrap_or(settings.window.start()),
        cli.offset.unwrap_or(settings.window.offset()),
    )?;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Graph { functions } => {
            for function in resolve_all(&functions)? {
                writeln!(stdout, "Graph of function {function}:")?;
                write!(stdout, "{}", render::graph(&function, window))?;
            }
        }
        Commands::Halts { steps, functions } => {
            let budget = Steps::new(steps)?;
            for function in resolve_all(&functions)? {
                for input in window.inputs() {
                    writeln!(
                        stdout,
                        "{function}({input}) halts in {budget} steps: {}",
                        t3(&function, input, budget)
                    )?;
                }
            }
        }
        Commands::Eval {
            function,
            input,
            steps,
            on_undefined,
        } => {
            let function = catalog::resolve(&function)?;
            let policy = on_undefined.map_or(settings.on_undefined, UndefinedPolicy::from);
            let value = function
                .evaluate(input, steps, policy)
                .with_context(|| format!("evaluating {function}({input})"))?;
            match value {
                Some(value) => writeln!(stdout, "{function}({input}) = {value}")?,
                None => writeln!(stdout, "{function}({input}) = undefined")?,
            }
        }
        Commands::Search {
            function,
            property,
            rounds,
            unbounded,
            schedule,
            events,
        } => {
            let function = catalog::resolve(&function)?;
            let limit = match (rounds, unbounded) {
                (_, true) => SearchLimit::Unbounded,
                (Some(0), false) => bail!("--rounds must be at least 1"),
                (Some(rounds), false) => SearchLimit::Rounds(rounds),
                (None, false) => settings.limit,
            };
            let schedule = schedule.map_or(settings.schedule, Schedule::from);
            let found = run_search(&function, property, limit, schedule, events, &mut stdout)?;
            match found {
                Some(line) => writeln!(stdout, "{line}")?,
                None => writeln!(stdout, "No witness within {limit:?}.")?,
            }
        }
        Commands::Pairs { count } => {
            write!(stdout, "{}", render::pairing_table(count))?;
        }
    }

    Ok(())
}

fn resolve_all(names: &[String]) -> Result<Vec<PartialFunction>> {
    if names.is_empty() {
        return catalog::BUILTINS.iter().map(|name| catalog::resolve(name)).collect();
    }
    names.iter().map(|name| catalog::resolve(name)).collect()
}

fn run_search(
    function: &PartialFunction,
    property: Property,
    limit: SearchLimit,
    schedule: Schedule,
    events: Option<EventFormat>,
    out: &mut impl Write,
) -> Result<Option<String>> {
    let mut write_error = None;
    let mut tracer = TracingObserver::new(function.name());
    let mut narrate = |event: &SearchEvent| {
        tracer.on_event(event);
        let line = match events {
            None => return,
            Some(EventFormat::Text) => render::event(function, event),
            Some(EventFormat::Json) => match serde_json::to_string(event) {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!("Failed to serialize search event: {err}");
                    return;
                }
            },
        };
        if write_error.is_none()
            && let Err(err) = writeln!(out, "{line}")
        {
            write_error = Some(err);
        }
    };

    let search = Search::new(function)
        .schedule(schedule)
        .limit(limit)
        .observer(&mut narrate);

    let found = match property {
        Property::Reach { value } => semidecide::reaches_value(search, value).map(|w| {
            format!(
                "{function}({}) = {} in {} steps (found with budget {}).",
                w.input, w.output, w.steps, w.budget
            )
        }),
        Property::Collide => semidecide::collides(search).map(|w| {
            format!(
                "{function}({}) = {function}({}) = {} (found with budget {}).",
                w.left, w.right, w.left_output, w.budget
            )
        }),
        Property::CollideRecorded => semidecide::collides_recorded(search).map(|c| {
            format!(
                "{function}({}) = {function}({}) = {} (found with budget {}).",
                c.earlier, c.later, c.value, c.budget
            )
        }),
    };

    if let Some(err) = write_error {
        return Err(err).context("writing search events");
    }
    Ok(found)
}
