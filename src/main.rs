//! brainy: browse events, ask BrainyBot, and check teams and rankings from
//! the terminal, over row files exported from the backend.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use brainy::chat::{respond, ChatInput, ChatLoop};
use brainy::config::{default_config_path, load_config, BrainyConfig};
use brainy::error::{BrainyError, Result};
use brainy::events::{self, EventCard, EventRow, FilterCriteria, SortOrder};
use brainy::leaderboard::{self, CollegeFilter, Profile};
use brainy::store::load_rows;
use brainy::teams::{self, Team};

#[derive(Parser)]
#[command(name = "brainy")]
#[command(about = "Event discovery from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (defaults to ~/.brainy/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with BrainyBot interactively
    Chat {
        /// Answer immediately instead of pausing to "type"
        #[arg(long)]
        no_delay: bool,
    },

    /// Ask BrainyBot a single question
    Ask {
        /// The question
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Filter events from a row file
    Events {
        /// JSON or YAML file of event rows
        rows: PathBuf,

        /// Search title, college or location
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long, default_value = "All")]
        category: String,

        #[arg(long, default_value = "All Modes")]
        mode: String,

        #[arg(long, default_value = "All Prices")]
        price: String,

        /// "date" or "popularity"
        #[arg(long, default_value = "date")]
        sort: String,
    },

    /// Show a ranked event feed
    Feed {
        rows: PathBuf,

        #[arg(value_enum)]
        kind: FeedKind,

        /// Interest categories for recommendations
        #[arg(long = "interest")]
        interests: Vec<String>,
    },

    /// Search open teams
    Teams {
        rows: PathBuf,

        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show the leaderboard
    Leaderboard {
        /// JSON or YAML file of profile rows
        rows: PathBuf,

        #[arg(long)]
        college: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FeedKind {
    Featured,
    Trending,
    Recommended,
}

fn init_logging(verbose: bool, config: &BrainyConfig) {
    let fallback = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn load_events(path: &Path) -> Result<Vec<events::Event>> {
    let rows: Vec<EventRow> = load_rows(path)?;
    Ok(events::normalize_all(rows))
}

fn print_cards<'a>(list: impl IntoIterator<Item = &'a events::Event>) {
    let mut shown = 0;
    for event in list {
        println!("{}", EventCard::from(event));
        shown += 1;
    }
    println!("Showing {shown} events");
}

fn run_chat(config: &BrainyConfig, no_delay: bool) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    let interrupt = tx.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = interrupt.send(ChatInput::Interrupt);
    }) {
        warn!("could not install Ctrl-C handler: {e}");
    }

    // stdin blocks, so it gets its own thread; an interrupt never waits on it.
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(ChatInput::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    warn!("stdin read failed: {e}");
                    break;
                }
            }
        }
        let _ = tx.send(ChatInput::Eof);
    });

    let delay = if no_delay {
        Duration::ZERO
    } else {
        config.typing_delay()
    };
    let stdout_err = |e: io::Error| BrainyError::io("<stdout>", e);

    let mut chat = ChatLoop::new(delay, io::stdout());
    chat.greet().map_err(stdout_err)?;
    let reason = chat.run(&rx).map_err(stdout_err)?;

    info!(
        ?reason,
        messages = chat.session().messages().len(),
        "chat session ended"
    );
    println!();
    println!("Bye!");
    Ok(())
}

fn run(cli: Cli, config: BrainyConfig) -> Result<()> {
    match cli.command {
        Commands::Chat { no_delay } => run_chat(&config, no_delay)?,

        Commands::Ask { text } => {
            println!("{}", respond(&text.join(" ")));
        }

        Commands::Events {
            rows,
            query,
            category,
            mode,
            price,
            sort,
        } => {
            let criteria = FilterCriteria::from_labels(&query, &category, &mode, &price)?;
            let order: SortOrder = sort.parse()?;
            let mut list = events::upcoming(&load_events(&rows)?);
            events::sort(&mut list, order);
            let matched = events::filter_refs(&list, &criteria);
            if matched.is_empty() {
                println!("No events found. Try adjusting your filters or search query.");
            } else {
                print_cards(matched);
            }
        }

        Commands::Feed {
            rows,
            kind,
            interests,
        } => {
            let all = load_events(&rows)?;
            let list = match kind {
                FeedKind::Featured => events::featured(&all, config.featured_limit),
                FeedKind::Trending => events::trending(&all, config.trending_limit),
                FeedKind::Recommended => {
                    events::recommended(&all, &interests, config.recommended_limit)
                }
            };
            print_cards(&list);
        }

        Commands::Teams { rows, query } => {
            let all: Vec<Team> = load_rows(&rows)?;
            let open = teams::active(&all);
            for team in open.into_iter().filter(|t| t.matches(&query)) {
                let slots = if team.has_open_slot() { "open" } else { "full" };
                println!(
                    "{} [{}] {}/{} {}",
                    team.title,
                    team.skills_needed.join(", "),
                    team.member_count,
                    team.max_members,
                    slots
                );
            }
        }

        Commands::Leaderboard { rows, college } => {
            let profiles: Vec<Profile> = load_rows(&rows)?;
            let filter = CollegeFilter::from_option(college.as_deref());
            for entry in leaderboard::rank(&profiles, &filter, config.leaderboard_limit) {
                let p = entry.profile;
                println!(
                    "{:>4} {} {} | {} pts | {} attended | {} won",
                    entry.badge.to_string(),
                    leaderboard::initial(p.display_name.as_deref()),
                    p.display_name.as_deref().unwrap_or("Anonymous"),
                    p.participation_points,
                    p.events_attended,
                    p.events_won
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to load config: {e}");
            process::exit(1);
        }
    };
    init_logging(cli.verbose, &config);

    if let Err(e) = run(cli, config) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
