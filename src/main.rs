use clap::{Parser, Subcommand};
use gloss_core::{
    config::Config, Category, Contribution, Glossary, GlossaryEntry, QueryState, Store, CATEGORIES,
};

#[derive(Parser)]
#[command(name = "gloss", about = "gloss — terminal glossary browser")]
struct Cli {
    /// Write debug logs to /tmp/gloss-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Load the glossary from a JSON file instead of the bundled collection.
    #[arg(long, value_name = "FILE", global = true)]
    data: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Fuzzy-search the glossary and print the matches.
    Search {
        query: String,
        /// Narrow to one category (name or slug, e.g. "ai").
        #[arg(long, short)]
        category: Option<Category>,
        /// Show at most this many results.
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// List every term, alphabetically or by category.
    List {
        #[arg(long, short)]
        category: Option<Category>,
    },
    /// Print one entry in full, looked up by id or term name.
    Show { term: String },
    /// List the categories and how many terms each holds.
    Categories,
    /// Build a pre-filled GitHub issue link suggesting a new term.
    Contribute {
        #[arg(long)]
        term: String,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        definition: String,
        #[arg(long)]
        example: Option<String>,
        /// Related term names; repeat the flag for several.
        #[arg(long = "related")]
        related_terms: Vec<String>,
        /// Open the link in the default browser instead of printing it.
        #[arg(long)]
        open: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/gloss-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("gloss debug log started — tail -f /tmp/gloss-debug.log");
    }

    let Some(command) = cli.command else {
        return gloss_tui::run(cli.data);
    };

    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let store = match cli.data.as_deref().or(config.data.path.as_deref()) {
        Some(path) => Store::from_file(path)?,
        None => Store::builtin(),
    };
    let glossary = Glossary::with_threshold(store, config.search.threshold);

    match command {
        Cmd::Search { query, category, limit } => {
            let state = QueryState { query, category };
            let results = glossary.results(&state);
            if results.is_empty() {
                println!("no matches");
                return Ok(());
            }
            for entry in results.iter().take(limit) {
                print_row(entry);
            }
        }
        Cmd::List { category } => {
            let state = QueryState { query: String::new(), category };
            for entry in glossary.results(&state) {
                print_row(entry);
            }
        }
        Cmd::Show { term } => {
            let needle = term.to_lowercase();
            let found = glossary.entry(&term).or_else(|| {
                glossary
                    .store()
                    .entries()
                    .iter()
                    .find(|e| e.term.to_lowercase() == needle)
            });
            match found {
                Some(entry) => print_entry(entry, &glossary),
                None => anyhow::bail!("no entry named '{term}'"),
            }
        }
        Cmd::Categories => {
            let entries = glossary.store().entries();
            for cat in CATEGORIES {
                let count = entries.iter().filter(|e| e.category == cat).count();
                println!("{:<22} {count}", cat.name());
            }
        }
        Cmd::Contribute {
            term,
            category,
            definition,
            example,
            related_terms,
            open,
        } => {
            let draft = Contribution { term, category, definition, example, related_terms };
            let url = draft.issue_url(&config.contribute.repo)?;
            if open {
                open::that(&url)?;
                println!("opened contribution form in the browser");
            } else {
                println!("{url}");
            }
        }
    }

    Ok(())
}

fn print_row(entry: &GlossaryEntry) {
    println!("{:<20} [{}]  {}", entry.term, entry.category, entry.definition);
}

fn print_entry(entry: &GlossaryEntry, glossary: &Glossary) {
    println!("{}  [{}]", entry.term, entry.category);
    println!("\n{}", entry.definition);
    if let Some(ref metaphor) = entry.metaphor {
        println!("\nThink of it like: {metaphor}");
    }
    if let Some(ref example) = entry.example {
        println!("\nExample: {example}");
    }
    let related = glossary.related(&entry.id);
    if !related.is_empty() {
        let names: Vec<&str> = related.iter().map(|e| e.term.as_str()).collect();
        println!("\nRelated: {}", names.join(", "));
    }
}
