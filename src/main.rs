//! Voice Cart command-line entry point

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use voice_cart::{commands, open_assistant, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "voice-cart")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parsed command as JSON without changing the list
    Parse {
        #[arg(required = true)]
        transcript: Vec<String>,
    },
    /// Print the most recent log lines
    Logs {
        #[arg(default_value = "20")]
        lines: usize,
    },
    #[command(flatten)]
    Cart(CartCommand),
}

/// Commands that work on the stored list
#[derive(Subcommand, Debug)]
enum CartCommand {
    /// Apply one spoken command, e.g. `say add 2 kg of rice`
    Say {
        #[arg(required = true)]
        transcript: Vec<String>,
    },
    /// Read commands line by line from stdin
    Listen,
    /// Print the list grouped by category
    List {
        /// Only show items whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show suggestions, or add the n-th one
    Suggest {
        index: Option<usize>,
    },
    /// Flip the completed flag of an item
    Toggle {
        id: u32,
    },
    /// Delete an item by id
    Delete {
        id: u32,
    },
    /// Remove every item
    Clear,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = run(args).await {
        let _ = rolling_logger::error(&e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let output = match args.command {
        // Parsing needs neither config nor storage
        Command::Parse { transcript } => commands::parse_only(&transcript.join(" "))?,
        Command::Logs { lines } => {
            load_config(args.config.as_deref())?;
            commands::recent_log(lines)?
        }
        Command::Cart(command) => {
            let config = load_config(args.config.as_deref())?;
            run_cart(command, &config).await?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Load configuration and start file logging if enabled
fn load_config(path: Option<&Path>) -> Result<AppConfig, String> {
    let config = AppConfig::load(path).map_err(|e| e.to_string())?;
    if config.log_to_file {
        if let Err(e) = rolling_logger::init_logger(config.log_dir(), &config.app_name) {
            eprintln!("warning: file logging disabled: {}", e);
        }
    }
    Ok(config)
}

async fn run_cart(command: CartCommand, config: &AppConfig) -> Result<String, String> {
    let mut assistant = open_assistant(config).await.map_err(|e| e.to_string())?;

    let output = match command {
        CartCommand::Say { transcript } => commands::say(&mut assistant, &transcript.join(" ")).await?,
        CartCommand::Listen => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            let handled = commands::listen(&mut assistant, stdin, &mut stdout).await?;
            let _ = rolling_logger::info(&format!("listen finished after {} commands", handled));
            commands::render_list(&assistant).await?
        }
        CartCommand::List { search } => {
            if let Some(query) = search {
                assistant.set_search_query(query);
            }
            commands::render_list(&assistant).await?
        }
        CartCommand::Suggest { index: Some(index) } => commands::add_suggestion(&assistant, index).await?,
        CartCommand::Suggest { index: None } => commands::render_suggestions(&assistant),
        CartCommand::Toggle { id } => commands::toggle_item(&assistant, id).await?,
        CartCommand::Delete { id } => commands::delete_item(&assistant, id).await?,
        CartCommand::Clear => commands::clear_items(&assistant).await?,
    };

    Ok(output)
}
