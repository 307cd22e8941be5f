use anyhow::Result;
use crossterm::style::Stylize;
use std::time::Duration;

use userdir_cli::api_client::DirectoryClient;
use userdir_cli::config::config::Config;
use userdir_cli::logging;
use userdir_cli::query_view::{project, QueryEvent, QueryState};
use userdir_cli::table_display;
use userdir_cli::tui_app;

fn print_help() {
    println!("{}", "userdir-cli - User directory browser".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  userdir-cli [OPTIONS]");
    println!();
    println!("{}", "Options:".yellow());
    println!(
        "  {}        - Print one page of the directory and exit",
        "--classic".green()
    );
    println!(
        "  {}  - Filter by name or email (classic mode)",
        "--search TERM".green()
    );
    println!(
        "  {}      - Page to print, 1-based (classic mode)",
        "--page N".green()
    );
    println!(
        "  {}     - Print a single user's details and exit",
        "--user ID".green()
    );
    println!(
        "  {} - Write a config file with defaults",
        "--generate-config".green()
    );
    println!("  {}     - Show this help", "--help, -h".green());
    println!();
    println!("{}", "Environment:".yellow());
    println!(
        "  {}  - Override the directory endpoint",
        "USER_API_URL".green()
    );
    println!();
    println!("Without options the interactive TUI starts.");
}

struct CliArgs {
    classic: bool,
    search: String,
    page: usize,
    user_id: Option<u64>,
    generate_config: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs {
        classic: false,
        search: String::new(),
        page: 1,
        user_id: None,
        generate_config: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--classic" => parsed.classic = true,
            "--generate-config" => parsed.generate_config = true,
            "--search" => {
                i += 1;
                let term = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--search requires a term"))?;
                parsed.search = term.clone();
            }
            "--page" => {
                i += 1;
                let n = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--page requires a number"))?;
                parsed.page = n
                    .parse()
                    .map_err(|_| anyhow::anyhow!("--page requires a positive integer"))?;
            }
            "--user" => {
                i += 1;
                let id = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--user requires an id"))?;
                parsed.user_id = Some(
                    id.parse()
                        .map_err(|_| anyhow::anyhow!("--user requires a numeric id"))?,
                );
            }
            other => {
                return Err(anyhow::anyhow!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let args = parse_args(&args)?;

    if args.generate_config {
        let config = Config::default();
        config.save()?;
        println!(
            "Config written to {}",
            Config::get_config_path()?.display()
        );
        return Ok(());
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not load config ({}), using defaults", e);
        Config::default()
    });

    let base_url =
        std::env::var("USER_API_URL").unwrap_or_else(|_| config.api.base_url.clone());
    let client =
        DirectoryClient::with_timeout(&base_url, Duration::from_secs(config.api.timeout_secs))?;

    if let Some(id) = args.user_id {
        let user = client.fetch_user(id)?;
        table_display::display_user(&user);
        return Ok(());
    }

    if args.classic {
        let users = client.fetch_users()?;

        let mut query = QueryState::default();
        if !args.search.is_empty() {
            query.apply(QueryEvent::SearchSubmitted(args.search.clone()));
        }
        query.apply(QueryEvent::PageSelected(args.page));

        let result = project(&users, &query.term, query.page);
        table_display::display_page(
            &result,
            &query.term,
            query.page,
            config.display.show_row_numbers,
        );
        return Ok(());
    }

    // File-backed logging so tracing output never fights the TUI for
    // the terminal.
    if let Err(e) = logging::init_tracing() {
        eprintln!("Warning: logging disabled ({})", e);
    }

    tui_app::run_directory_tui(client)
}
