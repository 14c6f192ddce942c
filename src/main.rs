use std::fs;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use autochangelog::config;
use autochangelog::generate::{generate_changelog, GenerateOptions};
use autochangelog::git::SystemGit;
use autochangelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "autochangelog",
    about = "Generate a changelog from git tags and conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Output file name")]
    output: Option<String>,

    #[arg(long, help = "Do not show release dates")]
    no_date: bool,

    #[arg(short, long, help = "Group commits by conventional commit type")]
    group: bool,

    #[arg(short, long, help = "Only keep commits whose type matches this pattern")]
    filter: Option<String>,

    #[arg(long, value_name = "N", help = "Keep at most N commits per version")]
    commit_limit: Option<usize>,

    #[arg(long, value_name = "N", help = "Keep at most N versions")]
    version_limit: Option<usize>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("autochangelog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags override file configuration
    let options = GenerateOptions {
        show_date: !args.no_date,
        use_group: args.group,
        filter: args.filter,
        commit_limit: args.commit_limit.or(config.limits.commits),
        version_limit: args.version_limit.or(config.limits.versions),
        attribution: config.output.attribution,
        uncategorized: config.groups.uncategorized,
    };
    let output_file = args.output.unwrap_or(config.output.file);

    let repo_root = std::env::current_dir()?;
    let git = SystemGit::new(&repo_root);

    let start = Instant::now();

    let document = match generate_changelog(&git, &repo_root, &options) {
        Ok(document) => document,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // the document is written in one piece; a failed run leaves no file
    if let Err(e) = fs::write(repo_root.join(&output_file), document) {
        ui::display_error(&format!("Failed to write {}: {}", output_file, e));
        std::process::exit(1);
    }

    ui::display_success(&format!(
        "{} was generated in {:.3}s.",
        output_file,
        start.elapsed().as_secs_f64()
    ));

    Ok(())
}
