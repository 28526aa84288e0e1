use anyhow::Result;
use clap::Parser;

use semrel::analyzer::{next_version, tags_and_versions, NextVersionOptions};
use semrel::boundary::BoundaryWarning;
use semrel::config;
use semrel::git::{Git2Repository, Repository};
use semrel::ui;

#[derive(clap::Parser)]
#[command(
    name = "semrel",
    about = "Compute the next semantic version from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Resolve a prerelease instead of a full release")]
    prerelease: bool,

    #[arg(long, help = "Prerelease channel token (e.g. rc, alpha, beta)")]
    prerelease_token: Option<String>,

    #[arg(long, help = "Build metadata to attach to the next version")]
    build_metadata: Option<String>,

    #[arg(long, help = "Print the tag name instead of the bare version")]
    print_tag: bool,

    #[arg(long, help = "Create a lightweight tag for the next version")]
    create_tag: bool,

    #[arg(long, help = "Push the created tag to this remote")]
    push: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.version {
        println!("semrel {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let translator = config.version.translator()?;
    let parser = config.parser.build();

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let current = tags_and_versions(&repo.list_tags()?, &translator)
        .into_iter()
        .next()
        .map(|(_, version)| version);

    let options = NextVersionOptions {
        prerelease: args.prerelease,
        prerelease_token: args.prerelease_token.clone(),
        major_on_zero: config.version.major_on_zero,
        allow_zero_version: config.version.allow_zero_version,
        build_metadata: args.build_metadata.clone(),
    };

    let next = next_version(&repo, &translator, parser.as_ref(), &options)?;

    if Some(&next) == current.as_ref() {
        let warning = BoundaryWarning::NoNewCommits {
            latest_version: next.to_string(),
            current_commit_hash: repo.head_oid()?.to_string(),
        };
        ui::display_boundary_warning(&warning);
        return Ok(());
    }

    ui::display_version_change(
        current.as_ref().map(|v| v.to_string()).as_deref(),
        &next.to_string(),
    );

    if args.print_tag {
        println!("{}", next.as_tag());
    } else {
        println!("{}", next);
    }

    if args.create_tag {
        let tag_name = next.as_tag();
        ui::display_status(&format!("Creating tag: {}", tag_name));
        repo.create_tag(&tag_name, repo.head_oid()?)?;
        ui::display_success(&format!("Created tag: {}", tag_name));

        if let Some(remote) = &args.push {
            ui::display_status(&format!("Pushing tag: {} to {}", tag_name, remote));
            repo.push_tags(remote, &[&tag_name])?;
            ui::display_success(&format!("Pushed tag: {} to {}", tag_name, remote));
        }
    }

    Ok(())
}
