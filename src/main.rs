use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use version_manager::changelog::{self, ChangelogContext, ChangelogFormat};
use version_manager::config;
use version_manager::generator;
use version_manager::git::CommandGit;
use version_manager::parser::ParseMode;
use version_manager::release::ReleaseInfo;
use version_manager::ui;

#[derive(Parser)]
#[command(
    name = "version-manager",
    about = "Release automation from git version tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        help = "Scan only the first commit block of a range (legacy behavior)"
    )]
    first_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a version file from a template and the current tag
    Generate {
        /// Path to the template file
        template: PathBuf,
        /// Path of the file to generate
        output: PathBuf,
    },

    /// Print the latest tag reachable from HEAD
    Tag,

    /// Print the hash of the current commit
    Hash,

    /// Parse a tag string and print its structured fields
    Version {
        /// Tag to parse; defaults to the current tag
        tag: Option<String>,
    },

    /// Print the commits between two revisions
    Diff {
        /// The newer revision of the window
        from: String,
        /// The older revision of the window
        to: String,
    },

    /// Render a changelog for a revision window
    Changelog {
        /// Path to the changelog template file
        template: PathBuf,

        /// Newer revision; defaults to the current tag
        #[arg(long)]
        from: Option<String>,

        /// Older revision; defaults to the previous tag
        #[arg(long)]
        to: Option<String>,

        /// Write the rendered changelog here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render HTML list items instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Push local tags to a remote
    Push {
        /// Remote to push tags to
        #[arg(long, default_value = "origin")]
        remote: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let mode = if args.first_only || config.git.first_commit_only {
        ParseMode::FirstOnly
    } else {
        ParseMode::AllBlocks
    };

    let git = CommandGit::new(Duration::from_secs(config.git.timeout_secs));
    let info = ReleaseInfo::with_mode(git, mode);

    match args.command {
        Command::Generate { template, output } => {
            let tag = info.current_tag()?;
            let version = info.tag_version(&tag)?;
            generator::generate_version_file(&version, &template, &output)?;
            ui::display_success(&format!(
                "Generated {} from tag {}",
                output.display(),
                tag
            ));
        }

        Command::Tag => {
            ui::display_tag(&info.current_tag()?);
        }

        Command::Hash => {
            ui::display_hash(&info.current_hash()?);
        }

        Command::Version { tag } => {
            let tag = match tag {
                Some(tag) => tag,
                None => info.current_tag()?,
            };
            let version = info.tag_version(&tag)?;
            ui::display_version(&tag, &version);
        }

        Command::Diff { from, to } => {
            let commits = info.release_window(&from, &to)?;
            ui::display_diff_report(&from, &to, &commits);
        }

        Command::Changelog {
            template,
            from,
            to,
            output,
            html,
        } => {
            let newer = match from {
                Some(newer) => newer,
                None => info.current_tag()?,
            };
            let older = match to {
                Some(older) => older,
                None => info.previous_tag()?,
            };

            let commits = info.release_window(&newer, &older)?;
            let context = ChangelogContext {
                title: config.changelog.subject.clone(),
                version: newer.clone(),
            };
            let format = if html {
                ChangelogFormat::Html
            } else {
                ChangelogFormat::Text
            };

            let template_text = fs::read_to_string(&template)?;
            let mut body = changelog::render_changelog(&template_text, &commits, &context, format)?;

            // The original tool mailed this; without transport, keep the
            // addressing as a header block when it is configured.
            if !config.changelog.to.is_empty() || !config.changelog.from.is_empty() {
                body = format!(
                    "To: {}\nFrom: {}\nSubject: {}\n\n{}",
                    config.changelog.to, config.changelog.from, config.changelog.subject, body
                );
            }

            match output {
                Some(path) => {
                    fs::write(&path, body)?;
                    ui::display_success(&format!(
                        "Rendered changelog for {}...{} to {}",
                        newer,
                        older,
                        path.display()
                    ));
                }
                None => print!("{}", body),
            }
        }

        Command::Push { remote } => {
            ui::display_status(&format!("Pushing tags to {}...", remote));
            info.push_tags(&remote)?;
            ui::display_success(&format!("Pushed tags to {}", remote));
        }
    }

    Ok(())
}
