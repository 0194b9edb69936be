//! Command-line interface implementation for quickstart.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for quickstart.
#[derive(Parser, Debug)]
#[command(author, version, about = "quickstart: plugin project generator", long_about = None)]
pub struct Args {
    /// Path to the template directory
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Directory where the generated project will be created.
    /// Defaults to a directory named after the identifier, under the
    /// current working directory.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Human-readable project name, e.g. "My Awesome Plugin"
    #[arg(short, long)]
    pub name: String,

    /// Machine identifier. When omitted it is derived from the name
    /// (template prefix plus kebab-case slug).
    #[arg(short, long)]
    pub id: Option<String>,

    /// Short project description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Author attribution
    #[arg(short, long, default_value = "")]
    pub author: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
