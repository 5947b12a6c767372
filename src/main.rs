mod db;
mod error;
mod export;
mod menu;
mod models;
mod seed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use db::Database;
use error::{Error, Result};

const DEFAULT_DB_NAME: &str = "hci_exam_review.db";
const DEFAULT_EXPORT_NAME: &str = "hci_data.json";

#[derive(Parser)]
#[command(name = "hci-review")]
#[command(about = "An interactive command-line study tool for HCI exam review")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and load the full course content
    Populate {
        /// Rebuild the database if the file already exists
        #[arg(long)]
        force: bool,
    },

    /// Export the content to a JSON document for the web application
    Export {
        /// Output file path
        #[arg(long, short, default_value = DEFAULT_EXPORT_NAME)]
        output: PathBuf,
    },

    /// Launch the interactive study menu (the default when no command is given)
    Study,
}

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("HCI_REVIEW_DB") {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_DB_NAME)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match &e {
            Error::StoreUnavailable(path) => {
                eprintln!("Error: {} not found!", path.display());
                eprintln!("Run `hci-review populate` to build it first.");
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let db_path = get_db_path();

    match cli.command.unwrap_or(Commands::Study) {
        Commands::Populate { force } => {
            if db_path.exists() {
                if force {
                    std::fs::remove_file(&db_path)?;
                } else {
                    return Err(Error::Io(std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        format!(
                            "{} already exists (use --force to rebuild)",
                            db_path.display()
                        ),
                    )));
                }
            }

            let db = Database::create(&db_path)?;
            let summary = seed::populate(&db)?;
            println!("Database populated at: {}", db_path.display());
            println!("  Categories: {}", summary.categories);
            println!("  Questions: {}", summary.questions);
            println!("  Terms: {}", db.term_count()?);
            println!("  Answers: {}", db.answer_count()?);
        }

        Commands::Export { output } => {
            let db = Database::open(&db_path)?;
            let document = export::write_json(&db, &output)?;
            println!("Exported {} categories", document.categories.len());
            println!("Exported {} terms", document.terms.len());
            println!("Data saved to {}", output.display());
        }

        Commands::Study => {
            let db = Database::open(&db_path)?;
            menu::run(&db)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    mod cli_parsing_tests {
        use super::*;

        #[test]
        fn parse_no_command_defaults_to_study() {
            let cli = Cli::try_parse_from(["hci-review"]).unwrap();
            assert!(cli.command.is_none());
        }

        #[test]
        fn parse_study_command() {
            let cli = Cli::try_parse_from(["hci-review", "study"]).unwrap();
            assert!(matches!(cli.command, Some(Commands::Study)));
        }

        #[test]
        fn parse_populate_command() {
            let cli = Cli::try_parse_from(["hci-review", "populate"]).unwrap();
            match cli.command {
                Some(Commands::Populate { force }) => assert!(!force),
                _ => panic!("Expected Populate command"),
            }
        }

        #[test]
        fn parse_populate_with_force() {
            let cli = Cli::try_parse_from(["hci-review", "populate", "--force"]).unwrap();
            match cli.command {
                Some(Commands::Populate { force }) => assert!(force),
                _ => panic!("Expected Populate command"),
            }
        }

        #[test]
        fn parse_export_default_output() {
            let cli = Cli::try_parse_from(["hci-review", "export"]).unwrap();
            match cli.command {
                Some(Commands::Export { output }) => {
                    assert_eq!(output, PathBuf::from("hci_data.json"));
                }
                _ => panic!("Expected Export command"),
            }
        }

        #[test]
        fn parse_export_with_output() {
            let cli =
                Cli::try_parse_from(["hci-review", "export", "--output", "/tmp/out.json"]).unwrap();
            match cli.command {
                Some(Commands::Export { output }) => {
                    assert_eq!(output, PathBuf::from("/tmp/out.json"));
                }
                _ => panic!("Expected Export command"),
            }
        }

        #[test]
        fn parse_export_with_short_output() {
            let cli = Cli::try_parse_from(["hci-review", "export", "-o", "data.json"]).unwrap();
            match cli.command {
                Some(Commands::Export { output }) => {
                    assert_eq!(output, PathBuf::from("data.json"));
                }
                _ => panic!("Expected Export command"),
            }
        }

        #[test]
        fn parse_invalid_command_fails() {
            let result = Cli::try_parse_from(["hci-review", "invalid"]);
            assert!(result.is_err());
        }
    }

    mod db_path_tests {
        use super::*;
        use std::env;

        // Single test so the env var mutation cannot race a parallel test.
        #[test]
        fn get_db_path_honors_env_var_and_default() {
            env::remove_var("HCI_REVIEW_DB");
            assert_eq!(get_db_path(), PathBuf::from("hci_exam_review.db"));

            let test_path = "/tmp/test_hci_review.db";
            env::set_var("HCI_REVIEW_DB", test_path);
            assert_eq!(get_db_path().to_str().unwrap(), test_path);
            env::remove_var("HCI_REVIEW_DB");
        }
    }
}
