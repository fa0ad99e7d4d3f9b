//! Mauka Trie - Command line entrypoint.
//!
//! Loads configuration, initializes logging, then answers a single query
//! against a vocabulary file or manages the configuration file.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use mauka_trie_lib::config::{global_config, ConfigLoader, LogConfig, MaukaTrieConfig, ENV_PREFIX};
use mauka_trie_lib::data_structures::niihau_trie::{parse_pattern, CaseRule, NiihauTrie};
use mauka_trie_lib::error::{report_error, ErrorContext, MaukaError, MaukaResult};
use mauka_trie_lib::loader::load_trie;
use serde::Serialize;
use tracing::{debug, info};

/// Command line arguments for Mauka Trie.
#[derive(Parser, Debug)]
#[clap(name = "mauka_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load a vocabulary file and run one query against it
    Query {
        /// Word-per-line vocabulary file
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Maximum number of words to print
        #[clap(short, long)]
        limit: Option<usize>,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[clap(subcommand)]
        query: Query,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Queries against the loaded vocabulary.
#[derive(Subcommand, Debug)]
enum Query {
    /// Whether the word is stored
    Contains { word: String },
    /// Words starting with the prefix
    StartsWith { prefix: String },
    /// Words of the pattern's length matching it (wildcard from `loader.wildcard`)
    Matches { pattern: String },
    /// Words whose beginning matches the pattern
    StartsWithPattern { pattern: String },
    /// Longest stored word that prefixes the input
    LongestPrefix { input: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// Result of a query, printed as text lines or as JSON.
#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Answer<'a> {
    Found(bool),
    Words(Vec<&'a str>),
}

/// Initialize the logging system on stderr, leaving stdout to query results.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> MaukaResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| MaukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn run_query<'a>(
    trie: &'a NiihauTrie<CaseRule>,
    query: &'a Query,
    wildcard: char,
    limit: usize,
) -> MaukaResult<Answer<'a>> {
    let answer = match query {
        Query::Contains { word } => Answer::Found(trie.contains(word)?),
        Query::StartsWith { prefix } => {
            Answer::Words(trie.starts_with(prefix)?.take(limit).collect())
        }
        Query::Matches { pattern } => {
            let pattern = parse_pattern(pattern, wildcard);
            Answer::Words(trie.matches(&pattern)?.take(limit).collect())
        }
        Query::StartsWithPattern { pattern } => {
            let pattern = parse_pattern(pattern, wildcard);
            Answer::Words(trie.starts_with_pattern(&pattern)?.take(limit).collect())
        }
        Query::LongestPrefix { input } => {
            Answer::Words(trie.longest_prefix_match(input)?.into_iter().collect())
        }
    };
    Ok(answer)
}

fn print_answer(answer: &Answer<'_>, format: OutputFormat) -> MaukaResult<()> {
    match (format, answer) {
        (OutputFormat::Json, _) => println!("{}", serde_json::to_string(answer)?),
        (OutputFormat::Text, Answer::Found(found)) => println!("{found}"),
        (OutputFormat::Text, Answer::Words(words)) => {
            for word in words {
                println!("{word}");
            }
        }
    }
    Ok(())
}

fn write_default_config(output: &Path) -> MaukaResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string_pretty(&MaukaTrieConfig::default())?;
    std::fs::write(output, toml)?;
    Ok(())
}

fn run(args: Args) -> MaukaResult<()> {
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = loader.load()?;

    init_logging(&config.log)?;
    mauka_trie_lib::init(config)?;
    let config = global_config();
    debug!(?config, "configuration loaded");

    match args.command {
        Command::Query {
            words,
            limit,
            format,
            query,
        } => {
            let trie = load_trie(&words, &config.trie, &config.loader)?;
            let limit = limit.unwrap_or(usize::MAX);
            let answer = run_query(&trie, &query, config.loader.wildcard, limit)?;
            print_answer(&answer, format)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            write_default_config(&output)?;
            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        report_error(&ErrorContext::new(error, "mauka_trie"));
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> NiihauTrie<CaseRule> {
        let mut trie = NiihauTrie::with_config(Default::default());
        trie.add_range(["scout", "scant", "scanner", "scoot", "shout"])
            .unwrap();
        trie
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "mauka_trie",
            "query",
            "--words",
            "words.txt",
            "--limit",
            "3",
            "matches",
            "?c??t",
        ]);
        match args.command {
            Command::Query {
                limit,
                format,
                query: Query::Matches { pattern },
                ..
            } => {
                assert_eq!(limit, Some(3));
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(pattern, "?c??t");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_query_pattern() {
        let trie = trie();
        let query = Query::Matches {
            pattern: "?c??t".to_string(),
        };
        let Answer::Words(mut words) = run_query(&trie, &query, '?', usize::MAX).unwrap() else {
            panic!("expected words");
        };
        words.sort_unstable();
        assert_eq!(words, vec!["scant", "scoot", "scout"]);
    }

    #[test]
    fn test_run_query_limit_and_longest_prefix() {
        let trie = trie();
        let query = Query::StartsWith {
            prefix: "sc".to_string(),
        };
        assert!(matches!(
            run_query(&trie, &query, '?', 2).unwrap(),
            Answer::Words(words) if words.len() == 2
        ));

        let query = Query::LongestPrefix {
            input: "scannerless".to_string(),
        };
        assert!(matches!(
            run_query(&trie, &query, '?', 2).unwrap(),
            Answer::Words(words) if words == vec!["scanner"]
        ));
    }

    #[test]
    fn test_empty_query_argument_fails() {
        let trie = trie();
        let query = Query::StartsWith {
            prefix: String::new(),
        };
        assert!(matches!(
            run_query(&trie, &query, '?', 1),
            Err(MaukaError::Trie(_))
        ));
    }

    #[test]
    fn test_json_answer() {
        let answer = Answer::Words(vec!["scout"]);
        assert_eq!(serde_json::to_string(&answer).unwrap(), r#"["scout"]"#);
        assert_eq!(serde_json::to_string(&Answer::Found(true)).unwrap(), "true");
    }

    #[test]
    fn test_write_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("mauka_trie.toml");
        write_default_config(&output).unwrap();

        let loaded = ConfigLoader::new(Some(&output), "MAUKA_TRIE_GEN_TEST")
            .load()
            .unwrap();
        assert_eq!(loaded, MaukaTrieConfig::default());
    }
}
