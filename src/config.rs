// src/config.rs
use crate::bundle::SourceList;
use crate::compiler::{CompilationLevel, CompileOptions, LanguageOut};
use crate::constants::{COMPILER_ENDPOINT, DEFAULT_COMPILATION_LEVEL, DEFAULT_LANGUAGE_OUT};
use crate::error::AppError;
use crate::output::ReleaseLayout;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Project root; sources and release files are resolved against it
    #[arg(short = 'C', long, default_value = ".")]
    pub root: String,

    /// Closure Compiler service URL
    #[arg(long, default_value = COMPILER_ENDPOINT)]
    pub endpoint: String,

    /// WHITESPACE_ONLY, SIMPLE_OPTIMIZATIONS or ADVANCED_OPTIMIZATIONS
    #[arg(long, default_value = DEFAULT_COMPILATION_LEVEL)]
    pub compilation_level: String,

    /// Output language edition (e.g. ECMASCRIPT_2017)
    #[arg(long, default_value = DEFAULT_LANGUAGE_OUT)]
    pub language_out: String,

    /// Give up on the compiler service after this many seconds (waits indefinitely if unset)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// External 7-Zip compatible archiver; the built-in zip writer is used if omitted
    #[arg(long)]
    pub archiver: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved release configuration, validated and ready to drive every step.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub root: PathBuf,
    pub sources: SourceList,
    pub layout: ReleaseLayout,
    pub endpoint: Url,
    pub compile_options: CompileOptions,
    pub timeout: Option<Duration>,
    pub archiver: Option<PathBuf>,
}

impl ReleaseConfig {
    /// Resolves a complete release configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let endpoint = parse_endpoint(&cli.endpoint)?;
        let compilation_level: CompilationLevel = cli.compilation_level.parse()?;
        let language_out = LanguageOut::new(cli.language_out)?;

        let timeout = match cli.timeout {
            Some(0) => {
                return Err(AppError::Validation(
                    "Timeout must be at least one second".to_string(),
                ))
            }
            other => other.map(Duration::from_secs),
        };

        Ok(ReleaseConfig {
            root: PathBuf::from(cli.root),
            sources: SourceList::default(),
            layout: ReleaseLayout::default(),
            endpoint,
            compile_options: CompileOptions {
                compilation_level,
                language_out,
            },
            timeout,
            archiver: cli.archiver.map(resolve_archiver).transpose()?,
        })
    }

    /// Default configuration rooted at `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sources: SourceList::default(),
            layout: ReleaseLayout::default(),
            endpoint: default_endpoint(),
            compile_options: CompileOptions::default(),
            timeout: None,
            archiver: None,
        }
    }
}

/// Anchors a relative archiver path such as `tools/7za` to the working
/// directory, since the archiver runs inside the project root. Bare program
/// names are left for `PATH` lookup.
fn resolve_archiver(program: String) -> Result<PathBuf, AppError> {
    let path = PathBuf::from(program);
    if path.is_relative() && path.components().count() > 1 {
        return Ok(std::env::current_dir()?.join(path));
    }
    Ok(path)
}

fn default_endpoint() -> Url {
    Url::parse(COMPILER_ENDPOINT).expect("Built-in compiler endpoint should be valid")
}

/// Parses a compiler endpoint, accepting only http and https.
fn parse_endpoint(input: &str) -> Result<Url, AppError> {
    let url = Url::parse(input)
        .map_err(|e| AppError::Validation(format!("Invalid endpoint '{}': {}", input, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::Validation(format!(
            "Endpoint '{}' uses unsupported scheme '{}'",
            input, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineInput {
        CommandLineInput::parse_from(std::iter::once("jsrelease").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_match_release_constants() {
        let config = ReleaseConfig::resolve(parse(&[])).unwrap();
        assert_eq!(config.endpoint.as_str(), COMPILER_ENDPOINT);
        assert_eq!(
            config.compile_options.compilation_level,
            CompilationLevel::AdvancedOptimizations
        );
        assert_eq!(config.compile_options.language_out.as_str(), "ECMASCRIPT_2017");
        assert_eq!(config.timeout, None);
        assert_eq!(config.archiver, None);
        assert_eq!(config.root, PathBuf::from("."));
    }

    #[test]
    fn test_overrides() {
        let config = ReleaseConfig::resolve(parse(&[
            "-C",
            "/tmp/game",
            "--compilation-level",
            "simple_optimizations",
            "--timeout",
            "30",
            "--archiver",
            "/usr/bin/7z",
        ]))
        .unwrap();
        assert_eq!(config.root, PathBuf::from("/tmp/game"));
        assert_eq!(
            config.compile_options.compilation_level,
            CompilationLevel::SimpleOptimizations
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.archiver, Some(PathBuf::from("/usr/bin/7z")));
    }

    #[test]
    fn test_relative_archiver_path_is_anchored_to_working_directory() {
        let config =
            ReleaseConfig::resolve(parse(&["-C", "game", "--archiver", "tools/7za"])).unwrap();
        let expected = std::env::current_dir().unwrap().join("tools/7za");
        assert_eq!(config.archiver, Some(expected));
        assert!(config.archiver.unwrap().is_absolute());
    }

    #[test]
    fn test_bare_archiver_name_is_left_for_path_lookup() {
        let config = ReleaseConfig::resolve(parse(&["--archiver", "7z"])).unwrap();
        assert_eq!(config.archiver, Some(PathBuf::from("7z")));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(ReleaseConfig::resolve(parse(&["--endpoint", "ftp://example.com"])).is_err());
        assert!(ReleaseConfig::resolve(parse(&["--endpoint", "not a url"])).is_err());
        assert!(ReleaseConfig::resolve(parse(&["--language-out", "ES6"])).is_err());
        assert!(ReleaseConfig::resolve(parse(&["--timeout", "0"])).is_err());
    }

    #[test]
    fn test_default_config_is_resolvable() {
        let config = ReleaseConfig::for_root("/srv/game");
        assert_eq!(config.root, PathBuf::from("/srv/game"));
        assert_eq!(config.layout, ReleaseLayout::default());
    }
}
