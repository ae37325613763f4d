use anyhow::Context;
use getopts::{Matches, Options};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::{env, fs};

pub const DEFAULT_BASE_URL: &str = "https://reqres.in";
pub const DEFAULT_REPORT_FILE: &str = "extentReport.html";
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Run configuration. Built from the defaults, then an optional yaml file,
/// then the command line, each layer overriding the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub report_file: PathBuf,
    pub cases: Vec<String>, // case ids to run; empty means the whole catalog
    pub verbose: bool,
}

// Every key of the yaml file is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct FileConfig {
    base_url: Option<String>,
    report_file: Option<PathBuf>,
    cases: Option<Vec<String>>,
    verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            cases: Vec::new(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn build_config() -> anyhow::Result<Self> {
        let args: Vec<String> = env::args().collect();
        let opts = options();

        let (program, rest) = split_program(&args);

        let matches = opts.parse(rest)?;
        if matches.opt_present("h") {
            print_usage(program, opts);
            exit(0);
        }

        Self::from_matches(&matches, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Builds a config from command line arguments, excluding the program name.
    pub fn from_args(args: &[String]) -> anyhow::Result<Self> {
        let matches = options().parse(args)?;
        Self::from_matches(&matches, Path::new(DEFAULT_CONFIG_FILE))
    }

    // `default_config` is read only when present and no -f was given.
    fn from_matches(matches: &Matches, default_config: &Path) -> anyhow::Result<Self> {
        let mut config = Config::default();

        // An explicitly named config file must exist, the default one is optional.
        let file_config = match matches.opt_str("f") {
            Some(path) => Some(read_config_file(Path::new(&path))?),
            None if default_config.is_file() => Some(read_config_file(default_config)?),
            None => None,
        };

        if let Some(file_config) = file_config {
            if let Some(base_url) = file_config.base_url {
                config.base_url = base_url;
            }
            if let Some(report_file) = file_config.report_file {
                config.report_file = report_file;
            }
            if let Some(cases) = file_config.cases {
                config.cases = cases;
            }
            config.verbose = file_config.verbose.unwrap_or(false);
        }

        // Override with command line arguments if provided
        if let Some(base_url) = matches.opt_str("b") {
            config.base_url = base_url;
        }
        if let Some(report_file) = matches.opt_str("r") {
            config.report_file = PathBuf::from(report_file);
        }
        let cases = matches.opt_strs("c");
        if !cases.is_empty() {
            config.cases = cases;
        }
        if matches.opt_present("v") {
            config.verbose = true;
        }

        config.base_url = config.base_url.trim_end_matches('/').to_string();
        if config.base_url.is_empty() {
            anyhow::bail!("base_url must not be empty");
        }

        Ok(config)
    }
}

// argv may be empty when the process is spawned without a program name.
fn split_program(args: &[String]) -> (&str, &[String]) {
    match args.split_first() {
        Some((program, rest)) => (program.as_str(), rest),
        None => (env!("CARGO_PKG_NAME"), args),
    }
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("b", "base_url", "Set the base URL", "BASE_URL");
    opts.optopt("r", "report_file", "Set the HTML report file", "REPORT_FILE");
    opts.optmulti("c", "case", "Run only the named test case (repeatable)", "CASE_ID");
    opts.optopt("f", "config_file", "Read settings from a yaml file", "CONFIG_FILE");
    opts.optflag("h", "help", "Print this help menu");
    opts.optflag("v", "verbose", "Print verbose information");
    opts
}

fn read_config_file(path: &Path) -> anyhow::Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn print_usage(program: &str, opts: Options) {
    let version = env!("CARGO_PKG_VERSION");
    let program_name = program.split('/').last().unwrap_or(program);
    let description = "Acceptance checks for the reqres user-management API";
    let brief = format!(
        "{}  {} version {}\nUsage: {} [options]",
        program_name, description, version, program_name
    );

    print!("{}", opts.usage(&brief));
}
