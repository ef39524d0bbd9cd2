mod logger;

use clap::{ArgAction, Args, Parser, Subcommand};
use regexkit::{Options, Regex, grep};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use logger::Logger;

#[derive(Parser)]
#[command(
    name = "regexkit",
    version,
    about = "Search and replace text with regular expressions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the lines that match a pattern
    Grep {
        pattern: String,

        /// File to search (standard input when omitted)
        file: Option<PathBuf>,

        /// Print only the matched part of each line
        #[arg(short = 'o', long)]
        only_matching: bool,

        /// Print the capture groups of each match, separated by tabs
        #[arg(short = 'c', long)]
        captures: bool,

        #[command(flatten)]
        flags: Flags,
    },
    /// Replace matches of a pattern using a `$n` template
    Replace {
        pattern: String,

        template: String,

        /// File to rewrite (standard input when omitted)
        file: Option<PathBuf>,

        /// Only replace the first match
        #[arg(long)]
        first: bool,

        #[command(flatten)]
        flags: Flags,
    },
}

#[derive(Args)]
struct Flags {
    /// Ignore case
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Treat the pattern as literal text
    #[arg(short = 'F', long)]
    fixed_strings: bool,

    /// Make ^ and $ match at line boundaries
    #[arg(short = 'm', long)]
    multiline: bool,

    /// Let . match line separators
    #[arg(short = 's', long)]
    dot_all: bool,

    /// Allow whitespace and # comments in the pattern
    #[arg(short = 'x', long)]
    extended: bool,
}

impl Flags {
    fn options(&self) -> Options {
        let mut options = Options::empty();
        options.set(Options::IGNORE_CASE, self.ignore_case);
        options.set(Options::IGNORE_METACHARACTERS, self.fixed_strings);
        options.set(Options::ANCHORS_MATCH_LINES, self.multiline);
        options.set(Options::DOT_MATCHES_LINE_SEPARATORS, self.dot_all);
        options.set(Options::ALLOW_COMMENTS_AND_WHITESPACE, self.extended);
        options
    }
}

fn read_input(file: Option<&Path>) -> Result<String, String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading {}: {e}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("Error reading standard input: {e}"))?;
            Ok(input)
        }
    }
}

fn compile(pattern: &str, flags: &Flags) -> Result<Regex, String> {
    Regex::with_options(pattern, flags.options()).map_err(|e| e.to_string())
}

fn run_grep(
    regex: &Regex,
    input: &str,
    only_matching: bool,
    captures: bool,
) -> io::Result<bool> {
    let mut stdout = io::stdout().lock();
    let mut matched = false;
    for (line, m) in grep(input, regex) {
        matched = true;
        if captures {
            let fields: Vec<&str> = m.captures().iter().map(|c| c.unwrap_or("")).collect();
            writeln!(stdout, "{}", fields.join("\t"))?;
        } else if only_matching {
            writeln!(stdout, "{}", m.as_str())?;
        } else {
            writeln!(stdout, "{line}")?;
        }
    }
    Ok(matched)
}

fn run_replace(regex: &Regex, input: &str, template: &str, first: bool) -> io::Result<bool> {
    let matched = regex.is_match(input);
    let output = if first {
        regex.replacing_first(input, template)
    } else {
        regex.replacing_all(input, template)
    };
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(matched)
}

fn execute(command: &Command) -> Result<bool, String> {
    match command {
        Command::Grep {
            pattern,
            file,
            only_matching,
            captures,
            flags,
        } => {
            let regex = compile(pattern, flags)?;
            let input = read_input(file.as_deref())?;
            run_grep(&regex, &input, *only_matching, *captures)
                .map_err(|e| format!("Write error: {e}"))
        }
        Command::Replace {
            pattern,
            template,
            file,
            first,
            flags,
        } => {
            let regex = compile(pattern, flags)?;
            let input = read_input(file.as_deref())?;
            run_replace(&regex, &input, template, *first).map_err(|e| format!("Write error: {e}"))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    if let Err(e) = Logger::init(level) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match execute(&cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
