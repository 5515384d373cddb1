#[macro_use]
extern crate log;

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use pathrank::prelude::*;

/// pr - rank lines by how well they fuzzy match a query
///
/// Reads candidates from stdin (or --input), prints the matching ones best
/// first. Exits with 0 when something matched, 1 when nothing did and 2 on
/// error.
#[derive(Parser, Debug)]
#[command(name = "pr", args_override_self = true, verbatim_doc_comment, version, about)]
struct Cli {
    /// Query to match the candidates against
    query: String,

    //  --- Input ---
    /// Read candidates from FILE instead of stdin
    #[arg(long, short, value_name = "FILE", help_heading = "Input")]
    input: Option<PathBuf>,

    /// Candidates are delimited by NUL instead of newline
    #[arg(long, help_heading = "Input")]
    read0: bool,

    //  --- Scoring ---
    /// Blend a basename score into the score of path-like candidates
    #[arg(long, short, help_heading = "Scoring")]
    path: bool,

    /// Favour candidates whose extension matches the query's
    #[arg(long, help_heading = "Scoring")]
    ext_bonus: bool,

    /// Score candidates even when the query is not a subsequence of them
    #[arg(long, help_heading = "Scoring")]
    allow_errors: bool,

    /// Directory separator for --path
    #[arg(long, default_value_t = '/', help_heading = "Scoring")]
    separator: char,

    /// Characters matching REGEX are ignored by the quick subsequence check
    #[arg(long, value_name = "REGEX", help_heading = "Scoring")]
    optional_chars: Option<String>,

    //  --- Filtering ---
    /// Print at most N candidates
    #[arg(long, short = 'n', value_name = "N", help_heading = "Filtering")]
    max_results: Option<usize>,

    /// Stop reading candidates once N of them matched
    #[arg(long, value_name = "N", help_heading = "Filtering")]
    max_inners: Option<usize>,

    //  --- Output ---
    /// Prefix every line with its score and a tab
    #[arg(long, help_heading = "Output")]
    print_score: bool,

    /// Wrap matched characters in tags
    #[arg(long, help_heading = "Output")]
    highlight: bool,

    /// Opening tag for --highlight
    #[arg(long, value_name = "TAG", help_heading = "Output")]
    tag_open: Option<String>,

    /// Closing tag for --highlight
    #[arg(long, value_name = "TAG", help_heading = "Output")]
    tag_close: Option<String>,

    /// CSS class of the default opening tag
    #[arg(long, default_value = "highlight", help_heading = "Output")]
    tag_class: String,

    /// Print output delimited by NUL instead of newline
    #[arg(long, help_heading = "Output")]
    print0: bool,
}

impl Cli {
    fn options(&self) -> Result<Options> {
        let mut builder = OptionsBuilder::default();
        builder
            .allow_errors(self.allow_errors)
            .use_path_scoring(self.path)
            .use_extension_bonus(self.ext_bonus)
            .path_separator(self.separator)
            .max_results(self.max_results)
            .max_inners(self.max_inners)
            .highlight(HighlightStyle {
                class: self.tag_class.clone(),
                open: self.tag_open.clone(),
                close: self.tag_close.clone(),
            });
        if let Some(pattern) = &self.optional_chars {
            builder.optional_pattern(pattern)?;
        }

        let mut options = builder.build()?;
        options.prepared_query = Some(Arc::new(prepare_query(&self.query, &options)?));
        Ok(options)
    }
}

//------------------------------------------------------------------------------
fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::builder().format_timestamp_nanos().init();

    let exit_code = match real_main() {
        Ok(exit_code) => exit_code,
        // if downstream pipe is closed, exit silently
        Err(err) if is_broken_pipe(&err) => 0,
        Err(err) => {
            eprintln!("pr: {err:?}");
            2
        }
    };
    std::process::exit(exit_code)
}

fn is_broken_pipe(err: &color_eyre::Report) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|cause| cause.kind() == io::ErrorKind::BrokenPipe)
}

fn parse_args() -> Cli {
    let mut args = Vec::new();

    args.extend(env::args().take(1));
    args.extend(
        env::var("PATHRANK_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    Cli::parse_from(args)
}

fn real_main() -> Result<i32> {
    let cli = parse_args();
    let options = cli.options()?;
    let candidates = read_candidates(&cli)?;

    let ranked = rank(&candidates, &cli.query, &options)?;
    debug!("{} of {} candidates matched", ranked.len(), candidates.len());

    let ending = if cli.print0 { "\0" } else { "\n" };
    let mut stdout = BufWriter::new(io::stdout().lock());
    for Scored { item, score } in &ranked {
        let line = if cli.highlight {
            highlight(item, &cli.query, &options)?
        } else {
            item.to_string()
        };

        if cli.print_score {
            write!(stdout, "{score}\t{line}{ending}")?;
        } else {
            write!(stdout, "{line}{ending}")?;
        }
    }
    stdout.flush()?;

    Ok(if ranked.is_empty() { 1 } else { 0 })
}

fn rank<'a>(candidates: &'a [String], query: &str, options: &Options) -> pathrank::Result<Vec<Scored<&'a String>>> {
    #[cfg(feature = "parallel")]
    let ranked = pathrank::par_filter(candidates, query, options);
    #[cfg(not(feature = "parallel"))]
    let ranked = pathrank::filter_scored(candidates, query, options);
    ranked
}

fn read_candidates(cli: &Cli) -> Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let delimiter = if cli.read0 { b'\0' } else { b'\n' };
    let mut candidates = Vec::new();
    for chunk in reader.split(delimiter) {
        let mut chunk = chunk?;
        if !cli.read0 && chunk.last() == Some(&b'\r') {
            chunk.pop();
        }
        candidates.push(String::from_utf8_lossy(&chunk).into_owned());
    }

    trace!("read {} candidates", candidates.len());
    Ok(candidates)
}
