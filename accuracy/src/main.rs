use chrono::prelude::*;
use std::error::Error;
use std::time::Instant;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use moderation::{Analysis, Dictionary, DictionaryEntry, Moderate, Moderator, ModeratorConfig};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use structopt::clap::{App, AppSettings, Arg};

static CFG: ModeratorConfig = ModeratorConfig::default();

fn load_phrases(
    path: &str,
    max_phrases: Option<usize>,
) -> Result<Vec<(bool, String)>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    Ok(rdr
        .records()
        .filter_map(Result::ok)
        .filter_map(|r| {
            r.get(0)
                .and_then(|x| r.get(1).map(|y| (x.trim() == "1", y.to_string())))
        })
        .take(max_phrases.unwrap_or(std::usize::MAX))
        .collect())
}

/// Same verdict as `Moderator::is_inappropriate`, without scanning again.
fn is_flagged(analysis: &Analysis, cfg: &ModeratorConfig) -> bool {
    analysis.inappropriate_level() >= cfg.inappropriate_threshold
}

#[derive(Debug, Default, Serialize, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
struct Time {
    secs: u64,
    subsec_nanos: u32,
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let ms = self.secs * 1000 + (self.subsec_nanos as u64 / 1_000_000);
        write!(f, "{}ms", ms)
    }
}

impl From<std::time::Duration> for Time {
    fn from(duration: std::time::Duration) -> Time {
        Time {
            secs: duration.as_secs(),
            subsec_nanos: duration.subsec_nanos(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AccuracyResult<'a> {
    input: &'a str,
    expected: bool,
    actual: bool,
    types: String,
    time: Time,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    config: &'a ModeratorConfig,
    dictionary_size: usize,
    summary: Summary,
    results: Vec<AccuracyResult<'a>>,
    start_timestamp: String,
    total_time: Time,
}

#[derive(Serialize, Default, Debug, Clone)]
struct Summary {
    total: u32,
    correct: u32,
    total_positive: u32,
    correct_positive: u32,
    total_negative: u32,
    correct_negative: u32,
    slowest_scan: Time,
    fastest_scan: Time,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "[all] {:.2}% [positive] {:.2}% [negative] {:.2}% [fast] {} [slow] {}",
            self.accuracy(),
            percent(self.correct_positive, self.total_positive),
            percent(self.correct_negative, self.total_negative),
            self.fastest_scan,
            self.slowest_scan
        )
    }
}

fn percent(part: u32, whole: u32) -> f32 {
    if whole == 0 {
        return 0.0;
    }

    part as f32 / whole as f32 * 100f32
}

impl Summary {
    fn new(results: &[AccuracyResult<'_>]) -> Summary {
        let mut summary = Summary::default();

        results.iter().for_each(|result| {
            let correct = result.expected == result.actual;

            summary.total += 1;
            summary.correct += correct as u32;

            if result.expected {
                summary.total_positive += 1;
                summary.correct_positive += correct as u32;
            } else {
                summary.total_negative += 1;
                summary.correct_negative += correct as u32;
            }
        });

        summary.slowest_scan = results.iter().map(|x| x.time).max().unwrap_or_default();
        summary.fastest_scan = results.iter().map(|x| x.time).min().unwrap_or_default();

        summary
    }

    fn accuracy(&self) -> f32 {
        percent(self.correct, self.total)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let matches = App::new("moderation-accuracy")
        .setting(AppSettings::ArgRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Accuracy testing for moderation dictionaries.")
        .arg(
            Arg::with_name("config")
                .short("c")
                .takes_value(true)
                .help("Provide JSON config file to override test defaults"),
        )
        .arg(
            Arg::with_name("dictionary")
                .short("d")
                .takes_value(true)
                .help("JSON word list to use instead of the built-in dictionary"),
        )
        .arg(
            Arg::with_name("phrases")
                .value_name("PHRASES")
                .help("CSV of 'label,phrase' rows, label 1 for inappropriate and 0 otherwise"),
        )
        .arg(
            Arg::with_name("json-output")
                .short("o")
                .takes_value(true)
                .value_name("JSON-OUTPUT")
                .help("The file path for the JSON report output"),
        )
        .arg(
            Arg::with_name("max-phrases")
                .short("w")
                .takes_value(true)
                .help("Truncate phrase list to max number of phrases specified"),
        )
        .arg(
            Arg::with_name("required")
                .short("r")
                .takes_value(true)
                .help("Exit with an error when overall accuracy is below this percentage"),
        )
        .get_matches();

    let cfg: ModeratorConfig = match matches.value_of("config") {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            serde_json::from_reader(file)?
        }
        None => CFG.clone(),
    };

    let dictionary = match matches.value_of("dictionary") {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            let entries: Vec<DictionaryEntry> = serde_json::from_reader(file)?;
            Dictionary::build(entries)?
        }
        None => Dictionary::default(),
    };
    let dictionary_size = dictionary.len();
    let moderator = Moderator::with_config(dictionary, cfg.clone());

    let phrases = match matches.value_of("phrases") {
        Some(path) => load_phrases(
            path,
            matches
                .value_of("max-phrases")
                .and_then(|x| x.parse::<usize>().ok()),
        )?,
        None => {
            eprintln!("No phrase list for given path; aborting.");
            std::process::exit(1);
        }
    };

    let pb = ProgressBar::new(phrases.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{pos}/{len} [{percent}%] {wide_bar} {elapsed_precise}"),
    );

    let start_timestamp = Local::now().to_rfc3339();
    let start_time = Instant::now();
    let results = phrases
        .par_iter()
        .progress_with(pb)
        .map(|(expected, input)| {
            let now = Instant::now();
            let analysis = moderator.analyze(input);
            let time = Time::from(now.elapsed());

            AccuracyResult {
                input,
                expected: *expected,
                actual: is_flagged(&analysis, &cfg),
                types: analysis.types().to_string(),
                time,
            }
        })
        .collect::<Vec<_>>();
    let total_time = Time::from(start_time.elapsed());

    for miss in results.iter().filter(|r| r.expected != r.actual) {
        log::debug!("expected {} got {} for {:?}", miss.expected, miss.actual, miss.input);
    }

    let summary = Summary::new(&results);
    println!("{}", summary);

    let accuracy = summary.accuracy();

    if let Some(path) = matches.value_of("json-output") {
        let output = std::fs::File::create(path)?;
        let report = Report {
            config: &cfg,
            dictionary_size,
            summary,
            results,
            start_timestamp,
            total_time,
        };
        println!("Writing JSON report…");
        serde_json::to_writer_pretty(output, &report)?;
    }

    if let Some(required) = matches.value_of("required") {
        let required: f32 = required.parse()?;
        if accuracy < required {
            eprintln!("Accuracy {:.2}% is below the required {}%.", accuracy, required);
            std::process::exit(1);
        }
    }

    println!("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_matches_moderator() {
        for threshold in 1..4 {
            let cfg = ModeratorConfig {
                inappropriate_threshold: threshold,
                ..ModeratorConfig::default()
            };
            let moderator = Moderator::with_config(Dictionary::default(), cfg.clone());

            for text in ["hello", "ass", "ass ass", "fuck", "sh1t", "assassin", "dumb"] {
                assert_eq!(
                    is_flagged(&moderator.analyze(text), &cfg),
                    moderator.is_inappropriate(text),
                    "{:?} at {}",
                    text,
                    threshold
                );
            }
        }
    }

    #[test]
    fn summary_counts() {
        let result = |expected, actual| AccuracyResult {
            input: "",
            expected,
            actual,
            types: String::new(),
            time: Time::default(),
        };
        let summary = Summary::new(&[
            result(true, true),
            result(true, false),
            result(false, false),
            result(false, false),
        ]);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.correct, 3);
        assert_eq!(percent(summary.correct_positive, summary.total_positive), 50.0);
        assert_eq!(percent(summary.correct_negative, summary.total_negative), 100.0);
    }
}
