use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use survey_insights::navigation::SurveyIndex;
use survey_insights::summary::key_insights;
use survey_insights::*;

use std::fs;
use std::path::Path;

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::dashboard::config_reader::*;

pub mod config_reader;
pub mod render;

#[derive(Debug, Snafu)]
pub enum CliError {
    #[snafu(display("Survey error: {source}"))]
    Survey { source: SurveyError },

    #[snafu(display("No city matches {query:?} (try --search)"))]
    UnknownCity { query: String },

    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing file {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },

    #[snafu(display("Difference detected between the output and the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type CliResult<T> = Result<T, CliError>;

/// What the user asked for, once the command line and the configuration file are merged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Settings {
    pub city: Option<String>,
    pub view: ViewMode,
    pub policy: DistributionPolicy,
    pub out: Option<String>,
}

/// Merges the command line options with the configuration file. The command line wins.
pub fn merge_settings(
    args: &Args,
    config: &DashboardConfig,
    config_dir: Option<&Path>,
) -> CliResult<Settings> {
    let view_name = args.view.clone().or_else(|| config.view_mode.clone());
    let view = match view_name {
        Some(name) => name.parse::<ViewMode>().context(SurveySnafu {})?,
        None => ViewMode::default(),
    };
    let policy = if args.normalize || config.normalize.unwrap_or(false) {
        DistributionPolicy::Normalized
    } else {
        DistributionPolicy::Faithful
    };
    let out = match (&args.out, &config.output_path) {
        (Some(o), _) => Some(o.clone()),
        (None, Some(o)) => Some(resolve_config_path(config_dir, o)),
        (None, None) => None,
    };
    Ok(Settings {
        city: args.city.clone().or_else(|| config.default_city.clone()),
        view,
        policy,
        out,
    })
}

/// Finds a city by identifier, or else by name.
pub fn select_city<'a>(index: &'a SurveyIndex, query: &str) -> CliResult<&'a City> {
    let entry = index
        .find_city(query)
        .or_else(|| index.find_by_name(query))
        .context(UnknownCitySnafu { query })?;
    Ok(&entry.city)
}

/// The JSON output for one city.
pub fn city_payload(index: &SurveyIndex, city: &City, view: ViewMode) -> CliResult<JSValue> {
    let data = index.resolve(city).context(SurveySnafu {})?;
    let js = match view {
        ViewMode::Questions => serde_json::to_value(&data).context(ParsingJsonSnafu {})?,
        ViewMode::Insights => json!({
            "city": data.city,
            "month": data.month,
            "week": data.week,
            "keyInsights": key_insights(&data.questions),
        }),
    };
    Ok(js)
}

pub fn read_reference(path: &str) -> CliResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read reference: {} bytes", contents.len());
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})
}

/// Compares the pretty-printed output with the reference, and prints the differences.
pub fn check_reference(output: &str, reference: &JSValue, path: &str) -> CliResult<()> {
    let pretty_reference = serde_json::to_string_pretty(reference).context(ParsingJsonSnafu {})?;
    if pretty_reference != output {
        warn!("Found differences with the reference {}", path);
        print_diff(pretty_reference.as_str(), output, "\n");
        return ReferenceMismatchSnafu { path }.fail();
    }
    info!("Output matches the reference {}", path);
    Ok(())
}

fn write_output(out: Option<&str>, contents: &str) -> CliResult<()> {
    match out {
        None | Some("") | Some("stdout") => {
            println!("{}", contents);
        }
        Some(path) => {
            info!("Writing output to {}", path);
            fs::write(path, contents).context(WritingOutputSnafu { path })?;
        }
    }
    Ok(())
}

pub fn run_dashboard(args: &Args) -> CliResult<()> {
    let (config, config_dir) = match &args.config {
        Some(path) => {
            let config = read_config(path)?;
            info!("config: {:?}", config);
            (config, Path::new(path).parent().map(|p| p.to_path_buf()))
        }
        None => (DashboardConfig::default(), None),
    };
    let settings = merge_settings(args, &config, config_dir.as_deref())?;
    debug!("settings: {:?}", settings);

    let index = SurveyIndex::new()
        .context(SurveySnafu {})?
        .with_policy(settings.policy);

    if args.tree {
        print!("{}", render::render_tree(index.hierarchy(), index.default_expansion()));
    }
    if let Some(query) = &args.search {
        print!("{}", render::render_matches(query, &index.search(query)));
    }

    let payload: Option<JSValue> = if args.all {
        let data = index.survey_data().context(SurveySnafu {})?;
        Some(serde_json::to_value(&data).context(ParsingJsonSnafu {})?)
    } else if let Some(query) = &settings.city {
        let city = select_city(&index, query)?;
        Some(city_payload(&index, city, settings.view)?)
    } else {
        None
    };

    let js = match payload {
        Some(js) => js,
        None if args.tree || args.search.is_some() => return Ok(()),
        None => {
            whatever!("Nothing to do: pass --city, --search, --tree or --all (see --help)")
        }
    };

    let pretty = serde_json::to_string_pretty(&js).context(ParsingJsonSnafu {})?;
    write_output(settings.out.as_deref(), &pretty)?;

    if let Some(reference_path) = &args.reference {
        let reference = read_reference(reference_path)?;
        check_reference(&pretty, &reference, reference_path)?;
    }
    Ok(())
}
