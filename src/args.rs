use clap::Parser;

/// Explores the synthetic jewelry survey: the cities by month and week, and the
/// answers of each city.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with default settings. Options given on the
    /// command line take precedence over the file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (city identifier or name) The city to output, for example `mumbai-mar-w1` or `Mumbai`.
    #[clap(long, value_parser)]
    pub city: Option<String>,

    /// (text) Lists the cities whose name or state contains this text (ignoring case).
    #[clap(short, long, value_parser)]
    pub search: Option<String>,

    /// If passed as an argument, prints the months, weeks and cities of the survey.
    #[clap(long, takes_value = false)]
    pub tree: bool,

    /// If passed as an argument, outputs the data of every city.
    #[clap(long, takes_value = false)]
    pub all: bool,

    /// (default questions) What to output for a city: `questions` or `insights`.
    #[clap(long, value_parser)]
    pub view: Option<String>,

    /// (file path, 'stdout' or empty) Where the JSON output is written.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file in JSON format. If provided, surveydash will
    /// check that the output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, negative shares are clamped and every distribution
    /// is rescaled to sum to 100.
    #[clap(long, takes_value = false)]
    pub normalize: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
