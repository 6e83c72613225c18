//! Command line arguments for the glyph inspector

use clap::Parser;
use std::path::PathBuf;

/// command line arguments for font loading and glyph selection
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// path to a ufo font file to inspect
    #[arg(long = "load-ufo")]
    pub ufo_path: Option<PathBuf>,

    /// glyph names to analyze (defaults to every glyph in the default
    /// layer)
    #[arg(long = "glyph")]
    pub glyphs: Vec<String>,

    /// analyze a raw svg path-data string instead of a ufo glyph
    #[arg(long = "svg-path", conflicts_with = "ufo_path")]
    pub svg_path: Option<String>,

    /// units per em assumed for --svg-path input
    #[arg(long, default_value_t = 1000.0)]
    pub units_per_em: f64,

    /// emit the report as json
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
