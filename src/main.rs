use clap::Parser;
use std::fs;
use std::path::PathBuf;
use unicode_pdf::{Error, RenderOptions, render_to_file};

const USAGE: &str = "Usage: text2pdf <input.txt> <output.pdf>";

/// Render a UTF-8 text file into a PDF using a Unicode font.
///
/// Help and version flags are disabled: any argument list other than the two
/// paths (plus `--font`) is answered with the usage line and exit status 1.
#[derive(Parser, Debug)]
#[command(about, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// UTF-8 text file to render
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
    /// Destination PDF, overwritten if it exists
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
    /// TrueType/OpenType font to embed instead of the default DejaVu Sans
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            log::debug!("Argument parsing failed: {}", e);
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let text = fs::read_to_string(&cli.input)?;
    log::debug!("Read {} bytes from {}", text.len(), cli.input.display());

    let mut options = RenderOptions::new();
    if let Some(font) = cli.font {
        options = options.with_font_path(font);
    }
    render_to_file(&text, &cli.output, &options)
}
