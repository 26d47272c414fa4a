//! vndocx - TCVN3 (ABC) to Unicode DOCX converter

use std::process::ExitCode;

use clap::Parser;

use vndocx::convert_docx;

#[derive(Parser)]
#[command(name = "vndocx")]
#[command(version, about = "Convert TCVN3 (ABC) DOCX documents to Unicode", long_about = None)]
#[command(after_help = "EXAMPLES:
    vndocx legacy.docx converted.docx      Convert a document
    vndocx -p legacy.docx converted.docx   Convert and print the text preview")]
struct Cli {
    /// Input DOCX file (TCVN3-encoded)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output DOCX file (Unicode)
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Print the extracted text preview after converting
    #[arg(short, long)]
    preview: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let result = convert_docx(&cli.input).map_err(|e| e.to_string())?;
    std::fs::write(&cli.output, &result.docx).map_err(|e| e.to_string())?;

    if !cli.quiet {
        println!("{} -> {}", cli.input, cli.output);
    }
    if cli.preview {
        println!("{}", result.preview);
    }

    Ok(())
}
