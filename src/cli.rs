use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tfquiz", version, about = "Timed true/false quiz in the terminal")]
pub struct Cli {
    /// Question bank file, records separated by '#'
    #[arg(default_value = "TestBank.txt")]
    pub bank: PathBuf,

    /// Do not clear the screen between prompts
    #[arg(long)]
    pub no_clear: bool,

    /// Ring the terminal bell on every correct answer
    #[arg(long)]
    pub bell: bool,

    /// Seed for question selection, for reproducible runs
    #[arg(long, value_name = "n")]
    pub seed: Option<u64>,

    /// Write a YAML answer sheet for every finished quiz into this directory
    #[arg(long, value_name = "dir")]
    pub export: Option<PathBuf>,

    /// Load the question bank, print a summary and exit
    #[arg(long)]
    pub check: bool,
}
