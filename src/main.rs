//
// main.rs
// Dicom-Scanner-rs
//
// Entry point that hands off execution to the CLI layer; a returned error exits non-zero.
//
// Thales Matheus Mendonça Santos - November 2025

use dicom_scanner::cli;

fn main() -> anyhow::Result<()> {
    cli::run()
}
