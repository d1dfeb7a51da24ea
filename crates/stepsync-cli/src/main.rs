//! Command line entry point for `stepsync`.
//!
//! Synchronises one Gherkin feature file with its cucumber-js step
//! definition file, appending a typed stub for every declared step that has
//! no implementation yet.

mod cli;
mod logging;
mod output;

fn main() -> eyre::Result<()> {
    cli::run()
}
