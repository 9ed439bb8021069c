use clap::{App, Arg};
use header_to_ts::pipeline::{self, RunStatus};
use header_to_ts::ts::Config;
use log::error;
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("header_to_ts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate TypeScript enums from C++ header files")
        .arg(
            Arg::with_name("project-dir")
                .long("project-dir")
                .value_name("DIR")
                .takes_value(true)
                .help("Project root containing the src/ and interface/ trees (default: current directory)"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("Path to a JSON configuration file"),
        )
        .get_matches();

    let mut config = match matches.value_of("config") {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                error!("Failed to load configuration {}: {}", path, err);
                eprintln!("Failed to load configuration {}: {}", path, err);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Some(project_dir) = matches.value_of("project-dir") {
        config.project_dir = project_dir.to_string();
    }

    match pipeline::run(&config) {
        Ok(RunStatus::Generated(summary)) => pipeline::print_summary(&summary),
        Ok(RunStatus::NoHeaders) => {}
        Err(err) => {
            error!("Enum generation failed: {}", err);
            eprintln!("Enum generation failed: {}", err);
            process::exit(1);
        }
    }
}
