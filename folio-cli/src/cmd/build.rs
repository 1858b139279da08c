use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use folio_core::Generator;

use crate::config::load_build_config;

pub fn add_build_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("content")
                .short('s')
                .long("content")
                .value_name("DIR")
                .help("Content directory with one subdirectory per category")
                .default_value("./contents"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for generated pages")
                .default_value("./out"),
        )
        .arg(
            Arg::new("theme")
                .short('t')
                .long("theme")
                .value_name("DIR")
                .help("Theme directory with the page templates")
                .default_value("./theme"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value("./folio.toml"),
        )
}

pub fn make_subcommand() -> Command {
    add_build_args(Command::new("build")).about("Build the site from the content directory")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let folio_config = load_build_config(args)?;
    let build_config = folio_config.build_config();

    let generator = Generator::new(
        folio_config.site_config(),
        &build_config.content,
        &build_config.output,
        &build_config.theme,
    )?;
    generator.run()?;

    println!("Site built successfully in {}", build_config.output);

    Ok(())
}
