use clap::Command;

mod cmd;
mod config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("folio")
        .about("Generate a personal portfolio site from a folder of markdown")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::build::make_subcommand())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("build", args)) => cmd::build::execute(args),
        _ => unreachable!("subcommand is required"),
    };

    if let Err(e) = result {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
