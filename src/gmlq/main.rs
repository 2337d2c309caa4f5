use clap::Parser;
use gmlq::config::GmlqConfig;
use gmlq::directory::ldap::LdapDirectory;
use gmlq::error::Result;
use gmlq::{output, search};
use log::error;

mod args;
use args::Cli;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(term) = cli.term else {
        println!("usage: gmlq TERM");
        return Ok(());
    };

    let config = GmlqConfig::resolve()?;
    let mut directory = LdapDirectory::new(config.server_url());
    let results = search::run(&mut directory, &config, &term)?;

    // A broken output stream is not our problem to report.
    let stdout = std::io::stdout();
    let _ = output::write_results(&mut stdout.lock(), &results);
    Ok(())
}
