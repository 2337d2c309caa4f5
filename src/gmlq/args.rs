use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gmlq")]
#[command(about = "Look up people in an LDAP directory", long_about = None)]
pub struct Cli {
    /// Term matched as a substring against the configured search attributes
    pub term: Option<String>,
}
