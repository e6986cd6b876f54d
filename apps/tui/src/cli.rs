use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "country-prospector", version, about = "Country Prospect Dashboard")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug diagnostics
    #[arg(long)]
    pub debug: bool,

    /// Override backend base URL
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(api) = &self.api {
            std::env::set_var("PROSPECT_API_URL", api);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
