use clap::Parser;

#[derive(Parser)]
#[command(name = "quake-reporter")]
#[command(about = "Report depth and magnitude extremes from a USGS monthly earthquake catalog")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
