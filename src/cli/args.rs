use crate::io::report_writer::ReportDestination;
use crate::runner::ReportJob;
use clap::Parser;
use std::path::PathBuf;

/// Default report file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Top up member token balances and report who gets emailed
#[derive(Parser, Debug)]
#[command(name = "topup-report")]
#[command(about = "Top up member token balances and report who gets emailed", long_about = None)]
pub struct CliArgs {
    /// Companies JSON file
    #[arg(
        short = 'c',
        long = "companies",
        value_name = "COMPANY_LIST",
        help = "Provide a company list to generate the report"
    )]
    pub companies: PathBuf,

    /// Users JSON file
    #[arg(
        short = 'u',
        long = "users",
        value_name = "USER_LIST",
        help = "Provide a user list to generate the report"
    )]
    pub users: PathBuf,

    /// Report destination
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT_FILE",
        default_value = DEFAULT_OUTPUT,
        help = "Output file, must not exist yet ('-' for stdout)"
    )]
    pub output: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "TOPUP_LOG_LEVEL",
        default_value = "warn"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Build the report job described by these arguments
    pub fn to_job(&self) -> ReportJob {
        ReportJob {
            organizations_path: self.companies.clone(),
            members_path: self.users.clone(),
            destination: ReportDestination::from_path(&self.output),
        }
    }
}
