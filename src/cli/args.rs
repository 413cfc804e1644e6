use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for zfs-reporter
#[derive(Parser, Debug)]
#[command(
    name = "zfs-reporter",
    version = env!("CARGO_PKG_VERSION"),
    about = "ZFS appliance filesystem inventory reporter",
    long_about = "Retrieves filesystem inventory from a ZFS storage appliance's REST API and writes it to <FILENAME>.csv and <FILENAME>.json, with an optional console preview."
)]
pub struct Args {
    /// ZFS appliance/storage name
    #[arg(short, long, value_name = "STORAGE")]
    pub storage: String,

    /// Base filename (without extension) for output files
    #[arg(short = 'f', long = "filename", visible_alias = "fl", value_name = "FILENAME")]
    pub filename: String,

    /// View the first NUM rows in the CLI
    #[arg(short = 'v', long = "view", value_name = "NUM", allow_hyphen_values = true)]
    pub view: Option<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Validate the appliance TLS certificate
    #[arg(long)]
    pub verify_tls: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_required_flags() {
        let args = Args::try_parse_from(["zfs-reporter", "-s", "zfs01", "-f", "report"]).unwrap();
        assert_eq!(args.storage, "zfs01");
        assert_eq!(args.filename, "report");
        assert!(args.view.is_none());
        assert!(!args.verify_tls);

        assert!(Args::try_parse_from(["zfs-reporter", "-s", "zfs01"]).is_err());
    }

    #[test]
    fn test_view_short_and_long() {
        let short = Args::try_parse_from(["zfs-reporter", "-s", "a", "-f", "b", "-v", "5"]).unwrap();
        let long = Args::try_parse_from(["zfs-reporter", "-s", "a", "-f", "b", "--view", "5"]).unwrap();
        assert_eq!(short.view.as_deref(), Some("5"));
        assert_eq!(long.view.as_deref(), Some("5"));
    }

    #[test]
    fn test_view_accepts_negative_and_text() {
        let negative = Args::try_parse_from(["zfs-reporter", "-s", "a", "-f", "b", "-v", "-2"]).unwrap();
        assert_eq!(negative.view.as_deref(), Some("-2"));

        let text = Args::try_parse_from(["zfs-reporter", "-s", "a", "-f", "b", "--view", "all"]).unwrap();
        assert_eq!(text.view.as_deref(), Some("all"));
    }

    #[test]
    fn test_filename_alias() {
        let args = Args::try_parse_from(["zfs-reporter", "-s", "a", "--fl", "out"]).unwrap();
        assert_eq!(args.filename, "out");
    }
}
