use clap::Parser;

use crate::printer::version::{parse_version, Version};

// ///////////// //
// CLI interface //
// ///////////// //

/// printer2pkginfo - Generates a Munki nopkg pkginfo that installs a printer queue with lpadmin.
#[derive(Parser, Debug)]
#[command(name = "printer2pkginfo", long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Name of the printer queue to add; also names the output file.
    #[arg(long, value_name = "SomePrinter")]
    pub name: String,

    /// Short description of the role the printer fills.
    #[arg(long, value_name = "\"Just Some Printer\"")]
    pub description: String,

    /// Short description of the location of the printer.
    #[arg(long, value_name = "\"On Desk\"")]
    pub location: String,

    /// Whether to publish (share) the printer.
    #[arg(long)]
    pub publish: bool,

    /// URI for the printer.
    #[arg(long, value_name = "lpd://x.x.x.x")]
    pub uri: String,

    /// Path to the PPD for the printer.
    #[arg(long, value_name = "/Library/Printers/PPDs/Contents/Resources/...")]
    pub ppd: String,

    /// Version for the pkginfo.
    #[arg(long, value_name = "x.x", value_parser = parse_version)]
    pub version: Version,

    /// Additional options to configure the printer with.
    #[arg(long, value_name = "opt1=foo opt2=bar", num_args = 1..)]
    pub options: Vec<String>,

    /// Additional catalogs for the pkginfo. "testing" is always added.
    #[arg(long, value_name = "catalog_name", num_args = 1..)]
    pub catalogs: Vec<String>,

    /// Items that must be installed before the printer, e.g. its driver package.
    #[arg(long, value_name = "item_name", num_args = 1..)]
    pub requires: Vec<String>,

    /// Log debug output.
    #[arg(short, long)]
    pub verbose: bool,
}
