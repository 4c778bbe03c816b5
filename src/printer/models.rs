use crate::cli::Cli;
use crate::scripts::template::{tokens, Substitutions};

use super::version::Version;

/// Catalog every generated item is published to.
pub const DEFAULT_CATALOG: &str = "testing";

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub name: String,
    pub description: String,
    pub location: String,
    pub uri: String,
    pub ppd: String,
    pub version: Version,
    pub publish: bool,
    pub options: Vec<String>,
    pub catalogs: Vec<String>,
    pub requires: Vec<String>,
}

impl PrinterConfig {
    /// Extra `lpadmin` options as a single space separated string.
    pub fn joined_options(&self) -> String {
        self.options.join(" ")
    }

    /// The default catalog followed by the user supplied ones, in order and without deduplication.
    pub fn catalogs(&self) -> Vec<String> {
        std::iter::once(DEFAULT_CATALOG.to_string())
            .chain(self.catalogs.iter().cloned())
            .collect()
    }

    pub fn substitutions(&self) -> Substitutions {
        let mut substitutions = Substitutions::new();
        substitutions.insert(tokens::PRINTER_NAME, &self.name);
        substitutions.insert(tokens::LOCATION, &self.location);
        substitutions.insert(tokens::DESCRIPTION, &self.description);
        substitutions.insert(tokens::PUBLISH, self.publish.to_string());
        substitutions.insert(tokens::URI, &self.uri);
        substitutions.insert(tokens::PPD, &self.ppd);
        substitutions.insert(tokens::VERSION, self.version.to_string());
        substitutions.insert(tokens::ADD_OPTS, self.joined_options());
        substitutions
    }
}

impl From<Cli> for PrinterConfig {
    fn from(cli: Cli) -> Self {
        PrinterConfig {
            name: cli.name,
            description: cli.description,
            location: cli.location,
            uri: cli.uri,
            ppd: cli.ppd,
            version: cli.version,
            publish: cli.publish,
            options: cli.options,
            catalogs: cli.catalogs,
            requires: cli.requires,
        }
    }
}
