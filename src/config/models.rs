use std::path::PathBuf;

use serde_derive::Deserialize;

// When changing anything here, make sure to add
// #[serde(alias = "ihavenounderscores")]
// where needed, so it can be read from the ENV vars.

#[derive(Debug, Deserialize)]
pub struct PkgInfo {
    #[serde(alias = "minimumosversion")]
    pub minimum_os_version: String,
    #[serde(alias = "createdby")]
    pub created_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(alias = "outputdir")]
    pub output_dir: PathBuf,
    pub pkginfo: PkgInfo,
}
