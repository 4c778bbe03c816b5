use serde_derive::{Deserialize, Serialize};

pub const INSTALLER_TYPE_NOPKG: &str = "nopkg";
pub const UNINSTALL_METHOD_SCRIPT: &str = "uninstall_script";

// Field order is the key order in the written plist, keep it alphabetical.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PkgInfo {
    #[serde(rename = "_metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PkgInfoMetadata>,
    pub autoremove: bool,
    pub catalogs: Vec<String>,
    pub description: String,
    pub display_name: String,
    pub installcheck_script: String,
    pub installer_type: String,
    pub minimum_os_version: String,
    pub name: String,
    pub postinstall_script: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    pub unattended_install: bool,
    pub uninstall_method: String,
    pub uninstall_script: String,
    pub uninstallable: bool,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PkgInfoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub creation_date: plist::Date,
}
