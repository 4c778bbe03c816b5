use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use snafu::{ResultExt, Snafu};

use super::models::PkgInfo;

pub const PKGINFO_EXTENSION: &str = "pkginfo";

pub fn pkginfo_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{name}.{PKGINFO_EXTENSION}"))
}

/// Serializes `pkginfo` to an XML property list made of ASCII text only.
pub fn to_ascii_xml(pkginfo: &PkgInfo) -> Result<String, WriteError> {
    let mut buffer = Vec::new();
    plist::to_writer_xml(&mut buffer, pkginfo).context(SerializeSnafu)?;
    let xml = String::from_utf8(buffer).context(EncodingSnafu)?;
    Ok(escape_non_ascii(&xml))
}

/// Writes `pkginfo` to `<output_dir>/<name>.pkginfo`, replacing any existing file.
///
/// # Arguments
///
/// * `pkginfo`: Descriptor to write
/// * `output_dir`: Directory the file is created in
///
/// returns: Result<PathBuf, WriteError> with the path of the written file
pub fn write_pkginfo(pkginfo: &PkgInfo, output_dir: &Path) -> Result<PathBuf, WriteError> {
    let xml = to_ascii_xml(pkginfo)?;
    let path = pkginfo_path(output_dir, &pkginfo.name);
    debug!("Writing {} bytes to {}", xml.len(), path.display());
    fs::write(&path, xml).context(IoSnafu { path: path.clone() })?;
    Ok(path)
}

/// Replaces every non-ASCII character with an XML numeric character reference.
fn escape_non_ascii(xml: &str) -> String {
    let mut escaped = String::with_capacity(xml.len());
    for c in xml.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            escaped.push_str(&format!("&#{};", c as u32));
        }
    }
    escaped
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum WriteError {
    #[snafu(display("Could not serialize pkginfo"))]
    Serialize { source: plist::Error },

    #[snafu(display("Serialized pkginfo is not valid UTF-8"))]
    Encoding { source: std::string::FromUtf8Error },

    #[snafu(display("Could not write {}", path.display()))]
    Io { path: PathBuf, source: std::io::Error },
}
