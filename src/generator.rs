use std::{path::PathBuf, time::SystemTime};

use log::{debug, info};
use snafu::{ResultExt, Snafu};

use crate::config::loading::SettingsError;
use crate::config::models::{PkgInfo as PkgInfoSettings, Settings};
use crate::pkginfo::models::{PkgInfo, PkgInfoMetadata, INSTALLER_TYPE_NOPKG, UNINSTALL_METHOD_SCRIPT};
use crate::pkginfo::writer::{self, WriteError};
use crate::printer::models::PrinterConfig;
use crate::scripts::{self, template::{RenderError, ScriptTemplate}};

/// Renders the three scripts for `printer` and assembles its pkginfo.
///
/// Every substitution is echoed to stdout as `KEY: value`.
pub fn build_pkginfo(printer: &PrinterConfig, settings: &PkgInfoSettings) -> Result<PkgInfo, GenerateError> {
    let substitutions = printer.substitutions();
    for (token, value) in substitutions.iter() {
        println!("{}: {}", token, value);
    }

    let render = |template: &ScriptTemplate| -> Result<String, GenerateError> {
        let script = template.render(&substitutions).context(RenderSnafu)?;
        debug!("Rendered {} script for {} ({} bytes)", template.name(), printer.name, script.len());
        Ok(script)
    };
    let installcheck_script = render(&scripts::INSTALLCHECK)?;
    let postinstall_script = render(&scripts::POSTINSTALL)?;
    let uninstall_script = render(&scripts::UNINSTALL)?;

    Ok(PkgInfo {
        metadata: Some(PkgInfoMetadata {
            created_by: settings.created_by.clone().filter(|user| !user.is_empty()),
            creation_date: SystemTime::now().into(),
        }),
        autoremove: false,
        catalogs: printer.catalogs(),
        description: format!("Installer for {}", printer.description),
        display_name: printer.description.clone(),
        installcheck_script,
        installer_type: INSTALLER_TYPE_NOPKG.to_string(),
        minimum_os_version: settings.minimum_os_version.clone(),
        name: printer.name.clone(),
        postinstall_script,
        requires: printer.requires.clone(),
        unattended_install: true,
        uninstall_method: UNINSTALL_METHOD_SCRIPT.to_string(),
        uninstall_script,
        uninstallable: true,
        version: printer.version.to_string(),
    })
}

/// Builds the pkginfo for `printer` and writes it into the configured output directory.
pub fn generate(printer: &PrinterConfig, settings: &Settings) -> Result<PathBuf, GenerateError> {
    let pkginfo = build_pkginfo(printer, &settings.pkginfo)?;
    let path = writer::write_pkginfo(&pkginfo, &settings.output_dir).context(WriteSnafu)?;
    info!("Wrote pkginfo for {} version {} to {}", pkginfo.name, pkginfo.version, path.display());
    Ok(path)
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum GenerateError {
    #[snafu(display("Could not load settings"))]
    Settings { source: SettingsError },

    #[snafu(display("Could not render scripts"))]
    Render { source: RenderError },

    #[snafu(display("Could not write pkginfo"))]
    Write { source: WriteError },
}
