pub mod template;

use template::ScriptTemplate;

pub static INSTALLCHECK: ScriptTemplate = ScriptTemplate::new("installcheck", include_str!("templates/installcheck.sh"));
pub static POSTINSTALL: ScriptTemplate = ScriptTemplate::new("postinstall", include_str!("templates/postinstall.sh"));
pub static UNINSTALL: ScriptTemplate = ScriptTemplate::new("uninstall", include_str!("templates/uninstall.sh"));
