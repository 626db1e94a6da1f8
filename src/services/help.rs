//! Help boundary. Launching an external viewer is left to implementations of
//! [`HelpLauncher`]; the default only points the user at the help URL.

use crate::core::EditorError;

pub trait HelpLauncher {
    /// Opens help for `url`. The returned text is shown on the command line.
    fn launch(&mut self, url: &str) -> Result<String, EditorError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdLineHelp;

impl HelpLauncher for CmdLineHelp {
    fn launch(&mut self, url: &str) -> Result<String, EditorError> {
        Ok(format!("Help: {url}"))
    }
}
