//! The check command.
//!
//! Builds the rule and key path first, so bad arguments fail before the
//! configuration file is touched, then loads, checks and reports.

use tracing::debug;

use crate::check::check_document;
use crate::cli::args::CheckArgs;
use crate::compat::CompatibilityRule;
use crate::config::{load_document, resolve_format, KeyPath};
use crate::error::Result;
use crate::report::Reporter;
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rule = CompatibilityRule::build(
            self.args.rule,
            self.args.app_version.as_deref(),
            self.args.min_version.as_deref(),
            self.args.max_version.as_deref(),
        )?;
        let key = KeyPath::parse(&self.args.version_key)?;
        debug!("Checking key '{}' with rule {}", key, rule);

        let format = resolve_format(&self.args.config, self.args.config_type)?;
        let document = load_document(&self.args.config, format)?;

        let report = check_document(&document, &key, &rule, &self.args.reference_text());
        debug!("Verdict: {}", report.verdict);

        Reporter::new(self.args.report_format()).emit(&report, ui)?;

        Ok(CommandResult::from_verdict(report.verdict))
    }
}
