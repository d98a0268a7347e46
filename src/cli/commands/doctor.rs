//! Doctor command - verify system requirements and configuration.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcription::is_api_key_configured;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
struct CheckResult {
    name: String,
    ok: bool,
    message: String,
    hint: Option<String>,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            ok: true,
            message: message.to_string(),
            hint: None,
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            ok: false,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = if self.ok {
            style("✓").green()
        } else {
            style("✗").red()
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Ekko Doctor");
    println!();

    let mut checks = Vec::new();

    checks.push(check_api_key());
    checks.push(check_config_file());
    checks.push(check_dir("Data directory", &settings.data_dir()));
    checks.push(check_dir("Temp directory", &settings.temp_dir()));

    for check in &checks {
        check.print();
    }
    println!();

    let failed = checks.iter().filter(|c| !c.ok).count();
    if failed == 0 {
        Output::success("All checks passed.");
        Ok(())
    } else {
        Output::error(&format!("{} check(s) failed.", failed));
        Err(anyhow::anyhow!("{} check(s) failed", failed))
    }
}

fn check_api_key() -> CheckResult {
    if is_api_key_configured() {
        CheckResult::ok("OpenAI API key", "OPENAI_API_KEY is set")
    } else {
        CheckResult::error(
            "OpenAI API key",
            "OPENAI_API_KEY is not set",
            "export OPENAI_API_KEY=sk-... (https://platform.openai.com/api-keys)",
        )
    }
}

fn check_config_file() -> CheckResult {
    let path = Settings::default_config_path();
    if !path.exists() {
        return CheckResult::ok("Config file", "using built-in defaults");
    }

    match Settings::load_from(Some(&path)) {
        Ok(_) => CheckResult::ok("Config file", &format!("{}", path.display())),
        Err(e) => CheckResult::error(
            "Config file",
            &format!("failed to parse: {}", e),
            "run 'ekko config edit' to fix it",
        ),
    }
}

fn check_dir(name: &str, path: &std::path::Path) -> CheckResult {
    match std::fs::create_dir_all(path) {
        Ok(()) => CheckResult::ok(name, &format!("{}", path.display())),
        Err(e) => CheckResult::error(
            name,
            &format!("cannot create {}: {}", path.display(), e),
            "check permissions or change the path in config",
        ),
    }
}
