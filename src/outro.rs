//! Next-step instructions printed after a successful run.

use std::fmt;
use std::path::Path;

use console::style;

/// Package manager the user is running the tool with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Detects the package manager from an `npm_config_user_agent` value.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("pnpm") {
            PackageManager::Pnpm
        } else if user_agent.contains("yarn") {
            PackageManager::Yarn
        } else if user_agent.contains("bun") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    /// Detects the package manager from the environment.
    pub fn detect() -> Self {
        Self::from_user_agent(&std::env::var("npm_config_user_agent").unwrap_or_default())
    }

    /// Shell command running `script` (or `install`/`build`) with this package manager.
    pub fn command(&self, script: &str, args: Option<&str>) -> String {
        match (script, args) {
            ("install", _) if *self == PackageManager::Yarn => "yarn".to_string(),
            ("install", _) => format!("{self} install"),
            ("build", _) if matches!(self, PackageManager::Npm | PackageManager::Bun) => {
                format!("{self} run build")
            }
            ("build", _) => format!("{self} build"),
            (script, Some(args)) if *self == PackageManager::Npm => {
                format!("npm run {script} -- {args}")
            }
            (script, Some(args)) => format!("{self} {script} {args}"),
            (script, None) if *self == PackageManager::Npm => format!("npm run {script}"),
            (script, None) => format!("{self} {script}"),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        })
    }
}

/// Commands the user should run next, unstyled.
///
/// `suggest_git_init` adds a `git init` step, needed before git hooks can be installed.
pub fn next_steps(
    root: &Path,
    cwd: &Path,
    manager: PackageManager,
    suggest_git_init: bool,
) -> Vec<String> {
    let mut steps = Vec::new();
    if root != cwd {
        let relative = root.strip_prefix(cwd).unwrap_or(root).display().to_string();
        if relative.contains(' ') {
            steps.push(format!("cd \"{relative}\""));
        } else {
            steps.push(format!("cd {relative}"));
        }
    }
    if suggest_git_init {
        steps.push("git init".to_string());
    }
    steps.push(manager.command("install", None));
    steps.push(manager.command("lint:fix", None));
    steps.push(manager.command("dev", None));
    steps
}

/// Full outro message with styled commands.
pub fn outro_message(steps: &[String]) -> String {
    let mut message = String::from("Project created. Next steps:\n\n");
    for step in steps {
        message.push_str(&format!("   {}\n", style(step).bold().green()));
    }
    message
}
