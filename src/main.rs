//! Entry point of `create-kits`.
//! Collects the project description, then hands it to the bootstrapper.

use console::style;
use kits::{
    bootstrap::Bootstrapper,
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    feature::Feature,
    logger::init_logger,
    outro::{next_steps, outro_message, PackageManager},
    prompt::{collect_project_spec, DialoguerPrompter, PresetAnswers},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template root configuration
/// 2. Collects the project spec, prompting for anything not given on the command line
/// 3. Scaffolds the project
/// 4. Prints the next steps
fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = get_config(&args.template_dir)?;

    println!("{}\n", style(&config.banner).magenta().bold());

    let prompt = DialoguerPrompter::new();
    let preset = PresetAnswers {
        features: args.feature_set(),
        target_dir: args.target_dir,
        force: args.force,
    };
    let spec = collect_project_spec(&prompt, preset, &config.default_project_name, &cwd)?;

    let engine = MiniJinjaRenderer::new();
    let mut bootstrapper = Bootstrapper::new(&args.template_dir, &config, &engine);
    println!("\nScaffolding project in {}...", spec.root(&cwd).display());
    let report = bootstrapper.run(&spec, &cwd)?;

    let suggest_git_init =
        spec.features.contains(Feature::SimpleGitHooks) && !report.has_git_directory;
    let steps = next_steps(&report.root, &cwd, PackageManager::detect(), suggest_git_init);
    println!("\n{}", outro_message(&steps));
    Ok(())
}
