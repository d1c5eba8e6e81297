//! pkgscaffold's entry point. Parses the command line, collects answers and
//! runs the generation pipeline.

use pkgscaffold::{
    cli::{get_args, Args},
    config::Settings,
    error::{default_error_handler, Result},
    logger::init_logger,
    parser::{get_answers, get_answers_from},
    processor::generate,
    prompt::DialoguerPrompter,
    registry::{CachedRegistry, NpmRegistry},
    template::{TemplateSet, TemplateSource},
};

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
/// 1. Derives settings and loads the template set
/// 2. Collects answers (stdin document first, then prompts)
/// 3. Resolves dependency versions and builds the scaffold tree
/// 4. Writes the tree below the current directory
fn run(args: Args) -> Result<()> {
    let settings = Settings::from_args(&args)?;
    let templates = TemplateSet::load(&TemplateSource::from(settings.templates.clone()))?;

    let prompt = DialoguerPrompter::new();
    let preloaded = get_answers_from(args.stdin)?;
    let choices = get_answers(&prompt, preloaded, settings.platform)?;

    println!("Get dependency version...");
    let registry = CachedRegistry::new(NpmRegistry::new(settings.registry_command.as_str()));
    let root = generate(&choices, &templates, &registry, &settings.output_parent)?;

    log::debug!("Scaffold written to {}", root.display());
    println!("Done.");
    Ok(())
}
