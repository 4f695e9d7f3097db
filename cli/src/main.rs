mod render;

use std::sync::Arc;

use adapters::config::BASE_URL_VAR;
use adapters::{ApiConfig, ApiError, BuilderController, HttpBuilderApi};
use builder::{Action, FormError, FormState, Outcome, Platform, find_template, template_names};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::Level;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ApiError),
    #[error("invalid form input: {0}")]
    Form(#[from] FormError),
    #[error("{0}")]
    ActionFailed(String),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "app-builder", about = "AI App Builder: describe an app, get features and code")]
struct Cli {
    /// Endpoint base URL [default: http://127.0.0.1:3000].
    #[arg(long, global = true, env = BASE_URL_VAR)]
    base_url: Option<String>,

    /// Print the final form as JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in project templates.
    Templates,
    /// Show the deployment checklist for a platform.
    Deploy {
        #[arg(long, default_value = "Vercel")]
        platform: Platform,
    },
    /// Ask the suggest-features endpoint for a feature list.
    Suggest {
        #[arg(long)]
        description: String,
    },
    /// Fill in the form and ask the generate-app endpoint for code.
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
struct FormArgs {
    /// Start from a named template (Blog, ECommerce).
    #[arg(long, value_parser = parse_template)]
    template: Option<String>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Feature text, applied to feature slots in order; extra values append slots.
    #[arg(long = "feature")]
    features: Vec<String>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    form: FormArgs,

    /// Replace the feature list with suggestions before generating.
    #[arg(long, default_value_t = false)]
    suggest: bool,

    /// Platform whose deployment checklist is printed after the code.
    #[arg(long, default_value = "Vercel")]
    platform: Platform,
}

#[derive(Debug, Clone)]
struct CliContext {
    json: bool,
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CliContext { json: cli.json, base_url: cli.base_url };

    match cli.command {
        Command::Templates => run_templates(&ctx),
        Command::Deploy { platform } => run_deploy(&ctx, platform),
        Command::Suggest { description } => run_suggest(&ctx, description).await,
        Command::Generate(args) => run_generate(&ctx, args).await,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_template(raw: &str) -> Result<String, String> {
    if find_template(raw).is_some() {
        return Ok(raw.to_owned());
    }
    let known = template_names().collect::<Vec<_>>().join(", ");
    Err(format!("unknown template '{raw}' (expected one of: {known})"))
}

/// Apply form flags the way a user would fill the page: template first,
/// then explicit fields, then features typed into successive slots.
fn apply_form_args(form: &mut FormState, args: &FormArgs) -> Result<(), FormError> {
    if let Some(template) = args.template.as_deref() {
        form.load_template(template);
    }
    if let Some(name) = &args.name {
        form.set_app_name(name.as_str());
    }
    if let Some(description) = &args.description {
        form.set_app_description(description.as_str());
    }
    for (index, feature) in args.features.iter().enumerate() {
        if index >= form.feature_list().len() {
            form.add_feature();
        }
        form.update_feature(index, feature.as_str())?;
    }
    Ok(())
}

/// Endpoint config is only resolved by commands that talk to the network,
/// so `templates` and `deploy` keep working with a broken environment.
/// The base URL comes from clap, which already merged the flag and env var.
fn api_config(ctx: &CliContext) -> Result<ApiConfig, CliError> {
    let config = ApiConfig::from_lookup(|key| if key == BASE_URL_VAR { None } else { std::env::var(key).ok() })?;
    match ctx.base_url.as_deref() {
        Some(base_url) => Ok(config.with_base_url(base_url)?),
        None => Ok(config),
    }
}

fn build_controller(ctx: &CliContext, form: FormState) -> Result<BuilderController, CliError> {
    let api = HttpBuilderApi::new(&api_config(ctx)?)?;
    Ok(BuilderController::with_form(Arc::new(api), form))
}

fn failure_error(form: &FormState, action: Action) -> CliError {
    match form.last_failure().filter(|f| f.action == action) {
        Some(failure) => CliError::ActionFailed(render::render_failure(failure)),
        None => CliError::ActionFailed(format!("{action} failed")),
    }
}

fn run_templates(ctx: &CliContext) -> Result<(), CliError> {
    if ctx.json {
        return print_json(&builder::TEMPLATES);
    }
    print!("{}", render::render_templates());
    Ok(())
}

fn run_deploy(ctx: &CliContext, platform: Platform) -> Result<(), CliError> {
    if ctx.json {
        let body = serde_json::json!({ "platform": platform, "steps": platform.steps() });
        print_json(&body)?;
    } else {
        print!("{}", render::render_deployment_steps(platform));
    }
    Ok(())
}

async fn run_suggest(ctx: &CliContext, description: String) -> Result<(), CliError> {
    let mut form = FormState::new();
    form.set_app_description(description);
    let mut controller = build_controller(ctx, form)?;

    let outcome = controller.suggest_features().await;
    let form = controller.into_form();
    print_form(ctx, &form)?;
    if outcome == Outcome::Failed {
        return Err(failure_error(&form, Action::SuggestFeatures));
    }
    Ok(())
}

async fn run_generate(ctx: &CliContext, args: GenerateArgs) -> Result<(), CliError> {
    let mut form = FormState::new();
    apply_form_args(&mut form, &args.form)?;
    form.set_platform(args.platform);
    let mut controller = build_controller(ctx, form)?;

    if args.suggest && controller.suggest_features().await == Outcome::Failed {
        let form = controller.into_form();
        print_form(ctx, &form)?;
        return Err(failure_error(&form, Action::SuggestFeatures));
    }

    let outcome = controller.generate_app().await;
    let form = controller.into_form();
    print_form(ctx, &form)?;
    if !ctx.json {
        println!();
        print!("{}", render::render_deployment_steps(form.platform()));
    }
    if outcome == Outcome::Failed {
        return Err(failure_error(&form, Action::GenerateApp));
    }
    Ok(())
}

fn print_form(ctx: &CliContext, form: &FormState) -> Result<(), CliError> {
    if ctx.json {
        return print_json(form);
    }
    print!("{}", render::render_form(form));
    if let Some(code) = render::render_generated_code(form) {
        println!();
        print!("{code}");
    }
    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
