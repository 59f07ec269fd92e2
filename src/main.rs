use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;

use mayalok::config::{ConfigError, FormConfig};
use mayalok::form::{
    Category, FormClient, FormModel, FormState, FormSubmission, SubmitError, SubmitRejected, TalentApplication,
};
use mayalok::motion;
use mayalok::particles::{CountingSurface, FrameHost, FrameId, ParticleNetwork};
use mayalok::site::SiteConfig;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Client(#[from] SubmitError),
    #[error("submission not sent: {0}")]
    Rejected(#[from] SubmitRejected),
    #[error("provider did not accept the submission")]
    Failed,
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mayalok", about = "Mayalok Ventures site tooling: form smoke tests and headless particle runs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and post a form to the configured provider.
    Submit(SubmitCommand),
    /// Run the particle network headless and report draw counts.
    Particles(ParticlesCommand),
    /// Print the site configuration as JSON.
    Site,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormKind {
    Contact,
    Pitch,
    Talent,
}

#[derive(Args, Debug)]
struct SubmitCommand {
    #[arg(value_enum)]
    kind: FormKind,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
    #[arg(long, default_value = "")]
    linkedin: String,
    #[arg(long, default_value = "")]
    expertise: String,
    /// Endpoint id to post to instead of the configured one.
    #[arg(long)]
    endpoint: Option<String>,
}

#[derive(Args, Debug)]
struct ParticlesCommand {
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
    #[arg(long, default_value_t = 720.0)]
    height: f64,
    #[arg(long, default_value_t = 600)]
    frames: u64,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Submit(cmd) => run_submit(cmd).await,
        Command::Particles(cmd) => {
            run_particles(&cmd);
            Ok(())
        }
        Command::Site => run_site(),
    }
}

async fn run_submit(cmd: SubmitCommand) -> Result<(), CliError> {
    let config = FormConfig::from_env()?;
    let client = FormClient::from_config(&config)?;

    let succeeded = match cmd.kind {
        FormKind::Contact | FormKind::Pitch => {
            let category = if cmd.kind == FormKind::Pitch { Category::Pitch } else { Category::Contact };
            let endpoint = cmd.endpoint.unwrap_or_else(|| config.endpoint_for(category).to_owned());
            let form = FormSubmission::new(cmd.name, cmd.email, cmd.message, category);
            submit_and_print(FormState::new(form), &client, &endpoint).await?
        }
        FormKind::Talent => {
            let endpoint = cmd.endpoint.unwrap_or_else(|| config.talent_endpoint().to_owned());
            let application = TalentApplication {
                name: cmd.name,
                email: cmd.email,
                linkedin: cmd.linkedin,
                expertise: cmd.expertise,
                message: cmd.message,
            };
            submit_and_print(FormState::new(application), &client, &endpoint).await?
        }
    };

    if succeeded { Ok(()) } else { Err(CliError::Failed) }
}

async fn submit_and_print<M>(mut form: FormState<M>, client: &FormClient, endpoint: &str) -> Result<bool, CliError>
where
    M: FormModel + mayalok::form::Submittable,
{
    match form.submit(client, endpoint).await {
        Ok(outcome) => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
            Ok(outcome.succeeded)
        }
        Err(SubmitRejected::Invalid(validation)) => {
            println!("{}", serde_json::to_string_pretty(&validation)?);
            Err(SubmitRejected::Invalid(validation).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Host that never fires on its own; the CLI pumps frames in a loop.
#[derive(Default)]
struct ManualHost {
    next_id: i32,
}

impl FrameHost for ManualHost {
    fn request_frame(&mut self) -> Option<FrameId> {
        self.next_id += 1;
        Some(FrameId(self.next_id))
    }

    fn cancel_frame(&mut self, _id: FrameId) {}

    fn watch_resize(&mut self) -> bool {
        false
    }

    fn unwatch_resize(&mut self) {}
}

fn run_particles(cmd: &ParticlesCommand) {
    let surface = CountingSurface::new(cmd.width, cmd.height);
    let mut network = ParticleNetwork::new(surface, ManualHost::default(), &mut rand::rng());
    network.start();
    while network.frames_drawn() < cmd.frames {
        network.on_frame();
    }

    let stats = network.surface().clone();
    network.stop();
    #[allow(clippy::cast_precision_loss)]
    let per_frame = |n: usize| n as f64 / stats.clears.max(1) as f64;
    tracing::info!(frames = stats.clears, "particle run complete");
    println!(
        "frames={} circles/frame={:.1} lines/frame={:.1} accent lines/frame={:.1}",
        stats.clears,
        per_frame(stats.circles),
        per_frame(stats.lines),
        per_frame(stats.accent_lines),
    );
}

fn run_site() -> Result<(), CliError> {
    let site = SiteConfig::global();
    let out = json!({
        "metadata": site.metadata,
        "navigation": site.navigation,
        "ventures": site.ventures,
        "delays": site.delays,
        "forms": {
            "baseUrl": site.forms.base_url,
            "contactFormId": site.forms.contact_form_id,
            "pitchFormId": site.forms.pitch_form_id,
        },
        "motion": {
            "fadeUp": motion::fade_up(0.0),
            "scaleIn": motion::scale_in(),
            "slideIn": motion::slide_in(),
            "staggerContainer": motion::stagger_container(),
            "cardHover": motion::card_hover(),
            "pageTransition": motion::page_transition(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
