use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use contact_form::config::{self, ConfigError, ContactConfig};
use contact_form::{
    ContactFormController, Field, FieldUpdate, FormError, HttpSink, Notification, Notifier, TracingNotifier,
    ValidationError,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Field(#[from] ValidationError),
    #[error("{0}")]
    Form(#[from] FormError),
}

#[derive(Parser, Debug)]
#[command(name = "contact-form", about = "Submit a sales contact inquiry")]
struct Cli {
    /// Submission endpoint URL.
    #[arg(long, env = "CONTACT_ENDPOINT")]
    endpoint: Option<String>,

    #[arg(long, default_value = "")]
    first_name: String,

    #[arg(long, default_value = "")]
    last_name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    job_title: String,

    #[arg(long, default_value = "")]
    company_name: String,

    /// How we can help: "Evaluate Bird for my company", "Learn More", "Get a Quote", "Other".
    #[arg(long, default_value = "Learn More")]
    topic: String,

    /// Company size band: 1-10, 11-50, 51-200, 201-500, 501-1000, 1000+.
    #[arg(long, default_value = "1-10")]
    company_size: String,

    #[arg(long, default_value = "")]
    info: String,

    /// Agree to marketing communications.
    #[arg(long)]
    terms: bool,
}

impl Cli {
    fn raw_fields(&self) -> [(Field, &str); 8] {
        [
            (Field::FirstName, self.first_name.as_str()),
            (Field::LastName, self.last_name.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::JobTitle, self.job_title.as_str()),
            (Field::CompanyName, self.company_name.as_str()),
            (Field::Help, self.topic.as_str()),
            (Field::CompanySize, self.company_size.as_str()),
            (Field::Info, self.info.as_str()),
        ]
    }
}

fn flag_name(field: Field) -> String {
    match field {
        Field::Help => "topic".to_owned(),
        other => other.key().replace('_', "-"),
    }
}

/// Prints toasts to stderr and mirrors them into the log.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: &Notification) {
        TracingNotifier.notify(notification);
        eprintln!("{}: {}", notification.title, notification.description);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ContactConfig::from_env()?;
    if let Some(endpoint) = cli.endpoint.as_deref() {
        config.endpoint = config::parse_endpoint(endpoint)?;
    }

    let sink = HttpSink::from_config(&config)?;
    tracing::info!(endpoint = %sink.endpoint(), "contact form ready");

    let mut form = ContactFormController::new(Arc::new(sink), Arc::new(StderrNotifier));
    for (field, raw) in cli.raw_fields() {
        form.update_field(FieldUpdate::parse(field, raw)?)?;
    }
    form.update_field(FieldUpdate::Terms(cli.terms))?;

    if let Err(e) = form.submit().await {
        if let FormError::Invalid(errors) = &e {
            for (field, err) in errors.iter() {
                eprintln!("  --{}: {err}", flag_name(field));
            }
        }
        return Err(e.into());
    }

    if let Some(message) = form.confirmation() {
        println!("{message}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
