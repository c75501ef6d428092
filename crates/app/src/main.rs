use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use pulse_core::model::{AnswerKey, Question, Survey, SurveySettings};
use services::{Clock, SubmissionService};
use store::{DEFAULT_STORE_URL, HttpStore, ResponseStore, StoreConfig};
use ui::{App, UiApp, build_app_context};
use url::Url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStoreUrl { raw: String },
    InvalidDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStoreUrl { raw } => write!(f, "invalid --store-url value: {raw}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --delay-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    survey: Survey,
    settings: SurveySettings,
    answer_key: Arc<AnswerKey>,
    submissions: Arc<SubmissionService>,
}

impl UiApp for DesktopApp {
    fn survey(&self) -> Survey {
        self.survey.clone()
    }

    fn settings(&self) -> SurveySettings {
        self.settings
    }

    fn answer_key(&self) -> Arc<AnswerKey> {
        Arc::clone(&self.answer_key)
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }
}

struct Args {
    store_url: Url,
    delay_ms: u64,
    audit: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--store-url <url>] [--delay-ms <n>] [--no-audit]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --store-url {DEFAULT_STORE_URL}");
    eprintln!("  --delay-ms 1000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PULSE_STORE_URL, PULSE_DELAY_MS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut store_url = std::env::var("PULSE_STORE_URL")
            .ok()
            .and_then(|raw| Url::parse(&raw).ok());
        let mut delay_ms = std::env::var("PULSE_DELAY_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(1_000);
        let mut audit = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--store-url" => {
                    let value = require_value(args, "--store-url")?;
                    let parsed = Url::parse(&value)
                        .map_err(|_| ArgsError::InvalidStoreUrl { raw: value })?;
                    store_url = Some(parsed);
                }
                "--delay-ms" => {
                    let value = require_value(args, "--delay-ms")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDelay { raw: value.clone() })?;
                    if parsed == 0 {
                        return Err(ArgsError::InvalidDelay { raw: value });
                    }
                    delay_ms = parsed;
                }
                "--no-audit" => {
                    audit = false;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let store_url = match store_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_STORE_URL).map_err(|_| ArgsError::InvalidStoreUrl {
                raw: DEFAULT_STORE_URL.to_string(),
            })?,
        };

        Ok(Self {
            store_url,
            delay_ms,
            audit,
        })
    }
}

fn build_survey() -> Result<Survey, Box<dyn std::error::Error>> {
    let questions = vec![
        Question::yes_no("Do you believe the political system in Pakistan is improving?")?,
        Question::yes_no("Should military influence in Pakistan politics be reduced?")?,
        Question::yes_no("Is corruption the biggest challenge in Pakistan politics?")?,
        Question::yes_no("Do you think Pakistan needs electoral reforms?")?,
        Question::yes_no("Will Pakistan's economy improve with better political stability")?,
    ];
    Ok(Survey::new("Political Pulse", questions)?)
}

fn build_answer_key() -> Result<AnswerKey, Box<dyn std::error::Error>> {
    Ok(AnswerKey::new(vec!["Yes", "No", "Yes", "Yes", "No"])?)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let parsed = Args::parse(&mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let settings = SurveySettings::new(parsed.delay_ms, parsed.audit)?;
    let survey = build_survey()?;
    let answer_key = Arc::new(build_answer_key()?);

    let response_store: Arc<dyn ResponseStore> =
        Arc::new(HttpStore::new(StoreConfig::new(parsed.store_url)));
    let submissions = Arc::new(SubmissionService::new(
        Clock::default_clock(),
        response_store,
    ));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        survey,
        settings,
        answer_key,
        submissions,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Pulse")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
