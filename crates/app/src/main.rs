use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use edu_core::Clock;
use edu_core::model::{EndpointsDraft, Locale, Session};
use services::{AppServices, CatalogService, EnrollmentService, SessionService, endpoints_from_env};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const ENV_DB_URL: &str = "EDU_DB_URL";
const ENV_LOCALE: &str = "EDU_LOCALE";
const ENV_LOG: &str = "EDU_LOG";
const DEFAULT_DB_URL: &str = "sqlite://edu.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLocale { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLocale { raw } => write!(f, "invalid --locale value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    locale: Locale,
    restored_session: Option<Session>,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn restored_session(&self) -> Option<Session> {
        self.restored_session.clone()
    }

    fn sessions(&self) -> Arc<SessionService> {
        self.services.sessions()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn enrollment(&self) -> Arc<EnrollmentService> {
        self.services.enrollment()
    }
}

struct Args {
    db_url: String,
    locale: Locale,
    endpoints: EndpointsDraft,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--db <sqlite_url>] [--locale <en|ru>] [--auth-url <url>] [--courses-url <url>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --locale en");
    eprintln!("  --auth-url / --courses-url: the hosted EduPlatform functions");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EDU_DB_URL, EDU_LOCALE, EDU_AUTH_URL, EDU_COURSES_URL, EDU_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var(ENV_DB_URL)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url(DEFAULT_DB_URL.into()), normalize_sqlite_url);
        let mut locale = locale_from_env();
        let mut flags = EndpointsDraft::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--locale" => {
                    let value = require_value(args, "--locale")?;
                    locale = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLocale { raw: value.clone() })?;
                }
                "--auth-url" => flags.auth_url = Some(require_value(args, "--auth-url")?),
                "--courses-url" => {
                    flags.courses_url = Some(require_value(args, "--courses-url")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            locale,
            endpoints: endpoints_from_env().merge(flags),
        })
    }
}

fn locale_from_env() -> Locale {
    let Ok(raw) = std::env::var(ENV_LOCALE) else {
        return Locale::default();
    };
    raw.parse().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring {ENV_LOCALE}");
        Locale::default()
    })
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| "info".into()))
        .with(log_fmt::layer())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    info!(db = %parsed.db_url, locale = %parsed.locale, "starting");

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, parsed.endpoints).await?;
    let restored_session = services.restore_session().await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        locale: parsed.locale,
        restored_session,
        services,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(context.strings().brand)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
