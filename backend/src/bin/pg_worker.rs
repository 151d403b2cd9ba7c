//! Helper binary invoked by `pg_embedded_setup_unpriv` when tests run as root.
//!
//! The test harness locates this binary next to the test executables and
//! calls it with an operation plus the path of a JSON
//! [`WorkerPayload`](pg_embedded_setup_unpriv::worker::WorkerPayload)
//! describing the cluster settings and the environment to apply first.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Report, Result, eyre};
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Builder;

fn main() -> Result<()> {
    color_eyre::install()?;
    run_worker(env::args_os())
}

fn run_worker(mut args: impl Iterator<Item = OsString>) -> Result<()> {
    let _program = args.next();
    let operation = args
        .next()
        .ok_or_else(|| eyre!("missing operation argument"))
        .and_then(|raw| Operation::parse(&raw))?;
    let config_path = PathBuf::from(
        args.next()
            .ok_or_else(|| eyre!("missing config path argument"))?,
    );
    if let Some(extra) = args.next() {
        return Err(eyre!(
            "unexpected extra argument: {}; expected only operation and config path",
            extra.to_string_lossy()
        ));
    }

    let payload = load_payload(&config_path)?;
    execute(operation, payload)
}

fn load_payload(path: &Path) -> Result<WorkerPayload> {
    let raw = fs::read(path)
        .with_context(|| format!("failed to read worker config at {}", path.display()))?;
    serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse worker config at {}", path.display()))
}

fn execute(operation: Operation, payload: WorkerPayload) -> Result<()> {
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| Report::new(err).wrap_err("failed to rebuild postgres settings"))?;
    apply_environment(&payload.environment);

    match operation {
        Operation::Cleanup => return remove_dirs(&[settings.data_dir.as_path()]),
        Operation::CleanupFull => {
            return remove_dirs(&[
                settings.data_dir.as_path(),
                settings.installation_dir.as_path(),
            ]);
        }
        Operation::Setup | Operation::Start | Operation::Stop => {}
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build pg_worker runtime")?;
    let mut postgres = PostgreSQL::new(settings);
    runtime
        .block_on(async move {
            match operation {
                Operation::Setup => postgres.setup().await,
                Operation::Start => postgres.start().await,
                Operation::Stop | Operation::Cleanup | Operation::CleanupFull => {
                    postgres.stop().await
                }
            }
        })
        .with_context(|| format!("postgresql_embedded::{operation} failed"))
}

fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
    for (key, value) in environment {
        // SAFETY: runs before the runtime is built, while the process is single-threaded.
        match value {
            Some(secret) => unsafe { env::set_var(key, secret.expose()) },
            None => unsafe { env::remove_var(key) },
        }
    }
}

fn remove_dirs(dirs: &[&Path]) -> Result<()> {
    for dir in dirs {
        match fs::remove_dir_all(dir) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                return Err(Report::new(err).wrap_err(format!("failed to remove {}", dir.display())));
            }
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Setup,
    Start,
    Stop,
    Cleanup,
    CleanupFull,
}

impl Operation {
    fn parse(raw: &OsStr) -> Result<Self> {
        match raw.to_string_lossy().as_ref() {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "cleanup" => Ok(Self::Cleanup),
            "cleanup-full" => Ok(Self::CleanupFull),
            other => Err(eyre!(
                "unknown pg_worker operation '{other}'; valid operations are setup, start, stop, cleanup and cleanup-full"
            )),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Setup => "setup",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Cleanup => "cleanup",
            Self::CleanupFull => "cleanup-full",
        })
    }
}
