//! Reachout library crate
//!
//! This crate holds the contact actions of a personal landing page and the
//! `reachout` CLI that drives them. It is organized into small modules:
//! `link` (messaging and mail links), `clipboard` (clipboard access and the
//! copy action), `feedback` (the transient "Copied" indicator), `motion`
//! (reduced-motion preference observer), `notify` (toasts), `session`
//! (one UI session's actions), `contact` and `config` (static identity and
//! runtime configuration). The binary `src/main.rs` calls
//! `reachout_lib::run()`.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod config;
pub mod contact;
pub mod error;
pub mod feedback;
pub mod link;
pub mod motion;
pub mod notify;
pub mod session;

use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::clipboard::{CopyOutcome, SystemClipboard};
use crate::config::RuntimeConfig;
use crate::contact::{CopyKind, TRAINING_SUBJECT};
use crate::feedback::{FeedbackState, TransientFeedback};
use crate::link::{format_mailto_link, format_messaging_link};
use crate::motion::{EnvPreference, ReducedMotionObserver};
use crate::notify::{Severity, Toaster};
use crate::session::ContactSession;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the WhatsApp link with the pre-filled message
    Link {
        /// Phone number in E.164 format (defaults to the configured one)
        #[arg(long = "phone")]
        phone: Option<String>,

        /// Message to pre-fill (defaults to the configured one)
        #[arg(short = 'm', long = "message")]
        message: Option<String>,
    },
    /// Print a mailto link for the configured email
    Mailto {
        /// Subject line
        #[arg(long = "subject", conflicts_with = "training")]
        subject: Option<String>,

        /// Use the corporate training inquiry subject
        #[arg(long = "training", action = ArgAction::SetTrue)]
        training: bool,
    },
    /// Copy the email address or WhatsApp number to the clipboard
    Copy {
        /// What to copy: email or whatsapp
        kind: CopyKind,

        /// Keep running until the "Copied" indicator clears
        #[arg(long = "wait", action = ArgAction::SetTrue)]
        wait: bool,
    },
    /// Print the contact card: links, messaging link and motion preference
    Card,
}

/// Run the Reachout CLI.
///
/// Parses arguments, loads [`RuntimeConfig`] from the environment and
/// dispatches. Configuration errors are printed to stderr and exit with a
/// non-zero code. A failed clipboard copy is only a warning.
///
/// Behavior summary:
/// - `link`: print the messaging deep link.
/// - `mailto`: print a mailto link, optionally with a subject.
/// - `copy`: copy a contact field and report it like the page's toast.
/// - `card`: print every destination plus the reduced-motion setting.
///
/// Example:
///
/// ```no_run
/// reachout_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    init_logging();
    let cli = Cli::parse();
    let config = RuntimeConfig::from_env().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    match cli.command {
        Commands::Link { phone, message } => {
            let phone = phone.unwrap_or_else(|| config.identity.phone_e164.clone());
            let message = message.unwrap_or_else(|| config.message.clone());
            println!("{}", format_messaging_link(&phone, &message));
        }
        Commands::Mailto { subject, training } => {
            let subject = if training {
                Some(TRAINING_SUBJECT.to_string())
            } else {
                subject
            };
            println!(
                "{}",
                format_mailto_link(&config.identity.email, subject.as_deref())
            );
        }
        Commands::Copy { kind, wait } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap_or_else(|e| {
                    eprintln!("error: failed to start runtime: {}", e);
                    std::process::exit(1);
                });
            runtime.block_on(copy_command(config, kind, wait));
        }
        Commands::Card => print_card(&config),
    }
}

async fn copy_command(config: RuntimeConfig, kind: CopyKind, wait: bool) {
    let (toaster, mut toasts) = Toaster::channel();
    let feedback = TransientFeedback::new(config.feedback_delay);
    let mut session = ContactSession::new(config.identity, SystemClipboard, feedback, toaster);
    let mut indicator = session.watch_feedback();

    let outcome = session.copy(kind).await;

    while let Ok(toast) = toasts.try_recv() {
        match toast.severity {
            Severity::Normal => println!("{}: {}", toast.title, toast.description),
            Severity::Destructive => {
                eprintln!("warning: {}: {}", toast.title, toast.description)
            }
        }
    }

    if let CopyOutcome::Copied(_) = outcome
        && wait
    {
        println!("[Copied!]");
        while *indicator.borrow_and_update() != FeedbackState::Idle {
            if indicator.changed().await.is_err() {
                break;
            }
        }
        println!("[ ]");
    }
}

fn print_card(config: &RuntimeConfig) {
    let observer = ReducedMotionObserver::mount(Arc::new(EnvPreference::from_env()));
    let fade = observer.fade_up();

    println!("Email: {}", config.identity.email);
    println!("Phone: {}", config.identity.phone_e164);
    println!(
        "WhatsApp: {}",
        format_messaging_link(&config.identity.phone_e164, &config.message)
    );
    for (label, url) in config.links.entries() {
        println!("{}: {}", label, url);
    }
    println!("Reduced motion: {}", observer.get());
    println!("Fade-up offset: {}px", fade.hidden.y);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
