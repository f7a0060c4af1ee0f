//! # Advisory Receipt CLI
//!
//! Command-line interface for rendering and printing advisory receipts.
//!
//! ## Usage
//!
//! ```bash
//! # Serve print-ready pages
//! advisory-receipt serve --listen 0.0.0.0:8080
//!
//! # Render a receipt to a file
//! advisory-receipt render --layout roll --query 'problem_name_en=Blast' -o receipt.html
//!
//! # Render and send to the system printer after the print delay
//! advisory-receipt print --layout label --query 'category=Fungal' --printer kiosk-80mm
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use advisory_receipt::{
    ReceiptError,
    clock::{Clock, SystemClock},
    page::{self, PageOptions},
    print::{CommandAction, PrintTrigger, TriggerState},
    query,
    server::{self, ServerConfig},
    view::{Branding, DEFAULT_CONTACT, DEFAULT_LOGO_URL, DEFAULT_THANK_YOU, Layout},
};

/// Advisory Receipt - printable crop advisories for 80mm printers
#[derive(Parser, Debug)]
#[command(name = "advisory-receipt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve receipt pages over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Delay before the print dialog opens, in milliseconds
        #[arg(long, default_value_t = 800)]
        print_delay_ms: u64,

        /// Do not open the print dialog automatically (preview mode)
        #[arg(long)]
        no_auto_print: bool,

        #[command(flatten)]
        branding: BrandingArgs,
    },

    /// Render a receipt page to stdout or a file
    Render {
        /// Receipt layout: label or roll
        #[arg(long, default_value = "label", value_parser = Layout::parse)]
        layout: Layout,

        /// Query string (with or without the leading '?')
        #[arg(long, default_value = "")]
        query: String,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Embed the auto-print script
        #[arg(long)]
        auto_print: bool,

        #[command(flatten)]
        branding: BrandingArgs,
    },

    /// Render a receipt and hand it to a system print command
    Print {
        /// Receipt layout: label or roll
        #[arg(long, default_value = "label", value_parser = Layout::parse)]
        layout: Layout,

        /// Query string (with or without the leading '?')
        #[arg(long, default_value = "")]
        query: String,

        /// Where to write the rendered page (defaults to the temp directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Printer name passed to `lp -d`
        #[arg(long)]
        printer: Option<String>,

        /// Delay before printing, in milliseconds
        #[arg(long, default_value_t = 800)]
        delay_ms: u64,

        #[command(flatten)]
        branding: BrandingArgs,
    },
}

#[derive(Args, Debug)]
struct BrandingArgs {
    /// Logo image URL
    #[arg(long, default_value = DEFAULT_LOGO_URL)]
    logo_url: String,

    /// Footer thank-you line
    #[arg(long, default_value = DEFAULT_THANK_YOU)]
    thank_you: String,

    /// Footer contact line
    #[arg(long, default_value = DEFAULT_CONTACT)]
    contact: String,
}

impl From<BrandingArgs> for Branding {
    fn from(args: BrandingArgs) -> Self {
        Self {
            logo_url: args.logo_url,
            thank_you: args.thank_you,
            contact: args.contact,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("advisory_receipt=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ReceiptError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            print_delay_ms,
            no_auto_print,
            branding,
        } => {
            server::serve(ServerConfig {
                listen_addr: listen,
                print_delay: Duration::from_millis(print_delay_ms),
                auto_print: !no_auto_print,
                branding: branding.into(),
            })
            .await?;
        }

        Commands::Render {
            layout,
            query,
            output,
            auto_print,
            branding,
        } => {
            let options = PageOptions {
                branding: branding.into(),
                print_delay: auto_print.then_some(PrintTrigger::DEFAULT_DELAY),
            };
            let html = page::render_query(&query, layout, SystemClock::new().now(), &options);

            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    tracing::info!(path = %path.display(), layout = layout.name(), "receipt written");
                }
                None => println!("{}", html),
            }
        }

        Commands::Print {
            layout,
            query,
            output,
            printer,
            delay_ms,
            branding,
        } => {
            let record = query::decode(&query, SystemClock::new().now());
            let options = PageOptions {
                branding: branding.into(),
                print_delay: None,
            };
            let html = page::render_page(&record, layout, &options);

            let path = output.unwrap_or_else(|| {
                std::env::temp_dir().join(format!("{}.html", file_stem(&record.receipt_id)))
            });
            std::fs::write(&path, html)?;
            tracing::info!(path = %path.display(), "receipt written");

            let action = CommandAction::lp(&path, printer.as_deref());
            let mut handle = PrintTrigger::new(Duration::from_millis(delay_ms)).schedule(action);

            tokio::select! {
                result = handle.finished() => {
                    if result? == TriggerState::Triggered {
                        println!("Sent {} to the printer", path.display());
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::warn!("interrupted, print cancelled");
                }
            }
        }
    }

    Ok(())
}

/// Receipt ids come from the query string; keep only filename-safe characters.
fn file_stem(receipt_id: &str) -> String {
    receipt_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
