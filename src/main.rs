use clap::{Parser, Subcommand};
use std::path::Path;

mod dataset;
mod diff;
mod errors;
mod render;
mod session;

pub type Result<T> = anyhow::Result<T>;

use dataset::Slot;
use dataset::edit::GroupEdit;
use session::Session;

#[derive(Parser)]
#[command(name = "dataflow-diff")]
#[command(
    about = "Compare per-entity data-flow records between two project datasets",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the flattened rows of a single dataset.
    Show {
        #[arg(long)]
        file: String,

        #[arg(long, value_enum, default_value_t = Slot::X)]
        slot: Slot,
    },

    /// Compare project X against project Y and print the differences.
    Compare {
        #[arg(long)]
        x: String,

        #[arg(long)]
        y: String,

        /// Print the diff entries as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Write a self-contained HTML report with differing cells highlighted.
    Report {
        #[arg(long)]
        x: String,

        #[arg(long)]
        y: String,

        #[arg(short = 'o', long)]
        out: String,
    },

    /// Replace a record's consumed/received value lists and write the result.
    ///
    /// Lists are comma separated; elements are trimmed. An empty string
    /// clears the group. With neither list given, prints the record's
    /// current flattened values instead of writing.
    Edit {
        #[arg(long)]
        file: String,

        #[arg(long, value_enum, default_value_t = Slot::X)]
        slot: Slot,

        #[arg(long)]
        key: String,

        #[arg(long)]
        consumed: Option<String>,

        #[arg(long)]
        received: Option<String>,

        /// Output path; defaults to rewriting the input file.
        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Normalize both documents and export project-x.json / project-y.json.
    Export {
        #[arg(long)]
        x: String,

        #[arg(long)]
        y: String,

        #[arg(long, default_value = ".")]
        out_dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Show { file, slot } => {
            let mut session = Session::new();
            session.load_file(slot, &file)?;

            let rows = dataset::display_rows(session.dataset(slot));
            if rows.is_empty() {
                println!("Project {}: no records", slot);
                return Ok(());
            }

            let key_width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);
            for row in rows {
                println!(
                    "{:key_width$}  consumed: {}  received: {}",
                    row.key, row.consumed, row.received
                );
            }
        }

        Commands::Compare { x, y, json } => {
            // 1) Load both slots (a parse failure aborts before any output).
            let mut session = Session::new();
            session.load_file(Slot::X, &x)?;
            session.load_file(Slot::Y, &y)?;

            // 2) Compute the diff and print it.
            let report = session.compare();
            if json {
                println!("{}", serde_json::to_string_pretty(report.entries())?);
            } else if report.entries().is_empty() {
                println!("No differences.");
            } else {
                for entry in report.entries() {
                    println!("{}", entry.key);
                    println!(
                        "  consumed: X {:?}  Y {:?}",
                        entry.x_consumed, entry.y_consumed
                    );
                    println!(
                        "  received: X {:?}  Y {:?}",
                        entry.x_received, entry.y_received
                    );
                }
                println!("{} difference(s)", report.entries().len());
            }
        }

        Commands::Report { x, y, out } => {
            // 1) Load both slots.
            let mut session = Session::new();
            session.load_file(Slot::X, &x)?;
            session.load_file(Slot::Y, &y)?;

            // 2) Diff.
            session.compare();

            // 3) Render HTML.
            let data = render::build_report_data(&session);
            let html = render::render_html_report(&data)?;
            std::fs::write(&out, html)?;
            println!("Wrote {}", out);
        }

        Commands::Edit {
            file,
            slot,
            key,
            consumed,
            received,
            out,
        } => {
            let mut session = Session::new();
            session.load_file(slot, &file)?;

            if consumed.is_none() && received.is_none() {
                let preview = session.replacement_preview(slot, &key)?;
                println!("consumed: {}", preview.consumed);
                println!("received: {}", preview.received);
                return Ok(());
            }

            let consumed = consumed
                .as_deref()
                .map(GroupEdit::from_comma_list)
                .unwrap_or(GroupEdit::Keep);
            let received = received
                .as_deref()
                .map(GroupEdit::from_comma_list)
                .unwrap_or(GroupEdit::Keep);

            session.apply_edit(slot, &key, consumed, received)?;

            let out = out.unwrap_or(file);
            session.export_slot(slot, Path::new(&out))?;
            println!("Wrote {}", out);
        }

        Commands::Export { x, y, out_dir } => {
            let mut session = Session::new();
            session.load_file(Slot::X, &x)?;
            session.load_file(Slot::Y, &y)?;

            for path in session.export(Path::new(&out_dir))? {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}
