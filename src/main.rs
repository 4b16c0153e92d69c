//! folio - rich-text document to page transform

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use folio::{DescriptionCapacity, PartitionOptions, RichDoc, partition_with, render_node};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Transform rich-text documents into HTML pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio doc.json                     Partition into a page (JSON on stdout)
    folio doc.json --page-id p42       Use p42 as the section id prefix
    folio doc.json --render-only       Emit concatenated HTML fragments
    cat doc.json | folio -             Read the document from stdin")]
struct Cli {
    /// Input document JSON file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Page id used as the section id prefix
    #[arg(long, default_value = "page")]
    page_id: String,

    /// Keep all pre-heading content in the description section
    #[arg(long)]
    unbounded_description: bool,

    /// Emit rendered HTML fragments instead of the page JSON
    #[arg(long)]
    render_only: bool,

    /// Pretty-print the page JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = read_input(&cli.input)?;
    let doc = folio::parse_document(&json).map_err(|e| e.to_string())?;

    if cli.render_only {
        render(&doc);
        return Ok(());
    }

    let options = PartitionOptions {
        description_capacity: if cli.unbounded_description {
            DescriptionCapacity::Unbounded
        } else {
            DescriptionCapacity::SingleNode
        },
    };
    let page = partition_with(&doc, &cli.page_id, options);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&page)
    } else {
        serde_json::to_string(&page)
    };
    println!("{}", output.map_err(|e| e.to_string())?);

    Ok(())
}

fn render(doc: &RichDoc) {
    for node in &doc.content {
        let html = render_node(node);
        if !html.trim().is_empty() {
            println!("{html}");
        }
    }
}

fn read_input(input: &str) -> Result<String, String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| e.to_string())?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).map_err(|e| format!("{input}: {e}"))
    }
}
