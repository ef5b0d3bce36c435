//! Kestrel CLI
//!
//! Parses a CSS declaration block, computes it against an optional parent
//! block and prints the computed values and collapsed margins.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use kestrel_common::warning::{clear_warnings, take_warnings};
use kestrel_css::layout::{LayoutContext, LayoutTree, MarginEdge, collapse_margins};
use kestrel_css::{BoxProperties, PropertyName, apply_declaration, parse_declaration_block};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

/// Kestrel: inspect how CSS declarations parse and compute
#[derive(Parser, Debug)]
#[command(name = "kestrel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Expand a shorthand
    kestrel 'margin: 1px 2px; display: inline-block'

    # Resolve inherit against a parent block
    kestrel --parent 'color: red; margin-top: 3em' 'color: inherit; margin-top: inherit'

    # Read declarations from a file and print JSON
    kestrel --file box.css --json
")]
struct Cli {
    /// Declaration block, e.g. "margin: 1px 2px; color: red"
    #[arg(value_name = "DECLARATIONS")]
    declarations: Option<String>,

    /// Read the declaration block from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "declarations")]
    file: Option<PathBuf>,

    /// Declaration block for the parent box, the source of inherited values
    #[arg(long, value_name = "DECLARATIONS")]
    parent: Option<String>,

    /// Font size in px that em and ex units resolve against
    #[arg(long, default_value = "16")]
    em_size: f32,

    /// Print the token stream of each declaration
    #[arg(long)]
    tokens: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let text = if let Some(ref path) = cli.file {
        fs::read_to_string(path)?
    } else if let Some(ref declarations) = cli.declarations {
        declarations.clone()
    } else {
        anyhow::bail!("expected a declaration block or --file");
    };

    if cli.tokens {
        print_tokens(&text);
    }

    clear_warnings();
    let parent = styled(cli.parent.as_deref().unwrap_or("display: block"));
    let mut tree = LayoutTree::new(parent);
    let element = tree.append_child(LayoutTree::ROOT, styled(&text));
    tree.resolve(&LayoutContext::with_em_size(cli.em_size));
    let margins = collapse_margins(&tree);
    let rejected = take_warnings();

    let properties = &tree.node(element).properties;
    if cli.json {
        let report = serde_json::json!({
            "properties": properties,
            "margins": margins,
            "rejected": rejected,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_properties(properties);
        print_margins(&margins);
        if !rejected.is_empty() {
            println!("\n=== Rejected ===");
            for message in &rejected {
                println!("  - {message}");
            }
        }
    }
    Ok(())
}

/// Apply every declaration in `text` to a fresh record.
fn styled(text: &str) -> BoxProperties {
    let mut props = BoxProperties::new();
    for (name, tokens) in parse_declaration_block(text) {
        let _ = apply_declaration(&mut props, &name, &tokens);
    }
    props
}

fn print_tokens(text: &str) {
    println!("=== Tokens ===");
    for (name, tokens) in parse_declaration_block(text) {
        println!("{}", name.bold());
        for token in &tokens {
            println!("  {token:?}");
        }
    }
    println!();
}

fn print_properties(properties: &BoxProperties) {
    println!("=== Computed Values ===");
    let initial = {
        let mut initial = BoxProperties::new();
        initial.compute(None);
        initial
    };
    for name in PropertyName::iter().filter(|name| !name.is_shorthand()) {
        let Some(value) = properties.get(name) else {
            continue;
        };
        if initial.get(name).as_ref() == Some(&value) {
            println!("  {}: {}", name.dimmed(), value.dimmed());
        } else {
            println!("  {}: {}", name.cyan(), value.green());
        }
    }
}

fn print_margins(margins: &[MarginEdge]) {
    println!("\n=== Collapsed Margins ===");
    for edge in margins {
        if edge.is_collapsed() {
            println!("  {}", edge.yellow());
        } else {
            println!("  {edge}");
        }
    }
}
