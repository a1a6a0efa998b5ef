//! Lenient HTML CLI
//!
//! Parses a file or an inline string, prints the node tree and every
//! recovered anomaly.

mod json;

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use lenient_common::{DiagnosticLog, DiagnosticSink, WarningSink, clear_warnings};
use lenient_html::{HtmlParser, ParserOptions, print_tree};
use lenient_js::BoaEvaluator;
use owo_colors::OwoColorize;

/// Lenient HTML - parse any markup into a tree without ever failing
#[derive(Parser, Debug)]
#[command(name = "lenient")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    lenient ./index.html

    # Parse inline HTML
    lenient --html '<p>one<p>two'

    # Machine-readable output
    lenient --json ./index.html

    # Run <?js ...?> instructions
    lenient --eval-scripts --html '<?js 6 * 7?>'
"#)]
struct Cli {
    /// Path to the HTML file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the tree and diagnostics as JSON
    #[arg(long)]
    json: bool,

    /// Evaluate `<?js` and `<?javascript` processing instructions
    #[arg(long)]
    eval_scripts: bool,

    /// Drop closing tags that match no open element instead of keeping them as text
    #[arg(long)]
    drop_unmatched: bool,

    /// Do not print diagnostics
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Read the input and name it for the script evaluator.
fn load_input(cli: &Cli) -> Result<(String, String)> {
    if let Some(html) = &cli.html {
        return Ok((html.clone(), lenient_html::scanner::DEFAULT_SOURCE_ID.to_string()));
    }
    let Some(path) = &cli.path else {
        bail!("either FILE or --html is required");
    };
    let html = fs::read_to_string(path)?;
    Ok((html, path.display().to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (html, source_id) = load_input(&cli)?;

    let options = ParserOptions::default()
        .with_source_id(source_id)
        .with_keep_unmatched_closing_tags(!cli.drop_unmatched);

    let mut evaluator = if cli.eval_scripts {
        Some(BoaEvaluator::new().map_err(|e| anyhow!("failed to start the JavaScript engine: {e}"))?)
    } else {
        None
    };

    // Colored warnings are printed as they are found; plain ones after the tree.
    let live_warnings = !cli.quiet && !cli.no_color && !cli.json;
    clear_warnings();
    let mut log = DiagnosticLog::new();
    let tree = {
        let mut warnings;
        let sink: &mut dyn DiagnosticSink = if live_warnings {
            warnings = WarningSink::forwarding_to(&mut log);
            &mut warnings
        } else {
            &mut log
        };
        let mut parser = HtmlParser::new(&html, sink).with_options(options);
        if let Some(evaluator) = evaluator.as_mut() {
            parser = parser.with_evaluator(evaluator);
        }
        parser.run()
    };

    if cli.json {
        let report = json::report_to_json(&tree, log.diagnostics());
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_tree(&tree, tree.root(), 0);

    if cli.quiet {
        return Ok(());
    }
    if !live_warnings {
        for diagnostic in log.diagnostics() {
            eprintln!("{diagnostic}");
        }
    }

    let summary = format!("{} diagnostic(s)", log.len());
    if cli.no_color {
        eprintln!("{summary}");
    } else if log.is_empty() {
        eprintln!("{}", summary.green());
    } else {
        eprintln!("{}", summary.yellow().bold());
    }
    Ok(())
}
