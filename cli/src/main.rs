//! Skyroute CLI: command-line front end for the route analyzer
//!
//! Loads one of the bundled route datasets and answers connectivity and
//! shortest-route questions about it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde_json::json;
use skyroute::algo::format_route;
use skyroute::{Dataset, RouteAnalyzer};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "skyroute", version, about = "Airport route analyzer")]
struct Cli {
    /// Bundled dataset to analyze
    #[arg(long, default_value = "indian", global = true, env = "SKYROUTE_DATASET")]
    dataset: DatasetArg,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DatasetArg {
    /// 16 airports, 19 routes
    Indian,
    /// 9 airports, 12 routes
    Core,
}

impl From<DatasetArg> for Dataset {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Indian => Dataset::Indian,
            DatasetArg::Core => Dataset::Core,
        }
    }
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Show airport, route and component counts
    Summary,
    /// List airports with the component each belongs to
    Airports,
    /// List routes with the components of both ends
    Routes,
    /// List strongly connected components
    Scc,
    /// Check whether two airports are in the same strongly connected component
    SameScc {
        /// First airport code
        a: String,
        /// Second airport code
        b: String,
    },
    /// Find the route with the fewest hops between two airports
    Path {
        /// Departure airport code
        from: String,
        /// Arrival airport code
        to: String,
    },
    /// Start an interactive shell
    Shell,
}

fn main() {
    // Logs go to stderr so stdout stays parseable as JSON/CSV
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let network = Dataset::from(cli.dataset).load()?;
    let analyzer = RouteAnalyzer::new(network)?;
    let mut out = io::stdout().lock();

    match &cli.command {
        Commands::Summary => run_summary(&analyzer, &cli.format, &mut out),
        Commands::Airports => run_airports(&analyzer, &cli.format, &mut out),
        Commands::Routes => run_routes(&analyzer, &cli.format, &mut out),
        Commands::Scc => run_scc(&analyzer, &cli.format, &mut out),
        Commands::SameScc { a, b } => run_same_scc(&analyzer, a, b, &cli.format, &mut out),
        Commands::Path { from, to } => run_path(&analyzer, from, to, &cli.format, &mut out),
        Commands::Shell => run_shell(&analyzer, &cli.format, io::stdin().lock(), &mut out),
    }
}

/// Airport codes are stored upper-case; accept any case on input
fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

fn run_summary(analyzer: &RouteAnalyzer, format: &OutputFormat, out: &mut impl Write) -> Result<()> {
    let summary = analyzer.summary();

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "airports,routes,components,connected_groups,largest_component")?;
            writeln!(
                out,
                "{},{},{},{},{}",
                summary.airports,
                summary.routes,
                summary.components,
                summary.connected_groups,
                csv_field(&summary.largest_component.join(" "))
            )?;
        }
        OutputFormat::Table => {
            writeln!(out, "Airports:          {}", summary.airports)?;
            writeln!(out, "Routes:            {}", summary.routes)?;
            writeln!(out, "Components:        {}", summary.components)?;
            writeln!(out, "Connected groups:  {}", summary.connected_groups)?;
            writeln!(out, "Largest component: {}", summary.largest_component.join(", "))?;
        }
    }

    Ok(())
}

fn run_airports(analyzer: &RouteAnalyzer, format: &OutputFormat, out: &mut impl Write) -> Result<()> {
    let network = analyzer.network();
    let components = analyzer.components();

    let rows: Vec<(String, String, usize)> = network
        .airports()
        .map(|airport| {
            let component = components.component_index(airport.code.as_str()).unwrap_or_default();
            (airport.code.clone(), airport.name.clone(), component + 1)
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let values: Vec<_> = rows
                .iter()
                .map(|(code, name, component)| json!({ "code": code, "name": name, "component": component }))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&values)?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "code,name,component")?;
            for (code, name, component) in &rows {
                writeln!(out, "{},{},{}", csv_field(code), csv_field(name), component)?;
            }
        }
        OutputFormat::Table => {
            let mut table = new_table(&["Code", "Name", "Component"]);
            for (code, name, component) in &rows {
                table.add_row(vec![code.clone(), name.clone(), component.to_string()]);
            }
            writeln!(out, "{}", table)?;
            writeln!(out, "{} airport(s)", rows.len())?;
        }
    }

    Ok(())
}

fn run_routes(analyzer: &RouteAnalyzer, format: &OutputFormat, out: &mut impl Write) -> Result<()> {
    let components = analyzer.components();
    let component_number = |code: &str| components.component_index(code).map_or(0, |idx| idx + 1);

    let routes = analyzer.network().routes();

    match format {
        OutputFormat::Json => {
            let values: Vec<_> = routes
                .iter()
                .map(|(from, to)| {
                    json!({
                        "from": from,
                        "to": to,
                        "same_component": components.same_component(from.as_str(), to.as_str()),
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&values)?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "from,to,from_component,to_component")?;
            for (from, to) in routes {
                writeln!(
                    out,
                    "{},{},{},{}",
                    from,
                    to,
                    component_number(from.as_str()),
                    component_number(to.as_str())
                )?;
            }
        }
        OutputFormat::Table => {
            let mut table = new_table(&["From", "To", "From component", "To component"]);
            for (from, to) in routes {
                table.add_row(vec![
                    from.clone(),
                    to.clone(),
                    component_number(from.as_str()).to_string(),
                    component_number(to.as_str()).to_string(),
                ]);
            }
            writeln!(out, "{}", table)?;
            writeln!(out, "{} route(s)", routes.len())?;
        }
    }

    Ok(())
}

fn run_scc(analyzer: &RouteAnalyzer, format: &OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(analyzer.components())?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "component,size,airports")?;
            for (idx, component) in analyzer.components().iter().enumerate() {
                writeln!(out, "{},{},{}", idx + 1, component.len(), csv_field(&component.join(" ")))?;
            }
        }
        OutputFormat::Table => {
            let mut table = new_table(&["#", "Size", "Airports"]);
            for (idx, names) in analyzer.component_names().iter().enumerate() {
                table.add_row(vec![(idx + 1).to_string(), names.len().to_string(), names.join(", ")]);
            }
            writeln!(out, "{}", table)?;
            writeln!(out, "{} component(s)", analyzer.components().len())?;
        }
    }

    Ok(())
}

fn run_same_scc(
    analyzer: &RouteAnalyzer,
    a: &str,
    b: &str,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (a, b) = (normalize_code(a), normalize_code(b));
    let same = analyzer.same_component(&a, &b)?;

    match format {
        OutputFormat::Json => {
            let value = json!({ "a": a, "b": b, "same_component": same });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "a,b,same_component")?;
            writeln!(out, "{},{},{}", a, b, same)?;
        }
        OutputFormat::Table => {
            let network = analyzer.network();
            let (a_name, b_name) = (network.display_name(&a), network.display_name(&b));
            if same {
                writeln!(out, "{} and {} are in the same SCC.", a_name, b_name)?;
            } else {
                writeln!(out, "{} and {} are NOT in the same SCC.", a_name, b_name)?;
            }
        }
    }

    Ok(())
}

fn run_path(
    analyzer: &RouteAnalyzer,
    from: &str,
    to: &str,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (from, to) = (normalize_code(from), normalize_code(to));
    let route = analyzer.shortest_route(&from, &to)?;

    match format {
        OutputFormat::Json => {
            let hops = route.as_ref().map(|r| r.len() - 1);
            let value = json!({ "from": from, "to": to, "path": route, "hops": hops });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "from,to,hops,path")?;
            match &route {
                Some(r) => writeln!(out, "{},{},{},{}", from, to, r.len() - 1, csv_field(&r.join(" ")))?,
                None => writeln!(out, "{},{},,", from, to)?,
            }
        }
        OutputFormat::Table => {
            let network = analyzer.network();
            let (from_name, to_name) = (network.display_name(&from), network.display_name(&to));
            match route {
                Some(r) => writeln!(
                    out,
                    "The shortest path from {} to {} is: {}",
                    from_name,
                    to_name,
                    format_route(&r)
                )?,
                None => writeln!(out, "No path found between {} and {}", from_name, to_name)?,
            }
        }
    }

    Ok(())
}

fn run_shell(
    analyzer: &RouteAnalyzer,
    format: &OutputFormat,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Skyroute Interactive Shell")?;
    writeln!(out, "Type :help for commands. :quit to exit.\n")?;

    let mut line = String::new();

    loop {
        eprint!("skyroute> ");

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let result = match words.as_slice() {
            [] => continue,
            [":quit" | ":exit" | ":q"] => break,
            [":help" | ":h"] => {
                writeln!(out, "Commands:")?;
                writeln!(out, "  summary          Network counts")?;
                writeln!(out, "  airports         List airports")?;
                writeln!(out, "  routes           List routes")?;
                writeln!(out, "  scc              List strongly connected components")?;
                writeln!(out, "  same <A> <B>     Same-SCC check")?;
                writeln!(out, "  path <A> <B>     Shortest route")?;
                writeln!(out, "  :quit            Exit shell")?;
                Ok(())
            }
            ["summary"] => run_summary(analyzer, format, out),
            ["airports"] => run_airports(analyzer, format, out),
            ["routes"] => run_routes(analyzer, format, out),
            ["scc"] => run_scc(analyzer, format, out),
            ["same", a, b] => run_same_scc(analyzer, a, b, format, out),
            ["path", from, to] => run_path(analyzer, from, to, format, out),
            _ => {
                eprintln!("Unknown command: {} (try :help)", line.trim());
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
