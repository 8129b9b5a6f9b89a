use std::{ffi::OsString, path::PathBuf};

use dotenv::dotenv;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graph_blowup::blowup::{
    blow_up, graph::node_range, read_edges_from_file, write_edges_to_file,
};

const USAGE: &str = "Usage: blowup_graph <input-file> <output-file>";

/// Splits every vertex of an edge list into an even and an odd copy and every
/// edge into four edges between the copies.
#[derive(StructOpt)]
struct Opts {
    /// Edge list to read, one `u v` pair per line
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Destination of the blown-up edge list; overwritten if present
    #[structopt(parse(from_os_str))]
    output: PathBuf,
}

/// Exactly two arguments, taken verbatim as paths. Anything else, including
/// `--help`, prints the usage line and exits with status 1.
fn parse_opts() -> Opts {
    let args: Vec<_> = std::env::args_os().collect();
    if args.len() != 3 {
        println!("{USAGE}");
        std::process::exit(1);
    }

    // `--` keeps clap from reading dash-prefixed paths as flags
    let (bin, paths) = args.split_at(1);
    let argv = bin
        .iter()
        .cloned()
        .chain([OsString::from("--")])
        .chain(paths.iter().cloned());

    match Opts::from_iter_safe(argv) {
        Ok(opts) => opts,
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let opts = parse_opts();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graph_blowup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let edges = read_edges_from_file(&opts.input)?;
    info!(range = ?node_range(&edges), "Loaded {} edges", edges.len());

    let blown = blow_up(&edges)?;
    info!(range = ?node_range(&blown), "Blown up into {} edges", blown.len());

    write_edges_to_file(&opts.output, &blown)?;

    println!("Original edges: {}", edges.len());
    println!("Blown-up edges: {}", blown.len());

    Ok(())
}
