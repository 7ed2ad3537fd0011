use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use threaded_bst::{Tree, Visit};

#[derive(Debug, Parser)]
#[command(name = "animate", about = "Animate traversals and deletions on a right-threaded BST")]
struct Cli {
    /// Values to insert, in order.
    #[arg(default_values_t = [5, 3, 8, 1, 4, 7, 9])]
    values: Vec<i64>,

    /// Values to delete once the tree is threaded. May be repeated.
    #[arg(short, long = "delete", value_name = "VALUE")]
    deletes: Vec<i64>,

    /// Pause between traversal frames, in milliseconds. 0 disables pausing.
    #[arg(long, default_value_t = 500)]
    speed_ms: u64,

    /// Log level written to stderr.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("initialize logging")?;

    let mut tree = Tree::new();
    for &value in &cli.values {
        tree.insert(value)
            .with_context(|| format!("insert {value}"))?;
    }
    info!("inserted {} values", tree.len());
    println!("{tree}");

    let pause = Duration::from_millis(cli.speed_ms);
    let frame = |visit: Visit<'_, i64>| {
        println!("{}", visit.tree());
        if !visit.is_last() && !pause.is_zero() {
            thread::sleep(pause);
        }
    };

    let pre_order = tree.pre_order_with(frame).context("pre-order")?;
    println!("Pre-order: {pre_order:?}\n");
    let in_order = tree.in_order_with(frame).context("in-order")?;
    println!("In-order: {in_order:?}\n");
    let post_order = tree.post_order_with(frame).context("post-order")?;
    println!("Post-order: {post_order:?}\n");

    tree.make_right_threaded().context("thread tree")?;
    println!("{tree}");
    print!("{}", tree.threads_to_string()?);

    for value in &cli.deletes {
        tree.delete(value)
            .with_context(|| format!("delete {value}"))?;
        println!("\nAfter deleting {value}:\n{tree}");
        print!("{}", tree.threads_to_string()?);
    }

    Ok(())
}
