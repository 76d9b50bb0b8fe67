use clap::Parser;
use tilemap_gen::{run, Args};

fn main() -> tilemap_gen::Result<()> {
    let args = Args::parse();

    run(args)?;

    Ok(())
}
