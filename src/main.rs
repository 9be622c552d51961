use clap::Parser;
use outs::analysis::Args;
use outs::analysis::CLI;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    outs::log(match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    });
    match args.query {
        Some(query) => CLI.handle(query),
        None => {
            CLI.run();
            Ok(())
        }
    }
}
