use anyhow::Result;
use adops::cli::{init_logging, parse_args, run};
use adops::observability::install_panic_hook;

fn main() -> Result<()> {
    let cli = parse_args();

    init_logging(cli.verbosity);
    install_panic_hook();

    run(cli)
}
