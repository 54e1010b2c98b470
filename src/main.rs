mod run;

use anyhow::Result;

fn main() -> Result<()> {
    ledgerlens::logging::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => {
            run::print_usage();
            Ok(())
        }
        _ => run::as_cli(&args),
    }
}
