use anyhow::Result;
use clap::Parser;
use std::process;
use wordcount::cmd::wordcount::Args;
use wordcount::standalone::{engine::run_job, Job};
use wordcount::workload;

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors exit with 1; --help and --version still succeed.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = parse_args();
    let job = Job {
        config: args.to_config()?,
        input: args.input,
    };

    run_job(&job, &workload::WORD_COUNT)?;
    Ok(())
}
