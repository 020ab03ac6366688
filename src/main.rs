// filescript: run a file automation script

use std::fs;
use std::process;
use std::time::Duration;

use filescript::interpreter::constants::LOG_ENV_VAR;
use filescript::interpreter::engine::ExecOptions;

struct CliArgs {
    script: String,
    options: ExecOptions,
}

fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} [--max-iterations N] [--max-wait MS] [--no-color] <script>\n\
         \n\
         Options:\n  \
           --max-iterations N   abort when a single loop runs more than N iterations\n  \
           --max-wait MS        sleep at most MS milliseconds per Wait\n  \
           --no-color           print command output without styling",
        program_name
    )
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut options = ExecOptions {
        echo: true,
        ..ExecOptions::default()
    };
    let mut script = None;
    let mut rest = args.iter();

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--max-iterations" => {
                let value = rest.next().ok_or("--max-iterations needs a value")?;
                let limit = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid iteration limit '{}'", value))?;
                options.max_loop_iterations = Some(limit);
            }
            "--max-wait" => {
                let value = rest.next().ok_or("--max-wait needs a value")?;
                let millis = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid wait limit '{}'", value))?;
                options.max_wait = Some(Duration::from_millis(millis));
            }
            "--no-color" => options.color = false,
            flag if flag.starts_with("--") => return Err(format!("unknown option '{}'", flag)),
            path => {
                if script.is_some() {
                    return Err(format!("unexpected argument '{}'", path));
                }
                script = Some(path.to_string());
            }
        }
    }

    let script = script.ok_or("no script file provided")?;
    Ok(CliArgs { script, options })
}

/// Install a stderr subscriber when the log filter variable is set
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var(LOG_ENV_VAR).is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_env(LOG_ENV_VAR))
            .init();
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("filescript");

    let cli = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(program_name));
            process::exit(1);
        }
    };

    let source = match fs::read_to_string(&cli.script) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", cli.script, e);
            process::exit(1);
        }
    };

    tracing::info!(script = %cli.script, "loaded");

    if let Err(e) = filescript::execute(source.trim(), cli.options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
