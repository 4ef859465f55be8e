use std::process::ExitCode;
use xsd_duration::{decode, encode, ElapsedTime};

const USAGE: &str = "usage: xsd-duration <encode NANOS... | decode DURATION...>";

fn run(command: &str, args: &[String]) -> Result<(), String> {
    match command {
        "encode" => {
            for arg in args {
                let value: ElapsedTime = arg
                    .parse()
                    .map_err(|e| format!("{arg:?} is not a nanosecond count: {e}"))?;

                println!("{}", encode(value));
            }
        }
        "decode" => {
            for arg in args {
                let value = decode(arg).map_err(|e| format!("{arg:?}: {e}"))?;
                println!("{value}");
            }
        }
        _ => return Err(USAGE.to_owned()),
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_module("xsd_duration", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();

    let Some((command, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    log::debug!("running {command:?} on {} inputs", rest.len());

    match run(command, rest) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
