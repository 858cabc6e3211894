mod cli;
mod logging;
mod report;

use clap::Parser;
use cli::{CleanArgs, Cli, Command, DurationArgs, EventArgs, RenderArgs, RetitleArgs};
use log::{info, warn};
use prtime::action::{self, Event, EventKind, Inputs, graphql, parse_flag};
use prtime::{Error, Functions, Result, Variables, clean_title, duration, render_verbose, render_with};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.log_level.as_deref());

    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    match run(cli.command, color) {
        Ok(()) => ExitCode::from(prtime::EXIT_SUCCESS),
        Err(Error::UnsupportedEvent(name)) => {
            info!("event '{name}' is not handled, nothing to do");
            ExitCode::from(prtime::EXIT_SUCCESS)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(command: Command, color: bool) -> Result<()> {
    match command {
        Command::Render(args) => render_command(args, color),
        Command::Clean(args) => clean_command(args),
        Command::Duration(args) => duration_command(args),
        Command::Query(args) => query_command(args),
        Command::Retitle(args) => retitle_command(args),
    }
}

fn render_command(args: RenderArgs, color: bool) -> Result<()> {
    let variables = parse_vars(&args.vars)?;

    if args.explain {
        if args.no_functions {
            warn!("--explain always renders with functions enabled");
        }
        report::print_render(&render_verbose(&args.pattern, &variables), color);
        return Ok(());
    }

    let functions = if args.no_functions { Functions::Disabled } else { Functions::Enabled };
    println!("{}", render_with(&args.pattern, &variables, functions));
    Ok(())
}

fn clean_command(args: CleanArgs) -> Result<()> {
    println!("{}", clean_title(&args.text, &args.patterns.duration_pattern, &args.patterns.title_pattern));
    Ok(())
}

fn duration_command(args: DurationArgs) -> Result<()> {
    let Some(total) = duration::parse(&args.text) else {
        return Err(Error::NoDuration(args.text));
    };

    match args.pattern {
        Some(pattern) => println!("{}\t{}", total.num_milliseconds(), duration::format(total, &pattern)),
        None => println!("{}", total.num_milliseconds()),
    }
    Ok(())
}

fn query_command(args: EventArgs) -> Result<()> {
    let event = Event::load(&args.event_name, &args.event_path)?;
    let request = graphql::lookup_request(&event)?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn retitle_command(args: RetitleArgs) -> Result<()> {
    if let Some(name) = args.event_name.as_deref() {
        if EventKind::from_name(name).is_none() {
            return Err(Error::UnsupportedEvent(name.to_string()));
        }
    }

    let response = read_response(&args.response)?;
    let pull_request = graphql::parse_response(&response)?;
    let inputs = Inputs {
        duration_pattern: args.patterns.duration_pattern,
        title_pattern: args.patterns.title_pattern,
        scan_comments: parse_flag(&args.scan_comments),
        scan_pull_request_body: parse_flag(&args.scan_pull_request_body),
    };

    let retitle = action::retitle(&pull_request, &inputs);
    if !retitle.is_changed() {
        info!("title of {} is already up to date", retitle.pull_request_id);
    }
    println!("{}", serde_json::to_string_pretty(&retitle.request())?);
    Ok(())
}

fn read_response(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(|err| Error::io("<stdin>", err))?;
        return Ok(buffer);
    }
    fs::read_to_string(source).map_err(|err| Error::io(source, err))
}

fn parse_vars(pairs: &[String]) -> Result<Variables> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| Error::InvalidVariable(pair.clone()))
        })
        .collect()
}
