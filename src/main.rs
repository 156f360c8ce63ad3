use std::{
    env,
    fs::read_to_string,
    io::{self, Read},
    path::Path,
    process::ExitCode,
    time::Instant,
};

use minijs::{
    errors::errors::Error,
    format_error,
    lexer::{
        lexer::{scan, tokenize_strict},
        tokens::Token,
    },
    parser::parser::parse,
    printer::printer::print_ast,
};

const USAGE: &str = "usage: minijs [--tokens] [--strict] [--quiet] <file | ->";

struct Options {
    tokens: bool,
    strict: bool,
    quiet: bool,
    input: String,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        tokens: false,
        strict: false,
        quiet: false,
        input: String::new(),
    };
    let mut input = None;

    for arg in args {
        match arg.as_str() {
            "--tokens" => options.tokens = true,
            "--strict" => options.strict = true,
            "--quiet" => options.quiet = true,
            "-" => input = Some(arg.clone()),
            flag if flag.starts_with("--") => return Err(format!("unknown option `{}`", flag)),
            path => {
                if input.is_some() {
                    return Err(String::from("only one input file can be given"));
                }
                input = Some(path.to_string());
            }
        }
    }

    options.input = input.ok_or_else(|| String::from("no input file given"))?;
    Ok(options)
}

/// Reads the input, returning the name positions should carry and the source text.
fn read_source(input: &str) -> io::Result<(Option<String>, String)> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok((None, source));
    }

    let file_name = Path::new(input)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());

    Ok((Some(file_name), read_to_string(input)?))
}

fn timing(options: &Options, phase: &str, start: Instant) {
    if !options.quiet {
        eprintln!("{} in {:?}", phase, start.elapsed());
    }
}

fn tokenize_source(options: &Options, file: Option<String>, source: &str) -> Result<Vec<Token>, Error> {
    if options.strict {
        return tokenize_strict(source, file);
    }

    let scan = scan(source, file);
    for skipped in &scan.skipped {
        eprintln!(
            "warning: skipped unrecognised character {:?} at offset {}",
            skipped.character, skipped.position.0
        );
    }

    Ok(scan.tokens)
}

fn run(options: &Options, file: Option<String>, source: &str) -> Result<(), Error> {
    let start = Instant::now();
    let tokens = tokenize_source(options, file, source)?;
    timing(options, "Tokenized", start);

    if options.tokens {
        for token in &tokens {
            token.debug();
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let program = parse(tokens)?;
    timing(options, "Parsed", parse_start);

    let print_start = Instant::now();
    let printed = print_ast(&program);
    timing(options, "Printed", print_start);

    println!("{}", printed);
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {}\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    let (file, source) = match read_source(&options.input) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: could not read `{}`: {}", options.input, err);
            return ExitCode::from(1);
        }
    };

    match run(&options, file, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", format_error(&error, &source));
            ExitCode::from(1)
        }
    }
}
