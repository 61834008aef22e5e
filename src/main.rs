use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use minilang::{
    config::ParserConfig,
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::Token},
    outline::ProgramOutline,
    parser::parser::parse_with_config,
    render_error,
};
use tracing::{debug, warn, Level};

const LOG_ENV: &str = "MINILANG_LOG";
const USAGE: &str = "usage: minilang <file> [--tokens] [--ast] [--outline]";

#[derive(Debug, Default)]
struct Options {
    file: String,
    tokens: bool,
    ast: bool,
    outline: bool,
}

impl Options {
    fn from_args(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Options::default();
        let mut file = None;

        for arg in args {
            match arg.as_str() {
                "--tokens" => options.tokens = true,
                "--ast" => options.ast = true,
                "--outline" => options.outline = true,
                flag if flag.starts_with("--") => return Err(format!("unknown flag `{}`", flag)),
                _ if file.is_some() => return Err(String::from("only one input file is accepted")),
                _ => file = Some(arg),
            }
        }

        options.file = file.ok_or_else(|| String::from("missing input file"))?;
        Ok(options)
    }

    /// Without any view flag the program is printed back as source.
    fn print_source(&self) -> bool {
        !(self.tokens || self.ast || self.outline)
    }
}

fn init_logging() {
    let level = match env::var(LOG_ENV) {
        Ok(value) => value.parse::<Level>().unwrap_or(Level::WARN),
        Err(_) => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let options = match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = ParserConfig::from_env().unwrap_or_else(|error| {
        warn!(%error, "ignoring invalid configuration");
        ParserConfig::default()
    });

    let source = match read_to_string(&options.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", options.file, error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = Path::new(&options.file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.file.clone());

    match run(&options, &config, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            warn!(error = %error, "parse failed");
            eprintln!("{}", render_error(&error, &source, &file_name));
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options, config: &ParserConfig, source: &str) -> Result<(), Error> {
    let start = Instant::now();

    let tokens: Vec<Token> = tokenize(source)?;
    eprintln!("Tokenized in {:?}", start.elapsed());
    debug!(tokens = tokens.len(), "tokenized");

    if options.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let program = parse_with_config(tokens, config)?;
    eprintln!("Parsed in {:?}", parse_start.elapsed());

    if options.ast {
        println!("{:#?}", program);
    }

    if options.outline {
        print!("{}", ProgramOutline::from_program(&program));
    }

    if options.print_source() {
        print!("{}", program);
    }

    eprintln!("Total time: {:?}", start.elapsed());
    Ok(())
}
