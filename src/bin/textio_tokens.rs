use std::env;
use std::error::Error;
use std::io::Write;

use textio::io::{stdin_scanner, stdout};
use textio::{ByteScanner, Config, Record, ScanError, Slot, Value, format_configured};

fn print_usage_and_exit() -> ! {
    eprintln!("Usage: textio_tokens [config.json|config.yaml] < input");
    eprintln!("  Reads alphanumeric tokens from stdin and prints a summary record.");
    std::process::exit(1);
}

#[derive(Debug, Default)]
struct Summary {
    words: i64,
    numbers: i64,
    sum: i64,
    skipped: i64,
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let config = match args.next() {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    if args.next().is_some() {
        return Err("too many arguments".into());
    }

    let mut summary = Summary::default();
    let mut input = stdin_scanner();

    loop {
        let mut word = String::new();
        match textio::scan_configured(&config, &mut *input, &mut [Slot::from(&mut word)]) {
            Ok(_) => {}
            Err(e) if matches!(e.error, ScanError::UnexpectedEndOfInput) => break,
            Err(e) => return Err(e.into()),
        }

        if word.is_empty() {
            // Not a token byte and not a delimiter.
            input.read_byte()?;
            summary.skipped += 1;
            continue;
        }

        summary.words += 1;
        if let Ok(n) = word.parse::<i64>() {
            summary.numbers += 1;
            summary.sum = summary.sum.saturating_add(n);
        }
    }

    let record = Record::named("Summary")
        .field("words", summary.words)
        .field("numbers", summary.numbers)
        .field("sum", summary.sum)
        .field("skipped", summary.skipped);

    let mut out = stdout();
    format_configured(&config, &mut out, &[Value::from(record)])?;
    out.write_all(b"\n")?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("textio_tokens error: {e}");
        print_usage_and_exit();
    }
}
