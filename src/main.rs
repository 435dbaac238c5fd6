use std::{
    env,
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter},
    process,
    time::Instant,
};

use lexa::{
    errors::errors::Error,
    lexer::scanner::scan,
    output::sinks::{ErrorSink, TokenSink},
    symbols::table::SymbolTable,
};

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    let input_path = args.get(1).map(String::as_str).unwrap_or("input_file.txt");

    let input = BufReader::new(File::open(input_path)?);
    let mut token_sink = TokenSink::new(BufWriter::new(append("Token.txt")?));
    let mut error_sink = ErrorSink::new(BufWriter::new(append("Error.txt")?));

    let mut table = SymbolTable::new();
    let start = Instant::now();
    let mut line_count = 0u32;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index as u32 + 1;
        line_count = line_no;

        let (tokens, errors) = scan(&line, line_no, &mut table);

        for token in &tokens {
            token.debug();
            token_sink.write(token)?;
        }
        for error in &errors {
            println!("Error: {}", error.character);
            error_sink.write(error)?;
        }
    }

    token_sink.flush()?;
    error_sink.flush()?;

    println!(
        "Scanned {} lines in {:?} ({} symbol table entries)",
        line_count,
        start.elapsed(),
        table.len()
    );

    Ok(())
}

fn append(path: &str) -> Result<File, Error> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
