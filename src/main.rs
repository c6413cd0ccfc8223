#[macro_use]
extern crate clap;

use std::error::Error;
use std::process;

use unicodeset_data::{compile, to_pattern_list, to_regex_class, to_split_pattern};
use unicodeset_core::PatternItem;

mod app;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("unicodeset: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = app::app().get_matches();
    match matches.subcommand() {
        ("parse", Some(m)) => run_parse(m.value_of("pattern").unwrap()),
        ("resolve", Some(m)) => run_resolve(m.value_of("pattern").unwrap()),
        ("match", Some(m)) => {
            run_match(m.value_of("pattern").unwrap(), m.value_of("value").unwrap())
        }
        ("regex-class", Some(m)) => run_regex_class(m.value_of("pattern").unwrap()),
        ("pattern-list", Some(m)) => run_pattern_list(m.value_of("pattern").unwrap()),
        ("split-pattern", Some(m)) => run_split_pattern(m.value_of("pattern").unwrap()),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn run_parse(pattern: &str) -> Result<(), Box<dyn Error>> {
    let ast = unicodeset_core::parse(pattern)?;
    println!("{:#?}", ast);
    Ok(())
}

fn run_resolve(pattern: &str) -> Result<(), Box<dyn Error>> {
    let resolved = unicodeset_data::resolve(pattern)?;
    for &(lo, hi) in &resolved.intervals {
        if lo == hi {
            println!("U+{:04X}", lo);
        } else {
            println!("U+{:04X}..U+{:04X}", lo, hi);
        }
    }
    for s in &resolved.strings {
        let text: String = s.iter().filter_map(|cp| char::from_u32(cp.value())).collect();
        println!("{{{}}}", text);
    }
    Ok(())
}

fn run_match(pattern: &str, value: &str) -> Result<(), Box<dyn Error>> {
    let predicate = compile(pattern)?;
    let matched = predicate.contains_str(value);
    println!("{}", matched);
    if !matched {
        process::exit(1);
    }
    Ok(())
}

fn run_regex_class(pattern: &str) -> Result<(), Box<dyn Error>> {
    println!("{}", to_regex_class(pattern)?);
    Ok(())
}

fn run_pattern_list(pattern: &str) -> Result<(), Box<dyn Error>> {
    for item in to_pattern_list(pattern)? {
        match item {
            PatternItem::Codepoint(c) => println!("U+{:04X}", c),
            PatternItem::Negated(c) => println!("NEGATED(U+{:04X})", c),
        }
    }
    Ok(())
}

fn run_split_pattern(pattern: &str) -> Result<(), Box<dyn Error>> {
    let split = to_split_pattern(pattern)?;
    for &(lo, hi) in &split.ranges {
        if lo == hi {
            println!("range U+{:04X}", lo);
        } else {
            println!("range U+{:04X}..U+{:04X}", lo, hi);
        }
    }
    for needle in &split.needles {
        println!("needle {:?}", needle);
    }
    Ok(())
}
