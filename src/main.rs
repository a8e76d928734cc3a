// Walkthrough of every toolkit operation.
//
// Usage: generics-demo [CONFIG.toml]

use colored::Colorize;
use generics_toolkit::config::DemoConfig;
use generics_toolkit::inventory::sample_inventory;
use generics_toolkit::{
    duplicate, find_key_by_value, int_to_string, map_sequence, max_element, square,
    string_to_int, swap_values, transform, try_map_sequence, ToolkitError,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

fn run(config: &DemoConfig) {
    section("Swap");
    let mut c = 10;
    let mut d = 16;
    swap_values(&mut c, &mut d);
    println!("ints:    c = {c}, d = {d}");

    let mut p = config.swap_left.clone();
    let mut h = config.swap_right.clone();
    swap_values(&mut p, &mut h);
    println!("strings: p = {p}, h = {h}");

    section("Duplicate");
    match duplicate(config.repeat_item.clone(), config.repeat_count) {
        Ok(items) => println!("{:?}", items),
        Err(err) => println!("{} {err}", "error:".red()),
    }

    section("Transform");
    for input in &config.conversions {
        match transform(input.as_str(), string_to_int) {
            Ok(value) => println!("{} '{input}' -> {value}", "ok".green()),
            Err(err) => println!("{} {err}", "error:".red()),
        }
    }
    println!("int_to_string(61) -> {:?}", transform(61, int_to_string));

    section("Map");
    match try_map_sequence(&config.numbers, |&n| square(n)) {
        Ok(squares) => println!("squares: {:?}", squares),
        Err(err) => println!("{} {err}", "error:".red()),
    }
    let lengths = map_sequence(&config.conversions, |s| s.len());
    println!("input lengths: {:?}", lengths);
    match try_map_sequence(&config.conversions, |s| string_to_int(s)) {
        Ok(values) => println!("parsed all: {:?}", values),
        Err(err) => println!("{} {err}", "stopped at:".yellow()),
    }

    section("Find key");
    match find_key_by_value(&config.lookup_target, &config.airports) {
        Some(code) => println!("'{}' -> {}", config.lookup_target, code.green()),
        None => println!("'{}' -> {}", config.lookup_target, "not found".yellow()),
    }
    let inventory = sample_inventory();
    match find_key_by_value(&config.lookup_item, &inventory) {
        Some(snack) => println!("{:?} -> {snack}", config.lookup_item),
        None => println!("{:?} -> {}", config.lookup_item, "not found".yellow()),
    }

    section("Largest");
    match max_element(&config.numbers) {
        Some(largest) => println!("max of {:?} = {largest}", config.numbers),
        None => println!("{}", "empty sequence".yellow()),
    }
}

fn load_config() -> Result<DemoConfig, ToolkitError> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => DemoConfig::load(&path),
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match load_config() {
        Ok(config) => {
            run(&config);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
