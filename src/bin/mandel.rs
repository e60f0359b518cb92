extern crate clap;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::Renderer;
use num::Complex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .about("Escape-time grid for the Mandelbrot set, as raw counts")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (stdout if omitted)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse grid size"))
                .help("Size of the pixel grid"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.5,-1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the complex window"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0,1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the complex window"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to fill the grid with"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1 as u32,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration limit per pixel"),
        )
        .get_matches()
}

/// One grid row per line, counts separated by single spaces.  No
/// encoding, no colors; downstream tooling owns the presentation.
fn write_counts<W: Write>(out: &mut W, counts: &[u32], width: usize) -> io::Result<()> {
    for row in counts.chunks(width) {
        let mut sep = "";
        for count in row {
            write!(out, "{}{}", sep, count)?;
            sep = " ";
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() {
    let matches = args();
    let (width, height) = parse_pair(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing grid dimensions");
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap())
        .expect("Error parsing left lower point");
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap())
        .expect("Error parsing right upper point");
    let threads = usize::from_str(matches.value_of(THREADS).unwrap())
        .expect("Could not parse thread count.");
    let iterations = u32::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");

    let renderer = match Renderer::new(width, height, leftlower, rightupper, iterations) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };

    let mut buffer = vec![0 as u32; renderer.len()];
    let rendered = if threads > 1 {
        renderer.render_threaded(&mut buffer, threads)
    } else {
        renderer.render_into(&mut buffer)
    };
    if let Err(e) = rendered {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }

    let written = match matches.value_of(OUTPUT) {
        Some(path) => File::create(path).and_then(|file| {
            let mut out = BufWriter::new(file);
            write_counts(&mut out, &buffer, width)?;
            out.flush()
        }),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_counts(&mut handle, &buffer, width)
        }
    };
    if let Err(e) = written {
        eprintln!("Write failure: {}", e);
        std::process::exit(1);
    }
}
