use clap::{crate_authors, crate_description, crate_version, Arg, ArgMatches, Command};

use std::path::Path;
use std::process::exit;
use wmark_core::commands::{embed, extract};
use wmark_core::{Method, Result, WatermarkError};

fn main() {
    env_logger::init();

    let matches = Command::new("Wmark CLI")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg_required_else_help(true)
        .subcommand(
            Command::new("embed")
                .about("Embeds a binary watermark image into a host image")
                .arg(
                    Arg::new("host")
                        .short('i')
                        .long("in")
                        .value_name("host image")
                        .required(true)
                        .help("Host image (PNG, JPEG or BMP), used readonly"),
                )
                .arg(
                    Arg::new("watermark")
                        .short('w')
                        .long("watermark")
                        .value_name("watermark image")
                        .required(true)
                        .help("Watermark image, reduced to a binary mask"),
                )
                .arg(
                    Arg::new("write_to_file")
                        .short('o')
                        .long("out")
                        .value_name("output image file")
                        .required(true)
                        .help("Watermarked image will be stored as file"),
                )
                .arg(method_arg())
                .arg(alpha_arg()),
        )
        .subcommand(
            Command::new("extract")
                .about("Recovers the watermark bitmap from a watermarked image")
                .arg(
                    Arg::new("marked")
                        .short('i')
                        .long("in")
                        .value_name("watermarked image")
                        .required(true)
                        .help("Image that carries the watermark"),
                )
                .arg(
                    Arg::new("reference")
                        .short('r')
                        .long("reference")
                        .value_name("original host image")
                        .required(false)
                        .help("Original host image, required for the non-blind dct method"),
                )
                .arg(
                    Arg::new("write_to_file")
                        .short('o')
                        .long("out")
                        .value_name("output image file")
                        .required(true)
                        .help("Recovered bitmap will be stored as file"),
                )
                .arg(method_arg())
                .arg(alpha_arg()),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e}");
        exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("embed", m)) => embed(
            Path::new(m.get_one::<String>("host").unwrap()),
            Path::new(m.get_one::<String>("watermark").unwrap()),
            Path::new(m.get_one::<String>("write_to_file").unwrap()),
            get_method(m)?,
            get_alpha(m)?,
        ),
        Some(("extract", m)) => extract(
            Path::new(m.get_one::<String>("marked").unwrap()),
            m.get_one::<String>("reference").map(Path::new),
            Path::new(m.get_one::<String>("write_to_file").unwrap()),
            get_method(m)?,
            get_alpha(m)?,
        ),
        _ => Ok(()),
    }
}

fn method_arg() -> Arg {
    Arg::new("method")
        .short('m')
        .long("method")
        .value_name("method")
        .default_value("lsb")
        .help("Watermarking method, either 'lsb' or 'dct'")
}

fn alpha_arg() -> Arg {
    Arg::new("alpha")
        .short('a')
        .long("alpha")
        .value_name("alpha")
        .required(false)
        .help("DCT embedding strength in [0.01, 0.2]")
}

fn get_method(args: &ArgMatches) -> Result<Method> {
    args.get_one::<String>("method").unwrap().parse()
}

fn get_alpha(args: &ArgMatches) -> Result<Option<f32>> {
    match args.get_one::<String>("alpha") {
        None => Ok(None),
        Some(a) => a
            .parse()
            .map(Some)
            .map_err(|_| WatermarkError::InvalidAlpha(a.to_string())),
    }
}
