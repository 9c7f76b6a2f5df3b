use clap::{App, Arg};
use failure::Error;
use imgcarve::{ImageFileSink, ImageFileSource, PixelSink, PixelSource, SeamCarver};

fn run() -> Result<(), Error> {
    let matches = App::new("imgcarve")
        .version("0.1.0")
        .about("Content-aware image narrowing (seam carving)")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("seams")
                .short("s")
                .long("seams")
                .help("Number of columns to remove")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Also write the Sobel energy rendering of the input to this file")
                .takes_value(true),
        )
        .get_matches();

    let seam_count: u32 = matches.value_of("seams").unwrap().parse()?;

    let pixels = ImageFileSource::new(matches.value_of("input").unwrap()).acquire()?;
    let carver = SeamCarver::new(pixels);

    if let Some(path) = matches.value_of("energy") {
        ImageFileSink::new(path).emit(&carver.energy_preview())?;
    }

    let carved = carver.carve(seam_count)?;
    ImageFileSink::new(matches.value_of("output").unwrap()).emit(&carved)?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("imgcarve: {}", err);
        std::process::exit(1);
    }
}
