use clap::{arg,crate_version,Command};
use nya_decoder::{decode,Image};

const RCH: &str = "unreachable was reached";

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::init();

    let long_help =
"Examples:
---------
Info:    `nyadecode info -i some_image.nya`
Decode:  `nyadecode decode -i some_image.nya -o some_image.ppm -f ppm`";

    let formats = ["raw","ppm"];

    let mut main_cmd = Command::new("nyadecode")
        .about("Decode NYA single-image containers")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("info")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .about("print header fields without writing anything"));

    main_cmd = main_cmd.subcommand(Command::new("decode")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .arg(arg!(-f --format <FORMAT> "output format").value_parser(formats)
            .default_value("raw"))
        .about("decode a file and write its pixels out"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("info") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let image = decode(path_in)?;
        println!("width:       {}", image.width);
        println!("height:      {}", image.height);
        println!("color depth: {}", image.color_depth);
        println!("filter:      {:?}", image.filter);
    }

    if let Some(cmd) = matches.subcommand_matches("decode") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let format = cmd.get_one::<String>("format").expect(RCH);
        let image = decode(path_in)?;
        let bytes = match format.as_str() {
            "raw" => raw_rgba(&image),
            "ppm" => ppm_rgb(&image),
            _ => {
                eprintln!("{} not supported",format);
                return Err(Box::new(std::fmt::Error));
            }
        };
        std::fs::write(path_out,bytes)?;
    }

    Ok(())
}

/// Tightly packed RGBA8888 bytes, row-major, exactly as the decoder
/// produces them.
fn raw_rgba(image: &Image) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.pixel_count() * 4);
    for pixel in &image.pixels {
        out.extend_from_slice(&pixel.to_be_bytes());
    }
    out
}

/// Binary PPM (P6), RGB only, alpha dropped. A convenience serializer so a
/// decoded image can be opened in any standard viewer without the SDL-based
/// display front end the original project used.
fn ppm_rgb(image: &Image) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", image.width, image.height);
    let mut out = header.into_bytes();
    for pixel in &image.pixels {
        let bytes = pixel.to_be_bytes();
        out.extend_from_slice(&bytes[0..3]);
    }
    out
}
