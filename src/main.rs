use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ocr_cipher::cipher::CaesarCipher;
use ocr_cipher::config::load_settings_for_image;
use ocr_cipher::font::FontFitter;
use ocr_cipher::ocr::StaticOcr;
use ocr_cipher::output::SaveImage;
use ocr_cipher::pipeline::ImagePipeline;
use ocr_cipher::reconstructor::Reconstructor;
use ocr_cipher::sampler::ColorSampler;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: ocr_cipher <image> <recognition.yaml> [--shift N] [--save <path>]");
        eprintln!("  Encipher recognized characters and re-render them onto the image.");
        eprintln!("  <recognition.yaml> holds the OCR engine output (text, bounds, confidence).");
        return if args.is_empty() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        eprintln!("ocr_cipher {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    // Parse positional arguments and flags.
    let mut positional: Vec<String> = Vec::new();
    let mut shift_arg: Option<i32> = None;
    let mut save_arg: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--shift" => {
                let Some(value) = iter.next() else {
                    eprintln!("ERROR: --shift requires a value");
                    return ExitCode::FAILURE;
                };
                match value.parse::<i32>() {
                    Ok(v) => shift_arg = Some(v),
                    Err(e) => {
                        eprintln!("ERROR: invalid --shift value {value}: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            "--save" => {
                let Some(value) = iter.next() else {
                    eprintln!("ERROR: --save requires a path");
                    return ExitCode::FAILURE;
                };
                save_arg = Some(PathBuf::from(value));
            }
            other if other.starts_with("--") => {
                eprintln!("ERROR: unknown option {other}");
                return ExitCode::FAILURE;
            }
            other => positional.push(other.to_string()),
        }
    }

    let [image_arg, recognition_arg] = positional.as_slice() else {
        eprintln!("ERROR: expected <image> and <recognition.yaml> arguments");
        return ExitCode::FAILURE;
    };
    let image_path = Path::new(image_arg);

    // Load settings from the same directory as the input image.
    let settings = match load_settings_for_image(image_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR: Failed to load settings for {image_arg}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let shift = shift_arg.unwrap_or(settings.shift);

    let image = match image::open(image_path) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("ERROR: Failed to open image {image_arg}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ocr = match StaticOcr::from_file(Path::new(recognition_arg)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("ERROR: Failed to load recognition result {recognition_arg}: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Font loading is fatal before any character is processed.
    let fitter = match &settings.font_path {
        Some(path) => FontFitter::from_file(path),
        None => FontFitter::from_system(),
    };
    let fitter = match fitter {
        Ok(f) => f,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    let save_path = save_arg.unwrap_or_else(|| default_save_path(image_path, shift));

    let pipeline = ImagePipeline::new(
        Box::new(ocr),
        Box::new(CaesarCipher::new(shift)),
        Reconstructor::new(
            fitter,
            ColorSampler::new(settings.sampler_config()),
            settings.render_style,
        ),
        vec![Box::new(SaveImage::new(&save_path))],
    );

    match pipeline.run(&image) {
        Ok(()) => {
            eprintln!("OK: {image_arg} -> {}", save_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {image_arg}: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Default output path: `<stem>_enciphered_<shift>.png` beside the input.
fn default_save_path(image_path: &Path, shift: i32) -> PathBuf {
    let stem = image_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    image_path.with_file_name(format!("{stem}_enciphered_{shift}.png"))
}
