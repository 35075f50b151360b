use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use framekit::{
    AnimationParams, BackgroundParams, BatchReport, CanvasSize, ContourParams, Error,
    GifSheetParams, HsvRange, SheetParams, TreeParams, animate_folder, extract_by_reference,
    gif_to_spritesheet, remove_background_tree, sprite_sheets_tree,
};

use super::args::{
    AnimateArgs, CliArgs, Command, ExtractRefArgs, GifSheetArgs, RemoveBgArgs, SheetArgs,
};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Parse `H,S,V` into an 8-bit HSV triple.
pub fn parse_hsv(value: &str) -> Result<[u8; 3], AppError> {
    let invalid = || AppError::InvalidHsv {
        value: value.to_string(),
    };
    let parts: Vec<u8> = value
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;
    match parts.as_slice() {
        &[h, s, v] if h <= 180 => Ok([h, s, v]),
        _ => Err(invalid()),
    }
}

fn sheet_params(columns: u32, fill_columns: bool) -> Result<SheetParams, AppError> {
    if columns == 0 {
        return Err(AppError::ZeroColumns { columns });
    }
    Ok(SheetParams {
        columns,
        fill_columns,
    })
}

fn log_report(report: &BatchReport) {
    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
}

fn run_animate(args: AnimateArgs) -> Result<(), AppError> {
    let params = AnimationParams {
        frame_duration_ms: args.duration,
        loop_count: args.loops,
        format: args.format,
    };
    let frames = animate_folder(&args.input, &args.output, &params)?;
    info!("Successfully processed: {} frames -> {:?}", frames, args.output);
    Ok(())
}

fn run_gif_sheet(args: GifSheetArgs) -> Result<(), AppError> {
    let canvas = if args.fit {
        Some(
            args.canvas
                .parse::<CanvasSize>()
                .map_err(|_| AppError::InvalidCanvas {
                    canvas: args.canvas.clone(),
                })?,
        )
    } else {
        None
    };
    let params = GifSheetParams {
        sheet: sheet_params(args.columns, args.full_row)?,
        canvas,
        atlas: args.atlas,
    };
    let sheet = gif_to_spritesheet(&args.gif_path, &args.output, &params)?;
    info!(
        "Successfully processed: {:?} -> {:?} ({} frames)",
        args.gif_path, sheet.path, sheet.frame_count
    );
    Ok(())
}

fn run_extract_ref(args: ExtractRefArgs) -> Result<(), AppError> {
    let params = ContourParams {
        threshold: args.threshold,
    };
    let report = extract_by_reference(&args.input, &args.standard, &args.output, &params)?;
    log_report(&report);
    Ok(())
}

fn run_remove_bg(args: RemoveBgArgs) -> Result<(), AppError> {
    let params = BackgroundParams {
        range: HsvRange {
            lower: parse_hsv(&args.lower)?,
            upper: parse_hsv(&args.upper)?,
        },
        close_radius: args.close_radius,
    };
    let tree = TreeParams {
        match_name: args.dir_name,
        output_name: args.output_name,
    };
    let report = remove_background_tree(&args.root, &tree, &params)?;
    log_report(&report);
    Ok(())
}

fn run_sheet(args: SheetArgs) -> Result<(), AppError> {
    let params = sheet_params(args.columns, !args.compact)?;
    let tree = TreeParams {
        match_name: args.dir_name,
        output_name: args.output_name,
    };
    let report = sprite_sheets_tree(&args.root, &tree, &params, args.atlas)?;
    log_report(&report);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);
    info!("Working directory: {:?}", std::env::current_dir()?);

    let result = match args.command {
        Command::Animate(a) => run_animate(a),
        Command::GifSheet(a) => run_gif_sheet(a),
        Command::ExtractRef(a) => run_extract_ref(a),
        Command::RemoveBg(a) => run_remove_bg(a),
        Command::Sheet(a) => run_sheet(a),
    };

    match result {
        // Missing inputs and empty folders end the run without output, not with a failure
        Err(AppError::Library(e)) if e.is_checked() => {
            warn!("{}", e);
            if matches!(e, Error::NoImages { .. }) {
                warn!(
                    "Check that the frames use a lowercase .png extension and sit directly in the folder"
                );
            }
            Ok(())
        }
        other => Ok(other?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_bounds_parse() {
        assert_eq!(parse_hsv("0,0,200").unwrap(), [0, 0, 200]);
        assert_eq!(parse_hsv(" 180, 30 ,255").unwrap(), [180, 30, 255]);
        assert!(parse_hsv("181,0,0").is_err());
        assert!(parse_hsv("1,2").is_err());
        assert!(parse_hsv("1,2,300").is_err());
    }

    #[test]
    fn zero_columns_are_rejected() {
        assert!(sheet_params(0, true).is_err());
        assert_eq!(sheet_params(4, false).unwrap().columns, 4);
    }
}
