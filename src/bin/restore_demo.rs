use pixel_restore::config::load_config;
use pixel_restore::image::io::{load_rgba_image, save_png, write_json_file, write_text_file};
use pixel_restore::raster::rasterize;
use pixel_restore::vector::to_svg;
use pixel_restore::{PixelRestorer, RestoreReport};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgba_image(&config.input_path)?;
    let restorer = PixelRestorer::new(config.restore_params.clone());
    let report = restorer
        .process(&image)
        .map_err(|e| format!("Restoration failed: {e}"))?;

    print_text_summary(&report);

    if let Some(path) = &config.output.svg_out {
        write_text_file(path, &to_svg(&report.document))?;
        println!("SVG document written to {}", path.display());
    }
    if let Some(path) = &config.output.png_out {
        let rendered = rasterize(&report.document, config.output.target_block_pixels)
            .map_err(|e| format!("Rasterization failed: {e}"))?;
        save_png(&rendered, path)?;
        println!(
            "PNG ({}x{}) written to {}",
            rendered.w,
            rendered.h,
            path.display()
        );
    }
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: restore_demo <config.json>".to_string()
}

fn print_text_summary(report: &RestoreReport) {
    println!("Restoration summary");
    println!("  block_size: {}", report.block_size);
    match &report.detection {
        Some(det) => {
            println!("  confidence: {:.3}", det.confidence);
            println!("\nCandidates (scored in {:.3} ms)", det.elapsed_ms);
            println!(
                "  {:>5} {:>10} {:>10} {:>10}",
                "block", "uniform", "boundary", "combined"
            );
            for s in &det.scores {
                println!(
                    "  {:>5} {:>10.4} {:>10.4} {:>10.4}",
                    s.block_size, s.uniformity, s.boundary_contrast, s.combined
                );
            }
        }
        None => println!("  detection skipped (explicit block size)"),
    }

    println!(
        "\nGrid: {}x{} cells, {} rect(s), palette={}",
        report.grid_cols, report.grid_rows, report.rect_count, report.palette_size
    );
    let t = &report.timings;
    println!(
        "Timings (ms): detect={:.3} extract={:.3} emit={:.3} total={:.3}",
        t.detect_ms, t.extract_ms, t.emit_ms, t.total_ms
    );
}
