//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function
//--------------------------------------------------------------------

extern crate stroke_svg_loader;

use std::io::prelude::*;
use std::io;
use stroke_processor::{SignificanceTable, BezierSpline, Reduction, StrokeBuilder, StrokeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    print!("Enter address of the path definition file: ");
    io::stdout().flush()?;

    let mut path = String::new();
    io::stdin().read_line(&mut path)?;
    let data = std::fs::read_to_string(path.trim())?;
    let strokes = stroke_svg_loader::polylines_from_path_data(&data)?;
    log::info!("loaded {} strokes", strokes.len());

    let then = std::time::Instant::now();
    for (i, raw) in strokes.iter().enumerate() {
        // Both reduction strategies, side by side
        let table = SignificanceTable::new(raw)?;
        let by_area = table.reduce(1.0);
        let by_deviation = Reduction::Deviation(1.0).apply(raw)?;

        let fitted = if raw.len() >= 3 { Some(BezierSpline::fit(raw)?) } else { None };
        log::info!("stroke {}: {} points, {} by area, {} by deviation, {} segments", i, raw.len(),
            by_area.len(), by_deviation.len(), fitted.as_ref().map_or(0, |s| s.len()));

        let mut builder = StrokeBuilder::new(raw[0], StrokeConfig::default());
        for &p in &raw[1..] { builder.add_point(p); }
        let stroke = builder.finish()?;
        log::debug!("stroke {} covers {}", i, stroke.bounds);

        if let Some(spline) = &stroke.spline {
            println!("{}", stroke_svg_loader::spline_to_path_data(spline));
        } else {
            println!("{}", stroke_svg_loader::polyline_to_path_data(&stroke.points));
        }
    }
    let now = std::time::Instant::now();
    println!("Total processing time: {:?}", now.duration_since(then));
    println!();

    Ok(())
}
