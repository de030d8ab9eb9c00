//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Converts SVG path data to raw strokes, and writes reduced strokes
// and fitted curves back as path data
//--------------------------------------------------------------------

extern crate stroke_processor;
extern crate svg;

use std::fmt::Write;

use stroke_processor::*;
use svg::node::element::path::*;

fn process_update_relative(cmd: Vec2, relative: Position, last_value: &mut Vec2) -> Vec2 {
    let pos = match relative {
        Position::Absolute => cmd,
        Position::Relative => *last_value + cmd
    };

    *last_value = pos;
    pos
}

fn push_point(current: &mut Polyline, cmd: &[f32], pos: Position, last_value: &mut Vec2) {
    let v = Vec2::new(cmd[0] as Coord, cmd[1] as Coord);
    current.push(process_update_relative(v, pos, last_value));
}

// Every move-to starts a new polyline; curves only contribute their
// end points, since the strokes are sampled as straight segments
pub fn polylines_from_path_data(data: &str) -> svg::parser::Result<Vec<Polyline>> {
    let data = Data::parse(data)?;

    let mut last_value = Vec2::zero();
    let mut polylines = Vec::new();
    let mut current: Polyline = Vec::new();

    for command in data.iter() {
        match command {
            Command::Move(pos, params) => {
                for (i, cmd) in params.chunks_exact(2).enumerate() {
                    if i == 0 && !current.is_empty() {
                        polylines.push(std::mem::replace(&mut current, Vec::new()));
                    }
                    push_point(&mut current, cmd, *pos, &mut last_value);
                }
            }
            Command::Line(pos, params) => {
                for cmd in params.chunks_exact(2) { push_point(&mut current, cmd, *pos, &mut last_value); }
            }
            Command::HorizontalLine(pos, params) => {
                for cmd in params.iter() {
                    let v = if *pos == Position::Relative { 0.0 } else { last_value.y as f32 };
                    push_point(&mut current, &[*cmd, v], *pos, &mut last_value);
                }
            }
            Command::VerticalLine(pos, params) => {
                for cmd in params.iter() {
                    let h = if *pos == Position::Relative { 0.0 } else { last_value.x as f32 };
                    push_point(&mut current, &[h, *cmd], *pos, &mut last_value);
                }
            }
            Command::QuadraticCurve(pos, params) => {
                for cmd in params.chunks_exact(4) { push_point(&mut current, &cmd[2..], *pos, &mut last_value); }
            }
            Command::SmoothQuadraticCurve(pos, params) => {
                for cmd in params.chunks_exact(2) { push_point(&mut current, cmd, *pos, &mut last_value); }
            }
            Command::CubicCurve(pos, params) => {
                for cmd in params.chunks_exact(6) { push_point(&mut current, &cmd[4..], *pos, &mut last_value); }
            }
            Command::SmoothCubicCurve(pos, params) => {
                for cmd in params.chunks_exact(4) { push_point(&mut current, &cmd[2..], *pos, &mut last_value); }
            }
            Command::EllipticalArc(pos, params) => {
                for cmd in params.chunks_exact(7) { push_point(&mut current, &cmd[5..], *pos, &mut last_value); }
            }
            Command::Close => {
                if let Some(&first) = current.first() {
                    current.push(first);
                    last_value = first;
                }
            }
        }
    }
    if !current.is_empty() { polylines.push(current); }

    let count = polylines.len();
    polylines.retain(|p| p.len() >= 2);
    if polylines.len() < count {
        log::debug!("dropped {} polylines with fewer than two points", count - polylines.len());
    }

    Ok(polylines)
}

pub fn polyline_to_path_data(points: &[Vec2]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(out, "{}{},{}", cmd, p.x, p.y);
    }
    out
}

pub fn spline_to_path_data(spline: &BezierSpline) -> String {
    let mut out = String::new();
    if let Some(p) = spline.points().first() {
        let _ = write!(out, "M{},{}", p.x, p.y);
    }
    for c in spline.segments() {
        let _ = write!(out, " C{},{} {},{} {},{}", c.b.x, c.b.y, c.c.x, c.c.y, c.d.x, c.d.y);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_move_to() {
        let strokes = polylines_from_path_data("M0,0 L1,1 2,0 M5,5 l1,0 0,1").unwrap();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0], vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0)]);
        assert_eq!(strokes[1], vec![Vec2::new(5.0, 5.0), Vec2::new(6.0, 5.0), Vec2::new(6.0, 6.0)]);
    }

    #[test]
    fn implicit_line_after_move() {
        let strokes = polylines_from_path_data("M0,0 1,0 1,1").unwrap();
        assert_eq!(strokes, vec![vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]]);
    }

    #[test]
    fn axis_lines_and_close() {
        let strokes = polylines_from_path_data("M1,1 H4 v2 h-3 Z").unwrap();
        assert_eq!(strokes[0], vec![Vec2::new(1.0, 1.0), Vec2::new(4.0, 1.0), Vec2::new(4.0, 3.0),
            Vec2::new(1.0, 3.0), Vec2::new(1.0, 1.0)]);
    }

    #[test]
    fn curves_contribute_end_points() {
        let strokes = polylines_from_path_data("M0,0 C1,1 2,1 3,0 Q4,1 5,0").unwrap();
        assert_eq!(strokes[0], vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(5.0, 0.0)]);
    }

    #[test]
    fn lone_points_are_dropped() {
        let strokes = polylines_from_path_data("M3,3 M0,0 L1,0").unwrap();
        assert_eq!(strokes.len(), 1);
    }

    #[test]
    fn writes_path_data() {
        let pts = vec![Vec2::new(0.0, 0.0), Vec2::new(1.5, 2.0), Vec2::new(3.0, 0.0)];
        assert_eq!(polyline_to_path_data(&pts), "M0,0 L1.5,2 L3,0");

        let spline = BezierSpline::fit(&pts).unwrap();
        let data = spline_to_path_data(&spline);
        assert!(data.starts_with("M0,0 C"));
        assert_eq!(data.matches(" C").count(), 2);
        assert!(data.ends_with("3,0"));

        // The written polyline reads back the same
        assert_eq!(polylines_from_path_data(&polyline_to_path_data(&pts)).unwrap(), vec![pts]);
    }
}
