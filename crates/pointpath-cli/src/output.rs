//! Output formatting for command results.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use pointpath_lib::{PathRenderMode, PathSummary, Point, PointUnion};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly listing.
    #[default]
    Text,
    /// Single-line rendering where supported.
    Compact,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Write a path summary to `out`.
    pub fn write_path(self, out: &mut impl Write, summary: &PathSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                out.write_all(summary.render(PathRenderMode::PlainText).as_bytes())
            }
            OutputFormat::Compact => {
                out.write_all(summary.render(PathRenderMode::Compact).as_bytes())
            }
            OutputFormat::Json => write_json(out, summary),
        }
    }

    /// Write a list of points to `out`.
    pub fn write_points(self, out: &mut impl Write, points: &[Point]) -> io::Result<()> {
        match self {
            OutputFormat::Json => write_json(out, &points),
            OutputFormat::Compact => {
                let ids: Vec<&str> = points.iter().map(Point::id).collect();
                writeln!(out, "{}", ids.join(" "))
            }
            OutputFormat::Text => {
                writeln!(out, "Points: {}", points.len())?;
                for point in points {
                    writeln!(out, "- {} ({:.2}, {:.2})", point.id(), point.x(), point.y())?;
                }
                Ok(())
            }
        }
    }

    /// Write a list of unions to `out`.
    pub fn write_unions(self, out: &mut impl Write, unions: &[PointUnion]) -> io::Result<()> {
        match self {
            OutputFormat::Json => write_json(out, &unions),
            OutputFormat::Compact => {
                for union in unions {
                    writeln!(
                        out,
                        "{}-{} {:.2}",
                        union.point1(),
                        union.point2(),
                        union.distance()
                    )?;
                }
                Ok(())
            }
            OutputFormat::Text => {
                writeln!(out, "Unions: {}", unions.len())?;
                for union in unions {
                    writeln!(
                        out,
                        "- {} <-> {}: {:.2} [{}]",
                        union.point1(),
                        union.point2(),
                        union.distance(),
                        union.id()
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Write the Euclidean distance between two points to `out`.
    pub fn write_distance(
        self,
        out: &mut impl Write,
        from: &Point,
        to: &Point,
        distance: f64,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Json => write_json(
                out,
                &DistanceReport {
                    from: from.id(),
                    to: to.id(),
                    distance,
                },
            ),
            OutputFormat::Compact => writeln!(out, "{distance:.2}"),
            OutputFormat::Text => writeln!(
                out,
                "Distance: {} -> {} = {:.2}",
                from.id(),
                to.id(),
                distance
            ),
        }
    }
}

#[derive(Debug, Serialize)]
struct DistanceReport<'a> {
    from: &'a str,
    to: &'a str,
    distance: f64,
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("write succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    fn points() -> Vec<Point> {
        vec![
            Point::new("A", 0.0, 0.0).unwrap(),
            Point::new("B", 3.0, 4.0).unwrap(),
        ]
    }

    #[test]
    fn text_points_listing() {
        let text = render(|out| OutputFormat::Text.write_points(out, &points()));
        assert!(text.starts_with("Points: 2\n"));
        assert!(text.contains("- B (3.00, 4.00)"));
    }

    #[test]
    fn json_points_listing() {
        let json = render(|out| OutputFormat::Json.write_points(out, &points()));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["id"], "B");
        assert_eq!(value[1]["x"], 3.0);
    }

    #[test]
    fn compact_distance_is_bare_number() {
        let points = points();
        let text = render(|out| {
            OutputFormat::Compact.write_distance(out, &points[0], &points[1], 5.0)
        });
        assert_eq!(text, "5.00\n");
    }

    #[test]
    fn text_unions_listing() {
        let points = points();
        let union = PointUnion::between(&points[0], &points[1]).unwrap();
        let text =
            render(|out| OutputFormat::Text.write_unions(out, std::slice::from_ref(&union)));
        assert!(text.contains("- A <-> B: 5.00"));
    }
}
