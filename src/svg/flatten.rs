use crate::errors::Malformation;
use crate::options::Options;
use crate::svg::bezier::CubicBezierSegment;
use crate::svg::command::{Command, CommandKind, Origin};
use crate::svg::geometry::{point, Point};
use crate::svg::subpath::Subpath;

/// Points joined by straight lines.
pub type Polyline = Vec<Point>;

/// Flatten every subpath of a path.
///
/// The first subpath starts at the origin and each of the others
/// where the previous one ended, so relative move-to commands chain.
pub fn flatten(subpaths: &[Subpath], options: &Options) -> Result<Vec<Polyline>, Malformation> {
    let mut polylines = Vec::with_capacity(subpaths.len());
    let mut current = Point::ORIGIN;
    for subpath in subpaths {
        let (polyline, end) = flatten_subpath(subpath, current, options)?;
        polylines.push(polyline);
        current = end;
    }
    Ok(polylines)
}

fn to_absolute(to: Point, origin: Origin, current: Point) -> Point {
    match origin {
        Origin::Absolute => to,
        Origin::Relative => current + to,
    }
}

/// Flatten one expanded subpath, starting at `current`.
/// Returns the polyline and the current point after its last command.
pub fn flatten_subpath(subpath: &[Command], mut current: Point, options: &Options)
                       -> Result<(Polyline, Point), Malformation> {
    let mut polyline = Vec::new();
    for command in subpath {
        let (kind, origin) = command.classify()?;
        match (kind, &command.numbers[..]) {
            (CommandKind::MoveTo, &[x, y]) | (CommandKind::LineTo, &[x, y]) => {
                current = to_absolute(point(x, y), origin, current);
                polyline.push(current);
            }
            (CommandKind::HorizontalLineTo, &[x]) => {
                current = current.with_x(match origin {
                    Origin::Absolute => x,
                    Origin::Relative => current.x + x,
                });
                polyline.push(current);
            }
            (CommandKind::VerticalLineTo, &[y]) => {
                current = current.with_y(match origin {
                    Origin::Absolute => y,
                    Origin::Relative => current.y + y,
                });
                polyline.push(current);
            }
            (CommandKind::CurveTo, &[x1, y1, x2, y2, x, y]) => {
                let curve = CubicBezierSegment {
                    from: current,
                    ctrl1: to_absolute(point(x1, y1), origin, current),
                    ctrl2: to_absolute(point(x2, y2), origin, current),
                    to: to_absolute(point(x, y), origin, current),
                };
                let steps = curve.step_count(options.resolution, options.max_steps);
                log::trace!("curve {:?} flattened in {} steps", curve, steps);
                polyline.extend(curve.flattened(steps));
                current = curve.to;
            }
            (CommandKind::ClosePath, &[]) => {
                if let Some(&first) = polyline.first() {
                    if first != current {
                        polyline.push(first);
                    }
                    current = first;
                }
            }
            (kind, numbers) => {
                return Err(Malformation::Unexpanded {
                    letter: command.letter,
                    expected: kind.arity(),
                    found: numbers.len(),
                })
            }
        }
    }
    Ok((polyline, current))
}
