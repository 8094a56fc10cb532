use std::fmt::{self, Write};

use glam::DVec2;

use super::Num;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    MoveTo(DVec2),
    LineTo(DVec2),
    Close,
}

/// Outline of a path in drawing (y-up) coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<Command>,
}

impl PathData {
    /// Empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight segment to `p`. Starts a subpath if none is open.
    pub fn line_to(&mut self, p: DVec2) -> &mut Self {
        if self.commands.is_empty() {
            self.commands.push(Command::MoveTo(p));
        } else {
            self.commands.push(Command::LineTo(p));
        }
        self
    }

    /// Segments through every point in order.
    pub fn line_through(&mut self, points: &[DVec2]) -> &mut Self {
        for &p in points {
            let _ = self.line_to(p);
        }
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(Command::Close);
        self
    }

    /// Closed polygon through `points`.
    #[must_use]
    pub fn polygon(points: &[DVec2]) -> Self {
        let mut data = Self::new();
        let _ = data.line_through(points).close();
        data
    }

    /// Whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point the path visits, in order.
    #[must_use]
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            Command::MoveTo(p) | Command::LineTo(p) => Some(p),
            Command::Close => None,
        })
    }

    pub(super) fn write_d(&self, out: &mut String) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match *command {
                Command::MoveTo(p) => {
                    write!(out, "M{},{}", Num(p.x), Num(-p.y))?;
                }
                Command::LineTo(p) => {
                    write!(out, "L{},{}", Num(p.x), Num(-p.y))?;
                }
                Command::Close => out.push('Z'),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_flips_y_and_closes() {
        let data = PathData::polygon(&[
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.5),
            DVec2::new(0.0, 1.0),
        ]);
        let mut d = String::new();
        data.write_d(&mut d).unwrap();
        assert_eq!(d, "M0,0 L1,-0.5 L0,-1 Z");
    }

    #[test]
    fn line_to_on_empty_path_moves() {
        let mut data = PathData::new();
        let _ = data.line_to(DVec2::ONE).line_to(DVec2::ZERO);
        assert_eq!(data.points().count(), 2);
        let mut d = String::new();
        data.write_d(&mut d).unwrap();
        assert!(d.starts_with("M1,-1"));
    }
}
