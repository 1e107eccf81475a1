use crate::core::{Demo, Point, Rectangle, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RectangleReport {
    pub corners: (Point, Point),
    pub area: i128,
    pub valid: bool,
}

pub struct RectangleDemo {
    rect: Rectangle,
}

impl RectangleDemo {
    pub fn new(rect: Rectangle) -> Self {
        Self { rect }
    }
}

impl Default for RectangleDemo {
    fn default() -> Self {
        let top_left = Point::new(0, 10);
        let bottom_right = Point::new(5, 0);
        Self::new(Rectangle::new(top_left, bottom_right))
    }
}

impl Demo for RectangleDemo {
    type Report = RectangleReport;

    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn execute(&self) -> RectangleReport {
        RectangleReport {
            corners: self.rect.corners(),
            area: self.rect.area(),
            valid: self.rect.is_valid(),
        }
    }

    fn render_text(
        &self,
        report: &RectangleReport,
        out: &mut dyn Write,
        _err: &mut dyn Write,
    ) -> Result<()> {
        writeln!(out, "Area: {}", report.area)?;
        if report.valid {
            writeln!(out, "Valid rectangle")?;
        } else {
            writeln!(out, "Invalid rectangle")?;
        }
        Ok(())
    }
}
