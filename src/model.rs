use crate::{
    color::Rgb8,
    error::{MenuError, MenuResult},
};

/// Full description of one generation run: canvas, color schemes, button
/// layout and typography. Hardcoded in [`MenuConfig::default`], but carried
/// as an explicit structure so tests can substitute layouts.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MenuConfig {
    pub canvas: CanvasSize,
    pub schemes: Vec<ColorScheme>,
    pub buttons: Vec<ButtonSpec>,
    /// Pixel size of the primary (CJK) label line.
    pub primary_size_px: f32,
    /// Pixel size of the secondary (Latin) label line.
    pub secondary_size_px: f32,
    /// Fixed upward bias of the label block from the button center.
    pub label_raise_px: f64,
    /// Gap between the primary and secondary line.
    pub label_gap_px: f64,
    pub outline_width_px: f64,
    /// Button outline color, straight RGBA.
    pub outline_rgba: [u8; 4],
    /// Label color, straight RGBA.
    pub text_rgba: [u8; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// One named color pairing; renders one output image.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ColorScheme {
    pub name: String,
    /// Gradient color at the top row, `#rrggbb`.
    pub start: String,
    /// Gradient color at the bottom row, `#rrggbb`.
    pub end: String,
}

impl ColorScheme {
    fn new(name: &str, start: &str, end: &str) -> Self {
        Self {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Parsed gradient endpoints. Malformed hex is rejected here, before
    /// any pixel work starts.
    pub fn gradient(&self) -> MenuResult<(Rgb8, Rgb8)> {
        Ok((Rgb8::from_hex(&self.start)?, Rgb8::from_hex(&self.end)?))
    }
}

/// Fixed geometry and bilingual text for one menu tile.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ButtonSpec {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub primary: String,
    pub secondary: String,
}

impl ButtonSpec {
    fn new(x: u32, y: u32, width: u32, height: u32, primary: &str, secondary: &str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }

    pub fn bounds(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width),
            f64::from(self.y) + f64::from(self.height),
        )
    }

    /// Button center with integer-division semantics (x + w/2).
    pub fn center(&self) -> kurbo::Point {
        kurbo::Point::new(
            f64::from(self.x + self.width / 2),
            f64::from(self.y + self.height / 2),
        )
    }

    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    fn overlaps(&self, other: &ButtonSpec) -> bool {
        let (ax1, ay1) = (
            u64::from(self.x) + u64::from(self.width),
            u64::from(self.y) + u64::from(self.height),
        );
        let (bx1, by1) = (
            u64::from(other.x) + u64::from(other.width),
            u64::from(other.y) + u64::from(other.height),
        );
        u64::from(self.x) < bx1
            && u64::from(other.x) < ax1
            && u64::from(self.y) < by1
            && u64::from(other.y) < ay1
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize {
                width: 2500,
                height: 1686,
            },
            schemes: vec![
                ColorScheme::new("purple", "#667eea", "#764ba2"),
                ColorScheme::new("green", "#10b981", "#059669"),
                ColorScheme::new("blue", "#3b82f6", "#2563eb"),
                ColorScheme::new("dark", "#1e293b", "#0f172a"),
            ],
            buttons: vec![
                ButtonSpec::new(0, 0, 833, 843, "上班打卡", "Clock In"),
                ButtonSpec::new(833, 0, 834, 843, "下班打卡", "Clock Out"),
                ButtonSpec::new(1667, 0, 833, 843, "人臉打卡", "Face Recognition"),
                ButtonSpec::new(0, 843, 833, 843, "薪資查詢", "Salary Info"),
                ButtonSpec::new(833, 843, 834, 843, "請假申請", "Leave Request"),
                ButtonSpec::new(1667, 843, 833, 843, "完整功能", "Full Features"),
            ],
            primary_size_px: 90.0,
            secondary_size_px: 45.0,
            label_raise_px: 40.0,
            label_gap_px: 30.0,
            outline_width_px: 3.0,
            outline_rgba: [255, 255, 255, 80],
            text_rgba: [255, 255, 255, 255],
        }
    }
}

impl MenuConfig {
    /// Check the run invariants: positive canvas, well-formed schemes, and
    /// buttons that tile the canvas with zero overlap and zero gap.
    pub fn validate(&self) -> MenuResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(MenuError::validation("canvas dimensions must be positive"));
        }
        if !self.primary_size_px.is_finite() || self.primary_size_px <= 0.0 {
            return Err(MenuError::validation("primary_size_px must be > 0"));
        }
        if !self.secondary_size_px.is_finite() || self.secondary_size_px <= 0.0 {
            return Err(MenuError::validation("secondary_size_px must be > 0"));
        }

        if self.schemes.is_empty() {
            return Err(MenuError::validation("at least one color scheme required"));
        }
        for scheme in &self.schemes {
            if scheme.name.is_empty() {
                return Err(MenuError::validation("scheme name must be non-empty"));
            }
            scheme.gradient()?;
        }

        let mut area_sum = 0u64;
        for (i, button) in self.buttons.iter().enumerate() {
            if button.width == 0 || button.height == 0 {
                return Err(MenuError::validation(format!(
                    "button {i} has a degenerate rectangle"
                )));
            }
            if u64::from(button.x) + u64::from(button.width) > u64::from(self.canvas.width)
                || u64::from(button.y) + u64::from(button.height) > u64::from(self.canvas.height)
            {
                return Err(MenuError::validation(format!(
                    "button {i} exceeds the canvas bounds"
                )));
            }
            for (j, other) in self.buttons.iter().enumerate().skip(i + 1) {
                if button.overlaps(other) {
                    return Err(MenuError::validation(format!(
                        "buttons {i} and {j} overlap"
                    )));
                }
            }
            area_sum += button.area();
        }
        // In-bounds + pairwise-disjoint + full area sum means the grid tiles exactly.
        let canvas_area = u64::from(self.canvas.width) * u64::from(self.canvas.height);
        if area_sum != canvas_area {
            return Err(MenuError::validation(format!(
                "buttons cover {area_sum} of {canvas_area} canvas pixels"
            )));
        }
        Ok(())
    }

    pub fn output_filename(&self, scheme: &ColorScheme) -> String {
        format!("richmenu_{}.png", scheme.name)
    }
}
