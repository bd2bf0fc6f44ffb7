use crate::error::{MenuError, MenuResult};

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<[u8; 4]> for TextBrush {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Measured extent of a shaped line, from Parley line metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Stateful helper for shaping label lines. Fonts are registered once via
/// [`TextLayoutEngine::register`]; each layout call then selects the font
/// by the family name that registration returned.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register a font blob into the collection and return its primary
    /// family name. Call once per font per run; the blob is multi-megabyte
    /// for CJK faces and must not be re-registered per label.
    pub fn register(&mut self, font_bytes: &[u8]) -> MenuResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            MenuError::render("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MenuError::render("registered font family has no name"))?
            .to_string();
        Ok(family_name)
    }

    /// Shape a single unwrapped line in a previously registered family.
    pub fn layout_line(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
        brush: TextBrush,
    ) -> MenuResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MenuError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Bounding box of a built layout: max line advance by summed line heights.
pub fn measure(layout: &parley::Layout<TextBrush>) -> TextExtent {
    let mut width = 0.0f64;
    let mut height = 0.0f64;
    for line in layout.lines() {
        let m = line.metrics();
        width = width.max(f64::from(m.advance));
        height += f64::from(m.ascent + m.descent + m.leading);
    }
    TextExtent { width, height }
}
