use crate::{
    error::{MenuError, MenuResult},
    fonts::FontSet,
    gradient,
    model::{ButtonSpec, ColorScheme, MenuConfig},
    text::{self, TextBrush, TextLayoutEngine},
};

/// Finished menu raster in straight RGB8, ready for PNG encoding.
#[derive(Clone, Debug)]
pub struct MenuImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB bytes, `width * height * 3` long.
    pub data: Vec<u8>,
}

/// Draws one scheme's menu: gradient base, bordered button grid, bilingual
/// labels. Owns the Parley contexts and the `vello_cpu` font handles; both
/// fonts are registered and wrapped once per run, not once per label.
pub struct MenuCompositor<'a> {
    config: &'a MenuConfig,
    engine: TextLayoutEngine,
    primary_family: String,
    secondary_family: String,
    primary_font: vello_cpu::peniko::FontData,
    secondary_font: vello_cpu::peniko::FontData,
}

impl<'a> MenuCompositor<'a> {
    /// Fails when either font blob yields no usable family, which makes the
    /// whole run unrenderable before any scheme is attempted.
    pub fn new(config: &'a MenuConfig, fonts: &FontSet) -> MenuResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let primary_family = engine.register(&fonts.primary)?;
        let secondary_family = engine.register(&fonts.secondary)?;

        let primary_font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(fonts.primary.clone()),
            0,
        );
        let secondary_font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(fonts.secondary.clone()),
            0,
        );
        Ok(Self {
            config,
            engine,
            primary_family,
            secondary_family,
            primary_font,
            secondary_font,
        })
    }

    /// Render the full canvas for one scheme.
    #[tracing::instrument(skip(self), fields(scheme = %scheme.name))]
    pub fn compose(&mut self, scheme: &ColorScheme) -> MenuResult<MenuImage> {
        let width = self.config.canvas.width;
        let height = self.config.canvas.height;
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| MenuError::validation("canvas width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| MenuError::validation("canvas height exceeds u16"))?;

        let (start, end) = scheme.gradient()?;
        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        gradient::fill_vertical(pixmap.data_as_u8_slice_mut(), width, height, start, end)?;

        let config = self.config;
        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        for button in &config.buttons {
            self.draw_button(&mut ctx, button)?;
        }
        ctx.flush();
        // The context composites over the gradient already in the pixmap.
        ctx.render_to_pixmap(&mut pixmap);

        // The base is fully opaque, so premultiplied RGBA equals straight
        // RGB once the alpha byte is dropped.
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for px in pixmap.data_as_u8_slice().chunks_exact(4) {
            data.extend_from_slice(&px[..3]);
        }
        Ok(MenuImage {
            width,
            height,
            data,
        })
    }

    fn draw_button(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        button: &ButtonSpec,
    ) -> MenuResult<()> {
        self.draw_outline(ctx, button);

        let center = button.center();
        // Fixed visual bias: the label block sits 40px above the true
        // center, not at a metrics-derived position.
        let anchor_y = center.y - self.config.label_raise_px;
        let brush = TextBrush::from(self.config.text_rgba);

        let primary = self.engine.layout_line(
            &button.primary,
            &self.primary_family,
            self.config.primary_size_px,
            brush,
        )?;
        let primary_extent = text::measure(&primary);
        draw_layout(
            ctx,
            &self.primary_font,
            &primary,
            center.x - primary_extent.width / 2.0,
            anchor_y - primary_extent.height / 2.0,
        );

        let secondary = self.engine.layout_line(
            &button.secondary,
            &self.secondary_family,
            self.config.secondary_size_px,
            brush,
        )?;
        let secondary_extent = text::measure(&secondary);
        draw_layout(
            ctx,
            &self.secondary_font,
            &secondary,
            center.x - secondary_extent.width / 2.0,
            anchor_y + primary_extent.height + self.config.label_gap_px,
        );

        Ok(())
    }

    fn draw_outline(&self, ctx: &mut vello_cpu::RenderContext, button: &ButtonSpec) {
        let [r, g, b, a] = self.config.outline_rgba;
        let t = self.config.outline_width_px;
        let bounds = button.bounds();

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));

        // Four edge strips inside the bounds. Left/right stop short of the
        // top/bottom strips so the translucent paint never blends twice.
        let (x0, y0, x1, y1) = (bounds.x0, bounds.y0, bounds.x1, bounds.y1);
        for strip in [
            kurbo::Rect::new(x0, y0, x1, y0 + t),
            kurbo::Rect::new(x0, y1 - t, x1, y1),
            kurbo::Rect::new(x0, y0 + t, x0 + t, y1 - t),
            kurbo::Rect::new(x1 - t, y0 + t, x1, y1 - t),
        ] {
            ctx.fill_rect(&rect_to_cpu(strip));
        }
    }
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrush>,
    left: f64,
    top: f64,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((left, top)));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn rect_to_cpu(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}
