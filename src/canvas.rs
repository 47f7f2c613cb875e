use cosmic_text::{Align, Attrs, Buffer, Color, FontSystem, Metrics, Shaping, SwashCache, Weight};

use crate::{
    canvas_primitives::CanvasPrimitives,
    geometry::Point,
    layout::Layout,
    scene::{CircleStyle, DrawCommand, FontWeight, Paint, Scene},
    theme::Bgra,
};

/// Rasterizes scenes. The dial is drawn once and cached, every redraw starts
/// from a copy of it.
pub struct Canvas {
    pub primitives: CanvasPrimitives,
    dial_cache: Vec<u8>,
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            primitives: CanvasPrimitives::new(width, height),
            dial_cache: Vec::new(),
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    pub fn init(&mut self, dial: &Scene) {
        self.primitives.clear();
        self.render(dial);
        self.dial_cache = self.primitives.pixel_data.clone();
    }

    pub fn draw(&mut self, hands: &Scene) {
        if self.dial_cache.len() == self.primitives.pixel_data.len() {
            self.primitives.pixel_data.copy_from_slice(&self.dial_cache);
        } else {
            self.primitives.clear();
        }
        self.render(hands);
    }

    pub fn render(&mut self, scene: &Scene) {
        for command in scene.commands() {
            match command {
                DrawCommand::Circle {
                    center,
                    radius,
                    paint,
                    style,
                } => match *style {
                    CircleStyle::Fill => self.fill_circle(*center, *radius, paint),
                    CircleStyle::Stroke(width) => {
                        self.stroke_circle(*center, *radius, width, paint)
                    }
                },
                DrawCommand::Line {
                    start,
                    end,
                    width,
                    color,
                } => self.draw_line(*start, *end, *width, *color),
                DrawCommand::RoundedRect {
                    origin,
                    size,
                    corner_radius,
                    paint,
                } => self.fill_rounded_rect(*origin, *size, *corner_radius, paint),
                DrawCommand::Text {
                    text,
                    origin,
                    width,
                    size,
                    color,
                    weight,
                } => self.draw_text(text, *origin, *width, *size, *color, *weight),
            }
        }
    }

    pub fn get_data(&self) -> &[u8] {
        self.primitives.get_data()
    }

    /// Visits every pixel in the box around `min..max` with its coverage, the
    /// signed distance to the shape mapped onto a one pixel ramp.
    fn shade<D, C>(&mut self, min: Point, max: Point, distance: D, color: C)
    where
        D: Fn(Point) -> f32,
        C: Fn(Point) -> Bgra,
    {
        let x0 = (min.x.floor() as i32 - 1).max(0);
        let y0 = (min.y.floor() as i32 - 1).max(0);
        let x1 = (max.x.ceil() as i32 + 1).min(self.primitives.width - 1);
        let y1 = (max.y.ceil() as i32 + 1).min(self.primitives.height - 1);

        for py in y0..=y1 {
            for px in x0..=x1 {
                let p = Point::new(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = (0.5 - distance(p)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.primitives
                        .blend_pixel(px, py, color(p), (coverage * 255.0).round() as u8);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let min = center.offset(-radius, -radius);
        let max = center.offset(radius, radius);
        self.shade(
            min,
            max,
            |p| p.distance_to(center) - radius,
            |p| paint.color_at(p),
        );
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, paint: &Paint) {
        let half = width / 2.0;
        let reach = radius + half;
        let min = center.offset(-reach, -reach);
        let max = center.offset(reach, reach);
        self.shade(
            min,
            max,
            |p| (p.distance_to(center) - radius).abs() - half,
            |p| paint.color_at(p),
        );
    }

    /// Round capped: the stroke is the set of points within `width / 2` of the
    /// segment.
    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Bgra) {
        let half = width / 2.0;
        let min = Point::new(start.x.min(end.x) - half, start.y.min(end.y) - half);
        let max = Point::new(start.x.max(end.x) + half, start.y.max(end.y) + half);
        self.shade(
            min,
            max,
            |p| p.distance_to_segment(start, end) - half,
            |_| color,
        );
    }

    fn fill_rounded_rect(&mut self, origin: Point, size: (f32, f32), corner: f32, paint: &Paint) {
        let (w, h) = size;
        let corner = corner.min(w / 2.0).min(h / 2.0).max(0.0);
        let half_w = w / 2.0;
        let half_h = h / 2.0;
        let center = origin.offset(half_w, half_h);
        let max = origin.offset(w, h);

        self.shade(
            origin,
            max,
            |p| {
                let qx = (p.x - center.x).abs() - (half_w - corner);
                let qy = (p.y - center.y).abs() - (half_h - corner);
                let outside = Point::new(qx.max(0.0), qy.max(0.0)).distance_to(Point::default());
                outside + qx.max(qy).min(0.0) - corner
            },
            |p| paint.color_at(p),
        );
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        width: f32,
        font_size: f32,
        color: Bgra,
        weight: FontWeight,
    ) {
        let buffer = self.create_drawing_buffer(text, font_size, width, weight);
        // Convert BGRA to RGBA
        let text_color = Color::rgba(color.r(), color.g(), color.b(), color.a());

        let (x, y) = (origin.x.round() as i32, origin.y.round() as i32);
        let primitives = &mut self.primitives;

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            text_color,
            |gx, gy, _w, _h, glyph_color| {
                Self::blend_glyph(primitives, x + gx, y + gy, glyph_color);
            },
        );
    }

    /// The glyph color's alpha already includes the text color's own alpha.
    fn blend_glyph(primitives: &mut CanvasPrimitives, x: i32, y: i32, glyph_color: Color) {
        let opaque = Bgra::from_rgba(glyph_color.r(), glyph_color.g(), glyph_color.b(), 255);
        primitives.blend_pixel(x, y, opaque, glyph_color.a());
    }

    fn create_drawing_buffer(
        &mut self,
        text: &str,
        font_size: f32,
        width: f32,
        weight: FontWeight,
    ) -> Buffer {
        let metrics = Metrics::new(font_size, Layout::line_height(font_size));
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(
            &mut self.font_system,
            Some(width),
            Some(self.primitives.height as f32),
        );
        let weight = match weight {
            FontWeight::Light => Weight::LIGHT,
            FontWeight::Normal => Weight::NORMAL,
        };
        buffer.set_text(
            &mut self.font_system,
            text,
            &Attrs::new().weight(weight),
            Shaping::Advanced,
        );
        for line in buffer.lines.iter_mut() {
            line.set_align(Some(Align::Center));
        }
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}
