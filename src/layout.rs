use crate::geometry::Point;

/// Side of the face box in reference units, every other measure scales with it.
const FACE_BOX: f32 = 320.0;
const FACE_PADDING: f32 = 24.0;
const FACE_TO_CARD: f32 = 48.0;
const CARD_PADDING: f32 = 28.0;
const CARD_CORNER: f32 = 20.0;
const TIME_FONT: f32 = 42.0;
const DATE_FONT: f32 = 16.0;
const TIME_TO_DATE: f32 = 12.0;
const LINE_HEIGHT: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub origin: Point,
    pub width: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    /// Pixels per reference unit.
    pub scale: f32,
    pub center: Point,
    pub face_radius: f32,
    pub dial_radius: f32,
    pub card_origin: Point,
    pub card_size: (f32, f32),
    pub card_corner: f32,
    pub time_text: TextBox,
    pub date_text: TextBox,
}

impl Layout {
    pub fn new(width: u32) -> Self {
        let width_f = width as f32;
        let margin = (width_f / 12.0).round();
        let face_side = width_f - 2.0 * margin;
        let scale = face_side / FACE_BOX;

        let center = Point::new(width_f / 2.0, margin + face_side / 2.0);
        let face_radius = face_side / 2.0;
        let dial_radius = face_radius - FACE_PADDING * scale;

        let card_top = margin + face_side + FACE_TO_CARD * scale;
        let card_padding = CARD_PADDING * scale;
        let text_width = face_side - 2.0 * card_padding;

        let time_font = TIME_FONT * scale;
        let date_font = DATE_FONT * scale;
        let time_top = card_top + card_padding;
        let date_top = time_top + time_font * LINE_HEIGHT + TIME_TO_DATE * scale;
        let card_height = 2.0 * card_padding
            + time_font * LINE_HEIGHT
            + TIME_TO_DATE * scale
            + date_font * LINE_HEIGHT;

        let height = (card_top + card_height + margin).ceil() as i32;

        Self {
            width: width as i32,
            height,
            scale,
            center,
            face_radius,
            dial_radius,
            card_origin: Point::new(margin, card_top),
            card_size: (face_side, card_height),
            card_corner: CARD_CORNER * scale,
            time_text: TextBox {
                origin: Point::new(margin + card_padding, time_top),
                width: text_width,
                font_size: time_font,
            },
            date_text: TextBox {
                origin: Point::new(margin + card_padding, date_top),
                width: text_width,
                font_size: date_font,
            },
        }
    }

    pub fn line_height(font_size: f32) -> f32 {
        font_size * LINE_HEIGHT
    }

    /// Converts reference units to pixels.
    pub fn px(&self, units: f32) -> f32 {
        units * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_width_has_unit_scale() {
        // 320 + 2 * 32 margin
        let layout = Layout::new(384);
        assert_relative_eq!(layout.scale, 1.0);
        assert_relative_eq!(layout.dial_radius, 160.0 - 24.0);
        assert_relative_eq!(layout.px(45.0), 45.0);
    }

    #[test]
    fn card_sits_below_the_face() {
        let layout = Layout::new(448);
        let face_bottom = layout.center.y + layout.face_radius;
        assert!(layout.card_origin.y > face_bottom);
        assert!(layout.date_text.origin.y > layout.time_text.origin.y);

        let card_bottom = layout.card_origin.y + layout.card_size.1;
        assert!(card_bottom <= layout.height as f32);
        assert!(layout.height > layout.width);
    }

    #[test]
    fn face_is_horizontally_centered() {
        let layout = Layout::new(500);
        assert_relative_eq!(layout.center.x, 250.0);
        assert_relative_eq!(
            layout.card_origin.x + layout.card_size.0 / 2.0,
            layout.center.x
        );
    }
}
