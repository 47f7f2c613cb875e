//! Drawing commands for the clock screen.
//!
//! Composition is a pure function of the frame, the theme and the layout: the
//! same input always yields the same command list.

use crate::{
    angle::{self, HandAngles},
    geometry::Point,
    layout::{Layout, TextBox},
    theme::{Bgra, HandStyle, Theme, TickStyle},
    time::ClockTime,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Bgra),
    RadialGradient {
        center: Point,
        radius: f32,
        inner: Bgra,
        outer: Bgra,
    },
}

impl Paint {
    pub fn color_at(&self, p: Point) -> Bgra {
        match *self {
            Self::Solid(color) => color,
            Self::RadialGradient {
                center,
                radius,
                inner,
                outer,
            } => {
                if radius <= 0.0 {
                    return outer;
                }
                inner.lerp(outer, p.distance_to(center) / radius)
            }
        }
    }

    fn rotated(self, pivot: Point, degrees: f32) -> Self {
        match self {
            Self::Solid(_) => self,
            Self::RadialGradient {
                center,
                radius,
                inner,
                outer,
            } => Self::RadialGradient {
                center: center.rotate_about(pivot, degrees),
                radius,
                inner,
                outer,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleStyle {
    Fill,
    Stroke(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    Normal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
        style: CircleStyle,
    },
    /// Always drawn with round caps.
    Line {
        start: Point,
        end: Point,
        width: f32,
        color: Bgra,
    },
    RoundedRect {
        origin: Point,
        size: (f32, f32),
        corner_radius: f32,
        paint: Paint,
    },
    /// Centered horizontally within `width`.
    Text {
        text: String,
        origin: Point,
        width: f32,
        size: f32,
        color: Bgra,
        weight: FontWeight,
    },
}

#[derive(Debug, Clone, Copy)]
struct Rotation {
    pivot: Point,
    degrees: f32,
}

#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
    rotations: Vec<Rotation>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn extend(&mut self, other: Scene) {
        self.commands.extend(other.commands);
    }

    /// Everything drawn inside `draw` is rotated by `degrees` about `pivot`.
    pub fn rotate(&mut self, degrees: f32, pivot: Point, draw: impl FnOnce(&mut Self)) {
        self.rotations.push(Rotation { pivot, degrees });
        draw(self);
        self.rotations.pop();
    }

    fn transform(&self, p: Point) -> Point {
        // innermost rotation applies first
        self.rotations
            .iter()
            .rev()
            .fold(p, |p, r| p.rotate_about(r.pivot, r.degrees))
    }

    fn transform_paint(&self, paint: Paint) -> Paint {
        self.rotations
            .iter()
            .rev()
            .fold(paint, |paint, r| paint.rotated(r.pivot, r.degrees))
    }

    pub fn circle(&mut self, center: Point, radius: f32, paint: Paint, style: CircleStyle) {
        self.commands.push(DrawCommand::Circle {
            center: self.transform(center),
            radius,
            paint: self.transform_paint(paint),
            style,
        });
    }

    pub fn line(&mut self, start: Point, end: Point, width: f32, color: Bgra) {
        self.commands.push(DrawCommand::Line {
            start: self.transform(start),
            end: self.transform(end),
            width,
            color,
        });
    }

    /// Rounded rectangles are axis aligned and ignore rotation.
    pub fn rounded_rect(
        &mut self,
        origin: Point,
        size: (f32, f32),
        corner_radius: f32,
        paint: Paint,
    ) {
        self.commands.push(DrawCommand::RoundedRect {
            origin,
            size,
            corner_radius,
            paint,
        });
    }

    pub fn text(&mut self, text: &str, text_box: TextBox, color: Bgra, weight: FontWeight) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin: text_box.origin,
            width: text_box.width,
            size: text_box.font_size,
            color,
            weight,
        });
    }
}

/// Everything the hands layer needs for one redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub time: ClockTime,
    pub time_text: String,
    pub date_text: String,
}

/// Static part of the screen: backdrop, face, bezel and tick marks.
pub fn compose_dial(theme: &Theme, layout: &Layout) -> Scene {
    let mut scene = Scene::new();
    let geometry = &theme.geometry;
    let center = layout.center;
    let radius = layout.dial_radius;

    let (width, height) = (layout.width as f32, layout.height as f32);
    scene.rounded_rect(
        Point::new(0.0, 0.0),
        (width, height),
        layout.card_corner,
        Paint::RadialGradient {
            center,
            radius: width.max(height),
            inner: theme.backdrop[0],
            outer: theme.backdrop[1],
        },
    );

    // Face box
    scene.circle(
        center,
        layout.face_radius,
        Paint::RadialGradient {
            center,
            radius: layout.face_radius,
            inner: theme.face[0],
            outer: theme.face[1],
        },
        CircleStyle::Fill,
    );

    let rim_radius = radius - layout.px(geometry.rim_inset);
    scene.circle(
        center,
        rim_radius,
        Paint::RadialGradient {
            center,
            radius: rim_radius,
            inner: theme.dial[0],
            outer: theme.dial[1],
        },
        CircleStyle::Fill,
    );
    scene.circle(
        center,
        radius,
        Paint::Solid(theme.bezel),
        CircleStyle::Stroke(layout.px(geometry.bezel_width)),
    );
    scene.circle(
        center,
        rim_radius,
        Paint::Solid(theme.rim),
        CircleStyle::Stroke(layout.px(geometry.rim_width)),
    );

    for angle in angle::hour_ticks() {
        let style = &geometry.hour_tick;
        tick_mark(&mut scene, layout, angle, style, theme.hour_tick);
    }
    for angle in angle::minute_ticks() {
        let style = &geometry.minute_tick;
        tick_mark(&mut scene, layout, angle, style, theme.minute_tick);
    }

    scene
}

fn tick_mark(scene: &mut Scene, layout: &Layout, angle: f32, style: &TickStyle, color: Bgra) {
    let radius = layout.dial_radius;
    let start = Point::polar(layout.center, radius - layout.px(style.inner_inset), angle);
    let end = Point::polar(layout.center, radius - layout.px(style.outer_inset), angle);
    scene.line(start, end, layout.px(style.width), color);
}

/// Moving part of the screen: hands, center cap and the text card.
pub fn compose_hands(frame: &Frame, theme: &Theme, layout: &Layout) -> Scene {
    let mut scene = Scene::new();
    let geometry = &theme.geometry;
    let angles = HandAngles::from(frame.time);

    let hands = [
        (angles.hour, &geometry.hour_hand, theme.hand),
        (angles.minute, &geometry.minute_hand, theme.hand),
        (angles.second, &geometry.second_hand, theme.accent),
    ];
    for (angle, style, color) in hands {
        hand(&mut scene, layout, angle, style, color, theme.hand_shadow);
    }

    let [outer, middle, inner] = geometry.cap_radii;
    let center = layout.center;
    for (radius, color) in [
        (outer, theme.bezel),
        (middle, theme.accent),
        (inner, theme.face[0]),
    ] {
        scene.circle(center, layout.px(radius), Paint::Solid(color), CircleStyle::Fill);
    }

    scene.rounded_rect(
        layout.card_origin,
        layout.card_size,
        layout.card_corner,
        Paint::Solid(theme.card),
    );
    scene.text(
        &frame.time_text,
        layout.time_text,
        theme.time_text,
        FontWeight::Light,
    );
    scene.text(
        &frame.date_text,
        layout.date_text,
        theme.date_text,
        FontWeight::Normal,
    );

    scene
}

/// Hands are laid out along the 3 o'clock axis and rotated into place.
fn hand(
    scene: &mut Scene,
    layout: &Layout,
    angle: f32,
    style: &HandStyle,
    color: Bgra,
    shadow: Bgra,
) {
    let center = layout.center;
    let tip = Point::new(center.x + layout.dial_radius * style.length, center.y);

    scene.rotate(angle, center, |scene| {
        if style.shadow_width > 0.0 {
            let offset = layout.px(style.shadow_offset);
            scene.line(
                center.offset(offset, offset),
                tip.offset(offset, offset),
                layout.px(style.shadow_width),
                shadow,
            );
        }
        if style.tail > 0.0 {
            let tail = Point::new(center.x - layout.dial_radius * style.tail, center.y);
            scene.line(center, tail, layout.px(style.width), color);
        }
        scene.line(center, tip, layout.px(style.width), color);
    });
}

pub fn compose_screen(frame: &Frame, theme: &Theme, layout: &Layout) -> Scene {
    let mut scene = compose_dial(theme, layout);
    scene.extend(compose_hands(frame, theme, layout));
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    fn frame(hour: u32, minute: u32, second: u32) -> Frame {
        Frame {
            time: ClockTime::new(hour, minute, second).unwrap(),
            time_text: format!("{:02}:{:02}:{:02}", hour, minute, second),
            date_text: "Friday, March 01, 2024".to_owned(),
        }
    }

    fn lines(scene: &Scene) -> Vec<(Point, Point, f32, Bgra)> {
        scene
            .commands()
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Line {
                    start,
                    end,
                    width,
                    color,
                } => Some((start, end, width, color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn dial_has_twelve_hour_and_forty_eight_minute_ticks() {
        let theme = Theme::graphite();
        let layout = Layout::new(384);
        let ticks = lines(&compose_dial(&theme, &layout));

        let hour = ticks.iter().filter(|t| t.3 == theme.hour_tick).count();
        let minute = ticks.iter().filter(|t| t.3 == theme.minute_tick).count();
        assert_eq!(hour, angle::HOUR_TICKS);
        assert_eq!(minute, angle::MINUTE_TICKS);
    }

    #[test]
    fn first_hour_tick_sits_at_one_o_clock() {
        let theme = Theme::graphite();
        let layout = Layout::new(384);
        let ticks = lines(&compose_dial(&theme, &layout));
        let (_, end, width, _) = ticks[0];

        let expected = Point::polar(layout.center, layout.dial_radius - 20.0, -60.0);
        assert_abs_diff_eq!(end.x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(end.y, expected.y, epsilon = 1e-3);
        assert_abs_diff_eq!(width, 4.0);
    }

    #[test]
    fn second_hand_at_zero_points_straight_up() {
        let theme = Theme::graphite();
        let layout = Layout::new(384);
        let scene = compose_hands(&frame(0, 0, 0), &theme, &layout);

        let (start, tip, _, _) = *lines(&scene)
            .iter()
            .filter(|l| l.3 == theme.accent)
            .last()
            .unwrap();
        assert_eq!(start, layout.center);
        assert_abs_diff_eq!(tip.x, layout.center.x, epsilon = 1e-3);
        assert_abs_diff_eq!(tip.y, layout.center.y - layout.dial_radius * 0.75, epsilon = 1e-3);
    }

    #[test]
    fn second_hand_tail_points_away_from_the_tip() {
        let theme = Theme::graphite();
        let layout = Layout::new(384);
        let scene = compose_hands(&frame(0, 0, 15), &theme, &layout);

        let accent: Vec<_> = lines(&scene)
            .into_iter()
            .filter(|l| l.3 == theme.accent)
            .collect();
        let (_, tail, _, _) = accent[0];
        let (_, tip, _, _) = accent[1];
        assert!(tip.x > layout.center.x);
        assert!(tail.x < layout.center.x);
    }

    #[test]
    fn hour_hand_creeps_towards_the_next_hour() {
        let theme = Theme::graphite();
        let layout = Layout::new(384);
        let scene = compose_hands(&frame(3, 30, 0), &theme, &layout);

        // shadow first, then the hand itself
        let (_, tip, width, color) = lines(&scene)[1];
        assert_eq!(color, theme.hand);
        assert_abs_diff_eq!(width, 8.0);
        let expected = Point::polar(layout.center, layout.dial_radius * 0.45, 15.0);
        assert_abs_diff_eq!(tip.x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(tip.y, expected.y, epsilon = 1e-3);
    }

    #[test]
    fn shadow_rotates_with_its_hand() {
        let theme = Theme::graphite();
        let layout = Layout::new(384);
        let scene = compose_hands(&frame(0, 15, 0), &theme, &layout);

        // minute hand at 3 o'clock is unrotated, so the shadow keeps its offset
        let (shadow_start, _, _, color) = lines(&scene)[2];
        assert_eq!(color, theme.hand_shadow);
        assert_abs_diff_eq!(shadow_start.x, layout.center.x + 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(shadow_start.y, layout.center.y + 2.0, epsilon = 1e-3);
    }

    #[test]
    fn nested_rotations_compose() {
        let mut scene = Scene::new();
        let pivot = Point::new(0.0, 0.0);
        scene.rotate(45.0, pivot, |scene| {
            scene.rotate(45.0, pivot, |scene| {
                scene.line(pivot, Point::new(10.0, 0.0), 1.0, Bgra::TRANSPARENT);
            });
        });

        let DrawCommand::Line { end, .. } = scene.commands()[0] else {
            panic!("expected a line");
        };
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(end.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn composing_twice_is_identical() {
        for theme in [Theme::graphite(), Theme::mocha()] {
            let layout = Layout::new(448);
            let frame = frame(7, 41, 13);
            assert_eq!(
                compose_screen(&frame, &theme, &layout).commands(),
                compose_screen(&frame, &theme, &layout).commands()
            );
        }
    }

    #[test]
    fn text_card_carries_both_strings() {
        let theme = Theme::graphite();
        let layout = Layout::new(384);
        let scene = compose_hands(&frame(10, 15, 30), &theme, &layout);
        let texts: Vec<&str> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["10:15:30", "Friday, March 01, 2024"]);
    }

    #[test]
    fn gradient_interpolates_by_distance() {
        let inner = Bgra::from_rgba(0, 0, 0, 255);
        let outer = Bgra::from_rgba(200, 200, 200, 255);
        let paint = Paint::RadialGradient {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            inner,
            outer,
        };
        assert_eq!(paint.color_at(Point::new(0.0, 0.0)), inner);
        assert_eq!(paint.color_at(Point::new(0.0, 5.0)), Bgra::from_rgba(100, 100, 100, 255));
        assert_eq!(paint.color_at(Point::new(30.0, 0.0)), outer);
    }
}
