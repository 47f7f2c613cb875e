#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point `distance` away from `center` in the direction of `degrees`,
    /// where 0° is 3 o'clock and angles grow clockwise on screen.
    pub fn polar(center: Self, distance: f32, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: center.x + distance * cos,
            y: center.y + distance * sin,
        }
    }

    pub fn rotate_about(self, pivot: Self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self {
            x: pivot.x + dx * cos - dy * sin,
            y: pivot.y + dx * sin + dy * cos,
        }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance_to(self, other: Self) -> f32 {
        Self::squared_distance(self, other).sqrt()
    }

    #[inline]
    pub fn squared_distance(a: Self, b: Self) -> f32 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        dx * dx + dy * dy
    }

    /// Distance from this point to the segment `start..end`.
    pub fn distance_to_segment(self, start: Self, end: Self) -> f32 {
        let seg_x = end.x - start.x;
        let seg_y = end.y - start.y;
        let len_sq = seg_x * seg_x + seg_y * seg_y;

        if len_sq == 0.0 {
            return self.distance_to(start);
        }

        let projected = (self.x - start.x) * seg_x + (self.y - start.y) * seg_y;
        let t = (projected / len_sq).clamp(0.0, 1.0);
        self.distance_to(Self::new(start.x + t * seg_x, start.y + t * seg_y))
    }
}
