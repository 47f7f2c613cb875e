use crate::theme::Bgra;

/// A `width × height` BGRA pixel buffer, laid out for `wl_shm` Argb8888.
pub struct CanvasPrimitives {
    pub width: i32,
    pub height: i32,
    pub pixel_data: Vec<u8>,
}

impl CanvasPrimitives {
    pub fn new(width: i32, height: i32) -> Self {
        let pixel_data = vec![0u8; (width * height * 4) as usize];
        Self {
            width,
            height,
            pixel_data,
        }
    }

    pub fn clear(&mut self) {
        self.pixel_data.fill(0);
    }

    pub fn get_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn stride(&self) -> i32 {
        self.width * 4
    }

    #[inline]
    pub fn pixel_idx(width: i32, x: i32, y: i32) -> usize {
        ((y * width + x) * 4) as usize
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Bgra> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = Self::pixel_idx(self.width, x, y);
        let px = &self.pixel_data[idx..idx + 4];
        Some(Bgra::from_rgba(px[2], px[1], px[0], px[3]))
    }

    /// Blends `color` over the pixel at `idx` with `coverage` on top of the
    /// color's own alpha.
    pub fn alpha_blending(pxl_data: &mut [u8], idx: usize, color: Bgra, coverage: u8) {
        if idx + 3 >= pxl_data.len() {
            return;
        }

        let alpha = ((color.a() as u16 * coverage as u16) / 255) as u8;
        let inv_alpha = 255 - alpha;

        pxl_data[idx] = Self::blend_color(color.b(), alpha, pxl_data[idx], inv_alpha);
        pxl_data[idx + 1] = Self::blend_color(color.g(), alpha, pxl_data[idx + 1], inv_alpha);
        pxl_data[idx + 2] = Self::blend_color(color.r(), alpha, pxl_data[idx + 2], inv_alpha);
        pxl_data[idx + 3] = Self::blend_color(255, alpha, pxl_data[idx + 3], inv_alpha);
    }

    #[inline]
    fn blend_color(src: u8, alpha: u8, dst: u8, inv_alpha: u8) -> u8 {
        ((src as u16 * alpha as u16 + dst as u16 * inv_alpha as u16) / 255) as u8
    }

    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Bgra, coverage: u8) {
        if self.contains(x, y) {
            let idx = Self::pixel_idx(self.width, x, y);
            Self::alpha_blending(&mut self.pixel_data, idx, color, coverage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_full_coverage_replaces_the_pixel() {
        let mut canvas = CanvasPrimitives::new(2, 2);
        let color = Bgra::from_rgba(10, 20, 30, 255);
        canvas.blend_pixel(1, 0, color, 255);
        assert_eq!(canvas.pixel(1, 0), Some(color));
        assert_eq!(canvas.pixel(0, 0), Some(Bgra::TRANSPARENT));
    }

    #[test]
    fn zero_coverage_leaves_the_pixel() {
        let mut canvas = CanvasPrimitives::new(1, 1);
        let base = Bgra::from_rgba(200, 100, 50, 255);
        canvas.blend_pixel(0, 0, base, 255);
        canvas.blend_pixel(0, 0, Bgra::from_rgba(0, 0, 0, 255), 0);
        assert_eq!(canvas.pixel(0, 0), Some(base));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut canvas = CanvasPrimitives::new(3, 2);
        canvas.blend_pixel(3, 0, Bgra::from_rgba(1, 1, 1, 255), 255);
        canvas.blend_pixel(-1, 1, Bgra::from_rgba(1, 1, 1, 255), 255);
        assert!(canvas.pixel(3, 0).is_none());
        assert!(canvas.get_data().iter().all(|&byte| byte == 0));
        assert_eq!(canvas.get_data().len(), 3 * 2 * 4);
    }
}
