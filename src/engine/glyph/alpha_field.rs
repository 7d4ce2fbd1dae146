/// Row-major grid of 0-255 coverage samples.
#[derive(Debug, Clone)]
pub struct AlphaField {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl AlphaField {
    /// Transparent field of the given dimensions, clamped to at least 1x1 so
    /// downstream maths never divides by a zero extent.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Coverage at a pixel; out-of-range coordinates read as transparent.
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y * self.width + x]
    }

    /// Blit a glyph bitmap with its top-left corner at `(x0, y0)`, clipped to
    /// the field, keeping the brighter sample where glyphs overlap.
    pub(super) fn blit_max(&mut self, bitmap: &[u8], w: usize, h: usize, x0: i32, y0: i32) {
        for row in 0..h {
            let y = y0 + row as i32;
            if y < 0 || y as usize >= self.height {
                continue;
            }
            for col in 0..w {
                let x = x0 + col as i32;
                if x < 0 || x as usize >= self.width {
                    continue;
                }
                let dst = y as usize * self.width + x as usize;
                let src = bitmap[row * w + col];
                if src > self.data[dst] {
                    self.data[dst] = src;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn set(&mut self, x: usize, y: usize, alpha: u8) {
        self.data[y * self.width + x] = alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_clamp_to_one() {
        let field = AlphaField::new(0, 0);
        assert_eq!(field.width(), 1);
        assert_eq!(field.height(), 1);
        assert_eq!(field.alpha(0, 0), 0);
    }

    #[test]
    fn out_of_range_reads_are_transparent() {
        let mut field = AlphaField::new(4, 4);
        field.set(3, 3, 200);
        assert_eq!(field.alpha(3, 3), 200);
        assert_eq!(field.alpha(4, 3), 0);
        assert_eq!(field.alpha(3, 4), 0);
    }

    #[test]
    fn blit_clips_and_keeps_brighter_sample() {
        let mut field = AlphaField::new(3, 3);
        // 2x2 bitmap placed half off the top-left corner.
        field.blit_max(&[10, 20, 30, 40], 2, 2, -1, -1);
        assert_eq!(field.alpha(0, 0), 40);

        // Overlapping dimmer blit must not darken the cell.
        field.blit_max(&[5], 1, 1, 0, 0);
        assert_eq!(field.alpha(0, 0), 40);

        // Brighter blit wins.
        field.blit_max(&[90], 1, 1, 0, 0);
        assert_eq!(field.alpha(0, 0), 90);
    }
}
