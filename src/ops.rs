//! Rectangle extraction and compositing.
//!
//! Both operations go through [`Bitmap::get_pixel`] / [`Bitmap::set_pixel`]
//! and never touch the raw buffer.

use crate::bitmap::Bitmap;

impl Bitmap {
    /// Copy the inclusive rectangle `(x1, y1)..=(x2, y2)` into a new bitmap.
    ///
    /// The rectangle is clamped to the canvas. Returns `None` when it is
    /// inverted (`x1 > x2` or `y1 > y2`) or lies entirely outside the canvas.
    /// The copy keeps this bitmap's DPI.
    pub fn clip(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<Bitmap> {
        let (w, h) = (self.width() as i32, self.height() as i32);
        if x1 > x2 || y1 > y2 || x2 < 0 || y2 < 0 || x1 >= w || y1 >= h {
            return None;
        }
        let (x1, y1) = (x1.max(0), y1.max(0));
        let (x2, y2) = (x2.min(w - 1), y2.min(h - 1));

        let clip_w = x2 - x1 + 1;
        let clip_h = y2 - y1 + 1;
        // A non-empty sub-rectangle of a valid bitmap always has valid geometry.
        let mut out = Bitmap::with_dpi(clip_w as u32, clip_h as u32, self.dpi()).ok()?;
        for y in 0..clip_h {
            for x in 0..clip_w {
                let px = self.get_pixel(x1 + x, y1 + y);
                out.set_pixel(x, y, px.r.into(), px.g.into(), px.b.into());
            }
        }
        Some(out)
    }

    /// Overwrite pixels with `src`, placing its top-left corner at `(x0, y0)`.
    ///
    /// Source pixels landing outside this bitmap are dropped; there is no
    /// blending. Passing `None` does nothing, so the result of
    /// [`clip`](Self::clip) can be pasted directly.
    pub fn paste<'a>(&mut self, src: impl Into<Option<&'a Bitmap>>, x0: i32, y0: i32) {
        let Some(src) = src.into() else {
            return;
        };
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        for from_y in 0..src.height() as i32 {
            let y = i64::from(y0) + i64::from(from_y);
            if y < 0 || y >= h {
                continue;
            }
            for from_x in 0..src.width() as i32 {
                let x = i64::from(x0) + i64::from(from_x);
                if x < 0 || x >= w {
                    continue;
                }
                let px = src.get_pixel(from_x, from_y);
                self.set_pixel(x as i32, y as i32, px.r.into(), px.g.into(), px.b.into());
            }
        }
    }
}
