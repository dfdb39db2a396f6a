//! Centered Pointer Tracker
//!
//! Mouse look works with a pointer that is warped back to the window center
//! after every motion event. The look delta is the pointer's offset from
//! that center, measured separately per axis so an event that moved only
//! horizontally leaves pitch untouched.

/// Window-centered pointer offset computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteredPointer {
    width: u32,
    height: u32,
}

impl CenteredPointer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Track a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Integer window center, where the pointer is warped back to.
    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Offset of a pointer at `(x, y)` from the center.
    ///
    /// Each axis is `None` when the pointer sits on the center along it.
    pub fn offset(&self, x: i32, y: i32) -> (Option<f32>, Option<f32>) {
        let (cx, cy) = self.center();
        let dx = (x != cx).then(|| (x - cx) as f32);
        let dy = (y != cy).then(|| (y - cy) as f32);
        (dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_uses_integer_division() {
        let pointer = CenteredPointer::new(801, 601);
        assert_eq!(pointer.center(), (400, 300));
    }

    #[test]
    fn test_offset_per_axis() {
        let pointer = CenteredPointer::new(800, 600);
        assert_eq!(pointer.offset(400, 300), (None, None));
        assert_eq!(pointer.offset(410, 300), (Some(10.0), None));
        assert_eq!(pointer.offset(400, 295), (None, Some(-5.0)));
    }

    #[test]
    fn test_resize_moves_center() {
        let mut pointer = CenteredPointer::new(800, 600);
        pointer.resize(1024, 768);
        assert_eq!(pointer.offset(512, 384), (None, None));
    }
}
