/// Axis-aligned rectangle with unvalidated integer sides.
///
/// Zero and negative dimensions are accepted as-is; a negative side gives a
/// negative area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    width: i32,
    height: i32,
}

impl Rectangle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimensions(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// `width * height`, widened so no pair of `i32` sides overflows.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}
