/// A 2D point in client (window) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Bounding rectangle of a region, as measured at a single moment
///
/// Mirrors what a layout system reports for an element: its size and the
/// client coordinates of its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingRect {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl BoundingRect {
    pub const fn new(width: f32, height: f32, left: f32, top: f32) -> Self {
        Self {
            width,
            height,
            left,
            top,
        }
    }

    /// Build a rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Point, width: f32, height: f32) -> Self {
        Self::new(width, height, origin.x, origin.y)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Check if a client-space point is inside this rectangle (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Convert a client-space point to region-relative coordinates, pinning
    /// each axis to `[0, width]` / `[0, height]`.
    pub fn clamp_local(&self, client: Point) -> Point {
        Point {
            x: clamp_axis(client.x - self.left, self.width),
            y: clamp_axis(client.y - self.top, self.height),
        }
    }
}

/// Clamp `value` to `[0, max]`. A negative extent collapses to 0.
fn clamp_axis(value: f32, max: f32) -> f32 {
    let max = max.max(0.0);
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}
