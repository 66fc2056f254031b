// Touch/pinch gesture state
use crate::geometry::Point;
use crate::input::TouchId;

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

#[derive(Default, Debug, Clone)]
pub struct TouchState {
    /// Active touches in arrival order with their last device-space position.
    active: Vec<(TouchId, Point)>,
    /// Logical centroid the gesture is anchored to.
    pub origin: Option<Point>,
    /// Average logical distance of the touches from their centroid when the
    /// pinch (re)started.
    pub baseline: Option<f64>,
}

impl TouchState {
    /// Add a touch, or move it if the id is already active.
    pub fn insert(&mut self, id: TouchId, pos: Point) {
        match self.active.iter_mut().find(|(tid, _)| *tid == id) {
            Some(entry) => entry.1 = pos,
            None => self.active.push((id, pos)),
        }
    }

    /// Update a known touch. Returns `false` for an id that never started.
    pub fn update(&mut self, id: TouchId, pos: Point) -> bool {
        match self.active.iter_mut().find(|(tid, _)| *tid == id) {
            Some(entry) => {
                entry.1 = pos;
                true
            }
            None => false,
        }
    }

    /// Remove a touch. Returns `false` for an id that never started.
    pub fn remove(&mut self, id: TouchId) -> bool {
        let before = self.active.len();
        self.active.retain(|(tid, _)| *tid != id);
        self.active.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Device-space positions of all active touches.
    #[must_use]
    pub fn positions(&self) -> Vec<Point> {
        self.active.iter().map(|(_, p)| *p).collect()
    }

    /// Drop every touch and the gesture anchor.
    pub fn reset(&mut self) {
        self.active.clear();
        self.origin = None;
        self.baseline = None;
    }
}

/// Arithmetic mean of `points`; `None` when empty.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum = points.iter().fold(Point::default(), |acc, p| acc + *p);
    Some(Point::new(sum.x / n, sum.y / n))
}

/// Mean Euclidean distance of `points` from `center`; zero when empty.
#[must_use]
pub fn average_distance(points: &[Point], center: Point) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    points.iter().map(|p| p.distance(center)).sum::<f64>() / n
}
