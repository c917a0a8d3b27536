// Pointer state for the hero canvas. Keeps track of where the cursor is in
// surface coordinates and how far its push reaches.

use vecmath::{self, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub pos: Option<Vector2<f64>>,
    pub radius: f64,
}

impl Pointer {
    pub fn new(radius: f64) -> Self {
        Pointer { pos: None, radius }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    pub fn leave(&mut self) {
        self.pos = None;
    }

    pub fn is_present(&self) -> bool {
        self.pos.is_some()
    }

    // Offset that moves a point at `target` away from the pointer, scaled by
    // how deep inside the radius it is. None when the pointer is absent, the
    // point is out of reach, or it sits exactly on the pointer.
    pub fn repulsion(&self, target: Vector2<f64>, strength: f64) -> Option<Vector2<f64>> {
        let pos = self.pos?;
        let away = vecmath::vec2_sub(target, pos);
        let distance = vecmath::vec2_len(away);
        if distance >= self.radius || distance <= 0.0 {
            return None;
        }
        let force = (self.radius - distance) / self.radius;
        let direction = vecmath::vec2_scale(away, 1.0 / distance);
        Some(vecmath::vec2_scale(direction, force * strength))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vector2<f64>, b: Vector2<f64>) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn test_absent_pointer_has_no_effect() {
        let pointer = Pointer::new(150.0);
        assert_eq!(pointer.repulsion([10.0, 10.0], 3.0), None);
    }

    #[test]
    fn test_repulsion_points_away() {
        let mut pointer = Pointer::new(150.0);
        pointer.move_to(100.0, 100.0);
        // 75 units to the right: half force, pushed further right
        let offset = pointer.repulsion([175.0, 100.0], 3.0).unwrap();
        assert!(approx(offset, [1.5, 0.0]), "{:?}", offset);
        // 30 up, 40 left: distance 50, force 2/3 of full push
        let offset = pointer.repulsion([60.0, 70.0], 3.0).unwrap();
        assert!(approx(offset, [-1.6, -1.2]), "{:?}", offset);
    }

    #[test]
    fn test_out_of_reach() {
        let mut pointer = Pointer::new(150.0);
        pointer.move_to(0.0, 0.0);
        assert_eq!(pointer.repulsion([150.0, 0.0], 3.0), None);
        assert_eq!(pointer.repulsion([200.0, 200.0], 3.0), None);
    }

    #[test]
    fn test_zero_distance_is_skipped() {
        let mut pointer = Pointer::new(150.0);
        pointer.move_to(42.0, 42.0);
        assert_eq!(pointer.repulsion([42.0, 42.0], 3.0), None);
    }

    #[test]
    fn test_leave_clears_position() {
        let mut pointer = Pointer::new(150.0);
        pointer.move_to(1.0, 2.0);
        assert!(pointer.is_present());
        pointer.leave();
        assert!(!pointer.is_present());
    }
}
