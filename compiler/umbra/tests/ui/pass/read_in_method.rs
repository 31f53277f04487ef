//! Attribute forms on methods.

#[derive(Clone, Copy, Debug, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[umbra::attr::read_in(other)]
    fn manhattan(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    #[umbra::attr::freeze(scale)]
    fn scaled(self, scale: f64) -> Point {
        Point {
            x: self.x * *scale,
            y: self.y * *scale,
        }
    }
}

fn main() {
    let origin = Point { x: 0.0, y: 0.0 };
    let target = Point { x: 3.0, y: -4.0 };
    assert!((origin.manhattan(&target) - 7.0).abs() < f64::EPSILON);
    assert_eq!(target.scaled(2.0), Point { x: 6.0, y: -8.0 });
}
