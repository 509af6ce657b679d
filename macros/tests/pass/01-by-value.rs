use variant::{match_variant, Variant};

type Shape = Variant![Circle, Rect, Point];

struct Circle {
    radius: f64,
}

struct Rect(f64, f64);

struct Point;

fn area(shape: Shape) -> f64 {
    match_variant!(shape {
        c: Circle => 3.0 * c.radius * c.radius,
        Rect(w, h): Rect => w * h,
        _: Point => 0.0,
    })
}

fn main() {
    assert_eq!(area(Variant::new(Circle { radius: 1.0 })), 3.0);
    assert_eq!(area(Variant::new(Rect(2.0, 4.0))), 8.0);
    assert_eq!(area(Variant::new(Point)), 0.0);
}
