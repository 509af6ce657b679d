use variant::{match_variant, Variant};

fn classify(v: Variant![i64, String]) -> String {
    match_variant!(v {
        n: i64 if n < 0 => format!("negative {}", -n),
        n: i64 if n == 0 => String::from("zero"),
        s: String if s.is_empty() => String::from("blank"),
        n: i64 => format!("positive {n}"),
        s: String => s,
    })
}

fn main() {
    assert_eq!(classify(Variant::new(-2i64)), "negative 2");
    assert_eq!(classify(Variant::new(0i64)), "zero");
    assert_eq!(classify(Variant::new(5i64)), "positive 5");
    assert_eq!(classify(Variant::new(String::new())), "blank");
    assert_eq!(classify(Variant::new(String::from("x"))), "x");
}
