use variant::{match_variant, Variant};

fn is_text(v: Variant![u8, String, char, bool]) -> bool {
    match_variant!(v {
        _: String => true,
        c: char => c.is_alphabetic(),
        _ => false,
    })
}

fn main() {
    assert!(is_text(Variant::new(String::new())));
    assert!(is_text(Variant::new('a')));
    assert!(!is_text(Variant::new('1')));
    assert!(!is_text(Variant::new(true)));
    assert!(!is_text(Variant::new(7u8)));
}
