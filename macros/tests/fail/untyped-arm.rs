use variant::{match_variant, Variant};

fn main() {
    let v: Variant![i32, String] = Variant::new(1);
    let _: usize = match_variant!(v.as_ref() {
        n => 0,
        _ => 1,
    });
    drop(v);
}
