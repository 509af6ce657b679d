use variant::{match_variant, Variant};

fn main() {
    let mut v: Variant![Vec<i32>, String] = Variant::new(vec![1, 2, 3]);

    match_variant!(v.as_mut() {
        list: &mut Vec<i32> => list.push(4),
        text: &mut String => text.push('!'),
    });

    let total = match_variant!(v.as_ref() {
        list: &Vec<i32> => list.iter().sum::<i32>(),
        text: &String => text.len() as i32,
    });
    assert_eq!(total, 10);
}
