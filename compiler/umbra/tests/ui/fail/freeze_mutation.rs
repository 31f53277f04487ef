//! Error: a frozen name cannot be written through.

fn main() {
    let mut total = 0u32;
    total += 1;
    umbra::freeze!(total => {
        *total += 1;
    });
    assert_eq!(total, 1);
}
