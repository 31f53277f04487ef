//! Error: every listed name must be a parameter.

#[umbra::attr::freeze(total)]
fn sum(values: &[u32]) -> u32 {
    values.iter().sum()
}

fn main() {
    assert_eq!(sum(&[1, 2]), 3);
}
