//! Freezing parameters for a whole function body.

#[umbra::attr::freeze(threshold, labels)]
fn count_above(values: &[i64], threshold: i64, labels: Vec<&str>) -> (usize, usize) {
    let above = values.iter().filter(|&&value| value > *threshold).count();
    (above, labels.len())
}

fn main() {
    assert_eq!(count_above(&[1, 5, 9, 12], 6, vec!["a", "b"]), (2, 2));
}
