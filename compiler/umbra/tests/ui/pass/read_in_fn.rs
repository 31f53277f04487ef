//! Reading in reference parameters of a generic function.

use umbra::{BindingMode, SizeLimit};

#[umbra::attr::read_in(origin, step)]
fn walk<P>(origin: &P, step: &P, count: usize) -> Vec<P>
where
    P: Copy + std::ops::Add<Output = P>,
{
    let mut position = *origin;
    let mut trail = Vec::with_capacity(count);
    for _ in 0..count {
        position = position + *step;
        trail.push(position);
    }
    trail
}

#[umbra::attr::read_in(block, policy = SizeLimit<0>)]
fn block_mode(block: &[u8; 4]) -> BindingMode {
    block.mode()
}

fn main() {
    assert_eq!(walk(&10, &5, 3), vec![15, 20, 25]);
    assert_eq!(block_mode(&[1, 2, 3, 4]), BindingMode::SharedRef);
}
