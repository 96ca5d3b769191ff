// Test: a non-Copy type with `AddAssign + Default` is accepted by the volatile-alias barrier
use std::ops::AddAssign;

use noelide_core::do_not_optimize_away;

#[derive(Default)]
struct Acc {
    parts: Vec<u64>,
}

impl AddAssign for Acc {
    fn add_assign(&mut self, rhs: Self) {
        self.parts.extend(rhs.parts);
    }
}

fn main() {
    let mut acc = Acc { parts: vec![1, 2] };
    do_not_optimize_away(&mut acc);
    do_not_optimize_away(&mut Acc::default());
    assert_eq!(acc.parts, [1, 2]);
}
