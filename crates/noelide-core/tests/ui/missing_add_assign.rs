// Test: a type without `AddAssign` is rejected by the volatile-alias barrier
use noelide_core::do_not_optimize_away;

#[derive(Clone, Copy, Default)]
struct Label(u8);

fn main() {
    do_not_optimize_away(&mut Label(1));
}
