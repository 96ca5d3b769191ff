//! Loop-scaling tests for the active and volatile-alias strategies.

use std::ops::AddAssign;
use std::time::{Duration, Instant};

use noelide::hint::volatile;
use noelide::{do_not_optimize_away, keep, Escape, DEFAULT_SAMPLE_SIZE};

/// Base iteration counts from the classic accumulation baseline.
const COUNTS: [u64; 3] = [64, 128, 256];

/// Multiplier so each measured loop runs long enough to sit well above
/// timer resolution.
const SCALE: u64 = 2048;

/// Fastest of `DEFAULT_SAMPLE_SIZE` runs of `f`.
fn min_time(mut f: impl FnMut()) -> Duration {
    let mut best = Duration::MAX;
    for _ in 0..DEFAULT_SAMPLE_SIZE {
        let start = Instant::now();
        f();
        best = best.min(start.elapsed());
    }
    best
}

fn accumulate<T: Copy + Default + AddAssign + Escape>(n: u64) -> T {
    // The step is hidden too, so adding it cannot be proven a no-op.
    let mut step = T::default();
    do_not_optimize_away(&mut step);
    let mut x = T::default();
    for _ in 0..n {
        x += step;
        do_not_optimize_away(&mut x);
    }
    x
}

fn accumulate_volatile<T: Copy + volatile::Touch + Default + AddAssign>(n: u64) -> T {
    let mut step = T::default();
    volatile::do_not_optimize_away(&mut step);
    let mut x = T::default();
    for _ in 0..n {
        x += step;
        volatile::do_not_optimize_away(&mut x);
    }
    x
}

/// Same loop with no barrier anywhere: the optimizer may fold it to a
/// closed form whose cost does not depend on `n`.
fn accumulate_plain(n: u64) -> u64 {
    let mut x = 0u64;
    for i in 0..n {
        x += i;
    }
    x
}

fn assert_scales(label: &str, times: &[Duration]) {
    assert!(
        times.iter().all(|t| !t.is_zero()),
        "{label}: zero-time measurement {times:?}"
    );
    assert!(
        times[2] > times[0],
        "{label}: 4x the iterations did not take longer {times:?}"
    );
    assert!(
        times[2].as_nanos() as f64 > times[0].as_nanos() as f64 * 1.5,
        "{label}: time did not scale with iteration count {times:?}"
    );
}

macro_rules! scaling_tests {
    ($($name:ident: $ty:ty,)*) => {
        $(
            #[test]
            fn $name() {
                let times: Vec<Duration> = COUNTS
                    .iter()
                    .map(|&n| min_time(|| {
                        let _ = accumulate::<$ty>(n * SCALE);
                    }))
                    .collect();
                assert_scales(stringify!($ty), &times);

                let times: Vec<Duration> = COUNTS
                    .iter()
                    .map(|&n| min_time(|| {
                        let _ = accumulate_volatile::<$ty>(n * SCALE);
                    }))
                    .collect();
                assert_scales(concat!("volatile ", stringify!($ty)), &times);
            }
        )*
    };
}

scaling_tests! {
    scales_u8: u8,
    scales_i32: i32,
    scales_u64: u64,
    scales_f32: f32,
    scales_f64: f64,
}

/// Needs optimization (the `test` profile sets `opt-level = 3`); at
/// opt-level 0 nothing is folded and the control loop scales too.
#[test]
#[cfg(not(debug_assertions))]
fn barrier_separates_kept_loop_from_folded_one() {
    let plain: Vec<Duration> = COUNTS
        .iter()
        .map(|&n| {
            let n = keep(n * SCALE);
            min_time(|| {
                let mut sum = accumulate_plain(n);
                do_not_optimize_away(&mut sum);
            })
        })
        .collect();
    let barred: Vec<Duration> = COUNTS
        .iter()
        .map(|&n| {
            let n = keep(n * SCALE);
            min_time(|| {
                let mut sum = 0u64;
                for i in 0..n {
                    sum += i;
                    do_not_optimize_away(&mut sum);
                }
            })
        })
        .collect();

    assert_scales("barred u64", &barred);
    assert!(
        plain[2] * 10 < barred[2],
        "unbarred loop was not folded: plain {plain:?}, barred {barred:?}"
    );
}

#[test]
fn accumulation_baseline_result() {
    for n in COUNTS {
        let mut x = 0u64;
        for i in 0..n {
            x += i;
            do_not_optimize_away(&mut x);
        }
        assert_eq!(x, n * (n - 1) / 2);
    }
}

#[test]
fn sample_size_bounds_a_dependent_loop() {
    let mut runs = 0usize;
    let mut acc = 1u64;
    for _ in 0..DEFAULT_SAMPLE_SIZE {
        acc = acc.wrapping_mul(3);
        do_not_optimize_away(&mut acc);
        runs += 1;
    }
    assert_eq!(runs, 30);
    assert_eq!(acc, 3u64.pow(30));
}
