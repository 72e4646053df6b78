use criterion::{Criterion, black_box};
use fdlog::{BitFrexp, Frexp};

use bench_util::{configure_criterion, gen_log_range, glibc_frexp};

fn bench_frexp(c: &mut Criterion) {
    let inputs = [
        f64::from_bits(1),
        f64::MIN_POSITIVE,
        1e-300,
        0.5,
        0.75,
        1.0,
        2.0,
        1e300,
        f64::MAX,
    ];
    let common = gen_log_range(2048, -300.0, 300.0, 0x2a2b);

    for (name, values) in [("frexp/smoke", &inputs[..]), ("frexp/common", &common[..])] {
        let mut group = c.benchmark_group(name);
        group.bench_function("fdlog", |b| {
            b.iter(|| {
                let mut acc = 0.0;
                let mut acc_e = 0i32;
                for &x in values {
                    let (m, e) = BitFrexp::frexp(black_box(x));
                    acc += m;
                    acc_e ^= e;
                }
                black_box((acc, acc_e))
            })
        });
        group.bench_function("glibc", |b| {
            b.iter(|| {
                let mut acc = 0.0;
                let mut acc_e = 0i32;
                for &x in values {
                    let (m, e) = glibc_frexp(black_box(x));
                    acc += m;
                    acc_e ^= e;
                }
                black_box((acc, acc_e))
            })
        });
        group.finish();
    }
}

fn main() {
    let mut c = configure_criterion();
    bench_frexp(&mut c);
    c.final_summary();
}
