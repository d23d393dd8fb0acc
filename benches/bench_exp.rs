mod bench_util;

use bench_util::{bench_inputs, configure_criterion, gen_range};
use criterion::Criterion;

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("exp/small");
    let inputs = gen_range(1024, -1.0, 1.0, 0x5eed_0010);
    bench_inputs(&mut group, &inputs, strictmath::exp, |x| x.exp());
    group.finish();

    let mut group = c.benchmark_group("exp/wide");
    let inputs = gen_range(1024, -700.0, 700.0, 0x5eed_0011);
    bench_inputs(&mut group, &inputs, strictmath::exp, |x| x.exp());
    group.finish();

    let mut group = c.benchmark_group("expm1");
    let inputs = gen_range(1024, -0.5, 0.5, 0x5eed_0012);
    bench_inputs(&mut group, &inputs, strictmath::expm1, |x| x.exp_m1());
    group.finish();
}

fn main() {
    let mut criterion = configure_criterion();
    bench(&mut criterion);
    criterion.final_summary();
}
