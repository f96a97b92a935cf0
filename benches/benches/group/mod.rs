pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

#[macro_export]
macro_rules! group {
    ($fn: ident, $group: expr, $($name: expr => $bench: expr),+ $(,)?) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for classification in Classification::ALL {
                let source = xid_tables_benches::source(classification);
                let input = (classification, source.as_str());

                $(
                    group.bench_with_input(
                        criterion::BenchmarkId::new($name, classification),
                        &input,
                        |b, data| b.iter(|| $bench(data.0, criterion::black_box(data.1))),
                    );
                )+
            }

            group.finish();
        }
    };
}
