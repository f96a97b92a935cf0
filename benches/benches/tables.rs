use criterion::{criterion_group, criterion_main, Criterion};
use xid_table::XidTable;
use xid_tables_prepare::{output, pack, parse, Classification, OutputFormat, DOMAIN_MAX};

mod group;

#[inline(never)]
fn test_parse(_: Classification, source: &str) -> usize
{
    parse(source).unwrap().len()
}

#[inline(never)]
fn test_pack(_: Classification, source: &str) -> usize
{
    pack(&parse(source).unwrap()).unwrap().len()
}

#[inline(never)]
fn test_render(classification: Classification, source: &str) -> usize
{
    let table = pack(&parse(source).unwrap()).unwrap();

    output::render(classification, OutputFormat::C, &table).len()
}

group!(
    prepare,
    "prepare",
    "parse" => test_parse,
    "pack" => test_pack,
    "render" => test_render,
);

/// поиск по готовой таблице
fn lookup(c: &mut Criterion)
{
    let mut group = c.benchmark_group("lookup");

    for classification in Classification::ALL {
        let table = pack(&parse(&xid_tables_benches::source(classification)).unwrap()).unwrap();
        let groups = table.groups().to_vec();
        let table = XidTable::new(DOMAIN_MAX, &groups);

        group.bench_with_input(
            criterion::BenchmarkId::new("contains", classification),
            &table,
            |b, table| {
                b.iter(|| {
                    criterion::black_box(xid_tables_benches::TEXT)
                        .chars()
                        .filter(|&c| table.contains_char(c))
                        .count()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, prepare, lookup);
criterion_main!(benches);
