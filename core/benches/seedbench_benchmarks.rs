use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seedbench::import::product_buffer;
use seedbench::{plan_orders, ProductCatalog, RowGenerator};

// --- Benchmark Functions ---

fn bench_product_generation(c: &mut Criterion) {
  let mut group = c.benchmark_group("ProductGeneration");

  for count in [1_000usize, 10_000].iter() {
    group.throughput(Throughput::Elements(*count as u64));
    group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
      let mut generator = RowGenerator::seeded(1);
      b.iter(|| generator.products(count));
    });
  }
  group.finish();
}

fn bench_copy_encoding(c: &mut Criterion) {
  let mut group = c.benchmark_group("CopyTextEncoding");
  let mut generator = RowGenerator::seeded(2);

  for count in [1_000usize, 10_000].iter() {
    let buffer = product_buffer(&generator.products(*count)).unwrap();

    group.throughput(Throughput::Elements(*count as u64));
    group.bench_with_input(BenchmarkId::from_parameter(count), &buffer, |b, buffer| {
      b.iter(|| buffer.encode_copy_text(&[], seedbench::bulk::DEFAULT_CHUNK_BYTES).unwrap());
    });
  }
  group.finish();
}

fn bench_order_planning(c: &mut Criterion) {
  let mut group = c.benchmark_group("OrderPlanning");
  let mut generator = RowGenerator::seeded(3);
  let catalog: ProductCatalog = generator.products(10_000).into_iter().collect();

  for max_items in [1usize, 5].iter() {
    group.throughput(Throughput::Elements(5_000));
    group.bench_with_input(
      BenchmarkId::new("5000orders", format!("max{}items", max_items)),
      max_items,
      |b, &max_items| {
        b.iter(|| plan_orders(&mut generator, &catalog, 5_000, max_items).unwrap());
      },
    );
  }
  group.finish();
}

criterion_group!(benches, bench_product_generation, bench_copy_encoding, bench_order_planning);
criterion_main!(benches);
