use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sai_vfs::core::cipher;
use sai_vfs::{Cluster, CLUSTER_SIZE};

fn sample_cluster() -> Cluster {
    let payload: Vec<u8> = (0..CLUSTER_SIZE).map(|i| (i * 31 % 251) as u8).collect();
    Cluster::from_payload(&payload)
}

/// Benchmark the table and data transforms on one cluster
fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_transforms");
    group.throughput(Throughput::Bytes(CLUSTER_SIZE as u64));

    let plain = sample_cluster();
    let key = plain.checksum(false);

    let mut table = plain.clone();
    table.encrypt_table(512);
    group.bench_function("decrypt_table", |b| {
        b.iter(|| {
            let mut cluster = table.clone();
            cluster.decrypt_table(black_box(512));
            black_box(cluster);
        });
    });

    let mut data = plain.clone();
    data.encrypt_data(key);
    group.bench_function("decrypt_data", |b| {
        b.iter(|| {
            let mut cluster = data.clone();
            cluster.decrypt_data(black_box(key));
            black_box(cluster);
        });
    });

    group.finish();
}

/// Benchmark the checksum fold
fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_checksum");
    group.throughput(Throughput::Bytes(CLUSTER_SIZE as u64));

    let words = sample_cluster().words();
    group.bench_function("data", |b| {
        b.iter(|| black_box(cipher::checksum(black_box(&words), false)));
    });
    group.bench_function("table", |b| {
        b.iter(|| black_box(cipher::checksum(black_box(&words), true)));
    });

    group.finish();
}

criterion_group!(benches, bench_transforms, bench_checksum);
criterion_main!(benches);
