//! Benchmarks for encrypt / decrypt over the built-in catalog.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use periodic_cipher::{Catalog, PeriodicCipher};

const SAMPLE: &str = "PERİYODİK TABLO ŞİFRELEME, ÇOK GÜZEL BİR OYUN!";

fn bench_encrypt(c: &mut Criterion) {
    let cipher = PeriodicCipher::new();
    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Elements(SAMPLE.chars().count() as u64));
    group.bench_function("sentence", |b| {
        b.iter(|| cipher.encrypt(black_box(SAMPLE)));
    });
    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let cipher = PeriodicCipher::new();
    let ciphertext = cipher.encrypt(SAMPLE).result;
    let mut group = c.benchmark_group("decrypt");
    group.throughput(Throughput::Elements(SAMPLE.chars().count() as u64));
    group.bench_function("sentence", |b| {
        b.iter(|| cipher.decrypt(black_box(&ciphertext)));
    });
    group.finish();
}

/// Decrypt cost as the text grows; the candidate search is per coordinate.
fn bench_decrypt_scaling(c: &mut Criterion) {
    let cipher = PeriodicCipher::new();
    let mut group = c.benchmark_group("decrypt_scaling");
    for repeats in [1usize, 4, 16] {
        let ciphertext = cipher.encrypt(&SAMPLE.repeat(repeats)).result;
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &ciphertext, |b, text| {
            b.iter(|| cipher.decrypt(black_box(text)));
        });
    }
    group.finish();
}

fn bench_catalog_lookup(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    c.bench_function("locate_all_letters", |b| {
        b.iter(|| {
            for &letter in catalog.alphabet().letters() {
                black_box(catalog.locate(letter));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_encrypt,
    bench_decrypt,
    bench_decrypt_scaling,
    bench_catalog_lookup
);
criterion_main!(benches);
