use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kaspa_slip32::{export_key, import_key, ChildNumber, ExtendedKey, Key, KeyPath, MAX_DEPTH};

fn xprv() -> ExtendedKey {
    let mut key = [0u8; 33];
    key[1..].copy_from_slice(b"\xe8\xf3\x2e\x72\x3d\xec\xf4\x05\x1a\xef\xac\x8e\x2c\x93\xc9\xc5\xb2\x14\x31\x38\x17\xcd\xb0\x1a\x14\x94\xb9\x17\xc8\x43\x6b\x35");
    ExtendedKey::new(Key::private(key), [0x87; 32])
}

pub fn export_benchmark(c: &mut Criterion) {
    let bip44: KeyPath = "m/44'/111111'/0'/0/1".parse().expect("Should work");
    let deepest: KeyPath = (0..MAX_DEPTH as u32).map(ChildNumber).collect();
    let xprv = xprv();

    c.bench_function("export_key::bip44", |b| b.iter(|| export_key(black_box(&bip44), black_box(&xprv)).expect("Should work")));
    c.bench_function("export_key::max_depth", |b| b.iter(|| export_key(black_box(&deepest), black_box(&xprv)).expect("Should work")));
}

pub fn import_benchmark(c: &mut Criterion) {
    let bip44: KeyPath = "m/44'/111111'/0'/0/1".parse().expect("Should work");
    let slip32 = export_key(&bip44, &xprv()).expect("Should work");

    c.bench_function("import_key::bip44", |b| b.iter(|| import_key(black_box(&slip32)).expect("Should work")));
}

criterion_group!(benches, export_benchmark, import_benchmark);
criterion_main!(benches);
