use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use ntru_mgf::{HashAlgorithm, Mgf1State, RustCryptoDigest, mgf1, mgftp1, working_buffer_len};

/// Deterministic seed for benchmarking
fn bench_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = (i & 0xff) as u8;
    }
    seed
}

/// Benchmark MGF1 block generation for one hash algorithm
fn bench_mgf1(c: &mut Criterion, alg: HashAlgorithm, name: &str) {
    let seed = bench_seed();
    let num_calls = 16;
    let mut out = vec![0u8; num_calls * alg.digest_len()];

    let mut group = c.benchmark_group("mgf1");
    group.throughput(Throughput::Bytes(out.len() as u64));
    group.bench_with_input(BenchmarkId::new("blocks16", name), &seed, |b, seed| {
        b.iter(|| {
            let mut state = Mgf1State::new(alg.digest_len()).unwrap();
            mgf1(
                &mut state,
                &mut RustCryptoDigest,
                alg,
                num_calls,
                Some(seed.as_slice()),
                &mut out,
            )
            .unwrap();
        });
    });
    group.finish();
}

/// Benchmark MGF-TP-1 for a trinary polynomial of `n` coefficients
fn bench_mgftp1(c: &mut Criterion, alg: HashAlgorithm, name: &str, n: usize, min_calls: usize) {
    let seed = bench_seed();
    let digest_len = alg.digest_len();
    let mut buf = vec![0u8; working_buffer_len(digest_len, min_calls)];
    let mut mask = vec![0u8; n];

    c.bench_with_input(BenchmarkId::new("mgftp1", name), &seed, |b, seed| {
        b.iter(|| {
            mgftp1(
                RustCryptoDigest,
                alg,
                digest_len,
                min_calls,
                seed,
                &mut buf,
                &mut mask,
            )
            .unwrap();
        });
    });
}

fn mgf_benchmarks(c: &mut Criterion) {
    bench_mgf1(c, HashAlgorithm::Sha1, "sha1");
    bench_mgf1(c, HashAlgorithm::Sha256, "sha256");
    bench_mgf1(c, HashAlgorithm::Sha3_256, "sha3-256");

    // N = 401 with SHA-1, N = 743 with SHA-256, as in the NTRUEncrypt parameter sets
    bench_mgftp1(c, HashAlgorithm::Sha1, "n401-sha1", 401, 5);
    bench_mgftp1(c, HashAlgorithm::Sha256, "n743-sha256", 743, 5);
}

criterion_group!(benches, mgf_benchmarks);
criterion_main!(benches);
