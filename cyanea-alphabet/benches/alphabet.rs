use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyanea_alphabet::{
    seq, Alphabet, Dna15, Dna4, Dna5, GeneticCode, Gapped, Phred42, Qualified, Semialphabet,
    TranslationFrames,
};

fn random_dna(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn bench_assign_char(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_char");
    let text = random_dna(100_000);

    group.bench_function("dna4_lossy_100kb", |b| {
        b.iter(|| seq::parse::<Dna4>(black_box(&text)))
    });
    group.bench_function("dna4_strict_100kb", |b| {
        b.iter(|| seq::parse_strict::<Dna4>(black_box(&text)))
    });
    group.bench_function("dna15_lossy_100kb", |b| {
        b.iter(|| seq::parse::<Dna15>(black_box(&text)))
    });
    group.bench_function("gapped_dna4_lossy_100kb", |b| {
        b.iter(|| seq::parse::<Gapped<Dna4>>(black_box(&text)))
    });
    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");
    let dna: Vec<Dna4> = seq::parse(random_dna(10_000));
    let quals: Vec<Phred42> = (0..dna.len() as u32).map(|i| Phred42::from_rank(i % 42)).collect();

    group.bench_function("qualified_pack_10k", |b| {
        b.iter(|| {
            dna.iter()
                .zip(&quals)
                .map(|(&n, &q)| Qualified::new((n, q)))
                .collect::<Vec<Qualified<Dna4, Phred42>>>()
        })
    });

    let packed: Vec<Qualified<Dna4, Phred42>> =
        dna.iter().zip(&quals).map(|(&n, &q)| Qualified::new((n, q))).collect();
    group.bench_function("qualified_field_write_10k", |b| {
        b.iter(|| {
            let mut packed = packed.clone();
            for symbol in &mut packed {
                symbol.assign_char(b'C');
            }
            packed
        })
    });
    group.finish();
}

fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");
    let code = GeneticCode::standard();

    for len in [1_000usize, 100_000] {
        let dna4: Vec<Dna4> = seq::parse(random_dna(len));
        group.bench_with_input(BenchmarkId::new("dna4_six_frame", len), &dna4, |b, dna| {
            b.iter(|| {
                code.translate_frames(black_box(dna), TranslationFrames::SIX_FRAME)
                    .map(|frame| frame.filter(|aa| aa.is_terminator()).count())
                    .sum::<usize>()
            })
        });

        let dna5: Vec<Dna5> = seq::parse(random_dna(len));
        group.bench_with_input(BenchmarkId::new("dna5_six_frame", len), &dna5, |b, dna| {
            b.iter(|| {
                code.translate_frames(black_box(dna), TranslationFrames::SIX_FRAME)
                    .map(|frame| frame.count())
                    .sum::<usize>()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_assign_char, bench_composites, bench_translation);
criterion_main!(benches);
