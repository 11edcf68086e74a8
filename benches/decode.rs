use criterion::{criterion_group, criterion_main, Criterion};

use mailcase::decompose::encoding::decode_quoted_printable;

fn bench_decode_quoted_printable(c: &mut Criterion) {
    // Mixed content: plain runs, hex escapes, and soft line breaks
    let line = "Caf=C3=A9 con le=C3=B1a, total:=20100=25 =3D invoice=0A=\r\n";
    let payload = line.repeat(512);

    c.bench_function("decode_quoted_printable_32k", |b| {
        b.iter(|| decode_quoted_printable(payload.as_bytes()).unwrap())
    });
}

fn bench_decode_plain_passthrough(c: &mut Criterion) {
    let payload = "no escapes in this payload at all\n".repeat(1024);

    c.bench_function("decode_plain_passthrough_34k", |b| {
        b.iter(|| decode_quoted_printable(payload.as_bytes()).unwrap())
    });
}

criterion_group!(
    benches,
    bench_decode_quoted_printable,
    bench_decode_plain_passthrough
);
criterion_main!(benches);
