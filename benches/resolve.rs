//! Benchmarks for table construction and the encode/decode hot paths.
//!
//! Tests lookup performance for the operations a serialization layer hits once
//! per value:
//! - Encode-side token lookup
//! - Decode-side index and name resolution
//! - One-off table construction cost

extern crate enumwire;

use criterion::{criterion_group, criterion_main, Criterion};
use enumwire::{ConstantInfo, EnumResolver, EnumValues, NamingOptions};
use std::hint::black_box;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Opcode {
    Nop,
    Load,
    Store,
    Add,
    Sub,
    Mul,
    Div,
    Jump,
    Branch,
    Call,
    Ret,
    Halt,
}

fn constants() -> Vec<ConstantInfo<Opcode>> {
    [
        (Opcode::Nop, "Nop"),
        (Opcode::Load, "Load"),
        (Opcode::Store, "Store"),
        (Opcode::Add, "Add"),
        (Opcode::Sub, "Sub"),
        (Opcode::Mul, "Mul"),
        (Opcode::Div, "Div"),
        (Opcode::Jump, "Jump"),
        (Opcode::Branch, "Branch"),
        (Opcode::Call, "Call"),
        (Opcode::Ret, "Ret"),
        (Opcode::Halt, "Halt"),
    ]
    .into_iter()
    .map(|(value, name)| ConstantInfo::new(value, name))
    .collect()
}

/// Benchmark building both tables from a 12-constant sequence.
fn bench_construct(c: &mut Criterion) {
    let infos = constants();

    c.bench_function("construct_values_and_resolver", |b| {
        b.iter(|| {
            let values =
                EnumValues::construct(black_box(&infos), NamingOptions::LOWERCASE_TOKENS).unwrap();
            let resolver =
                EnumResolver::construct_from_name(black_box(&infos), NamingOptions::LOWERCASE_TOKENS)
                    .unwrap();
            black_box((values, resolver))
        });
    });
}

/// Benchmark the encode-side constant → token lookup.
fn bench_serialized_value_for(c: &mut Criterion) {
    let values = EnumValues::construct(&constants(), NamingOptions::empty()).unwrap();

    c.bench_function("serialized_value_for", |b| {
        b.iter(|| {
            let token = values.serialized_value_for(black_box(Opcode::Branch)).unwrap();
            black_box(token)
        });
    });
}

/// Benchmark the decode-side index lookup, including an out-of-range probe.
fn bench_get_by_index(c: &mut Criterion) {
    let resolver = EnumResolver::construct_from_name(&constants(), NamingOptions::empty()).unwrap();

    c.bench_function("get_by_index", |b| {
        b.iter(|| {
            let hit = resolver.get_by_index(black_box(7));
            let miss = resolver.get_by_index(black_box(-1));
            black_box((hit, miss))
        });
    });
}

/// Benchmark the decode-side name lookup, including an unknown-name probe.
fn bench_get_by_name(c: &mut Criterion) {
    let resolver =
        EnumResolver::construct_from_name(&constants(), NamingOptions::LOWERCASE_TOKENS).unwrap();

    c.bench_function("get_by_name", |b| {
        b.iter(|| {
            let hit = resolver.get_by_name(black_box("branch"));
            let miss = resolver.get_by_name(black_box("unknown"));
            black_box((hit, miss))
        });
    });
}

criterion_group!(
    benches,
    bench_construct,
    bench_serialized_value_for,
    bench_get_by_index,
    bench_get_by_name
);
criterion_main!(benches);
