//! Translation throughput for modules of many small functions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use julia_wasm::ast::{
    Assignment, Block, Case, FunctionCall, FunctionDefinition, Identifier, Literal, Statement,
    Switch, TypedName,
};
use julia_wasm::assemble;
use julia_wasm::span::Span;

fn ident(name: &str) -> Statement {
    Statement::Identifier(Identifier::new(name))
}

fn assign(name: &str, value: Statement) -> Statement {
    Statement::Assignment(Assignment {
        variable_name: Identifier::new(name),
        value: Box::new(value),
        span: Span::dummy(),
    })
}

/// `fn_i(a, b) -> r { switch gt64(a, b) case 1 { r := add64(a, i) } default { r := mul64(b, b) } }`
fn synthetic_module(n: usize) -> Block {
    let functions = (0..n)
        .map(|i| {
            let then_body = vec![assign(
                "r",
                Statement::FunctionCall(FunctionCall::new(
                    "add64",
                    vec![
                        ident("a"),
                        Statement::Literal(Literal::number(&i.to_string(), "u64")),
                    ],
                )),
            )];
            let else_body = vec![assign(
                "r",
                Statement::FunctionCall(FunctionCall::new("mul64", vec![ident("b"), ident("b")])),
            )];
            Statement::FunctionDefinition(FunctionDefinition {
                name: format!("fn_{}", i),
                arguments: vec![TypedName::new("a", "u64"), TypedName::new("b", "u64")],
                returns: vec![TypedName::new("r", "u64")],
                body: Block::new(vec![Statement::Switch(Switch {
                    expression: Box::new(Statement::FunctionCall(FunctionCall::new(
                        "gt64",
                        vec![ident("a"), ident("b")],
                    ))),
                    cases: vec![
                        Case {
                            value: Some(Literal::number("1", "u64")),
                            body: Block::new(then_body),
                            span: Span::dummy(),
                        },
                        Case {
                            value: None,
                            body: Block::new(else_body),
                            span: Span::dummy(),
                        },
                    ],
                    span: Span::dummy(),
                })]),
                span: Span::dummy(),
            })
        })
        .collect();
    Block::new(functions)
}

fn bench_assemble(c: &mut Criterion) {
    let small = synthetic_module(10);
    let large = synthetic_module(500);

    let mut group = c.benchmark_group("assemble");
    group.bench_function("10_functions", |b| b.iter(|| assemble(black_box(&small))));
    group.bench_function("500_functions", |b| b.iter(|| assemble(black_box(&large))));
    group.finish();
}

fn bench_parse_and_assemble(c: &mut Criterion) {
    let json = serde_json::to_string(&synthetic_module(100)).unwrap();
    let config = julia_wasm::EmitConfig::default();
    c.bench_function("json_100_functions", |b| {
        b.iter(|| julia_wasm::assemble_json(black_box(&json), &config))
    });
}

criterion_group!(benches, bench_assemble, bench_parse_and_assemble);
criterion_main!(benches);
