//! Performance benchmarks for translation and evaluation.
//!
//! - Straight-line: blocks of N declarations and additions
//! - Control flow: nested `if`/`while` chains
//! - End to end: counting loops run through `syscraws::run`
//!
//! ## Profiling with Puffin
//!
//! Run with the `profile-with-puffin` feature to print per-scope averages after each group:
//!
//! ```bash
//! cargo bench --features profile-with-puffin -- --profile-time 5
//! ```

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use syscraws::{AstBuilder, Context, Env, OperatorTag, Stmt, run, translate_routine};

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

/// Close the current puffin frame. Called once per iteration.
#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

/// Print the average time per frame of each top-level scope.
#[cfg(feature = "profile-with-puffin")]
fn print_profiling_stats() {
    let Some(frame_view) = FRAME_VIEW.get() else {
        return;
    };
    let view = frame_view.lock();
    let scopes = view.scope_collection();
    let frames: Vec<_> = view
        .recent_frames()
        .filter_map(|frame| frame.unpacked().ok())
        .collect();

    let mut totals = std::collections::HashMap::<String, i64>::new();
    for frame in &frames {
        for stream_info in frame.thread_streams.values() {
            let Ok(top) = puffin::Reader::from_start(&stream_info.stream).read_top_scopes() else {
                continue;
            };
            for scope in top {
                if let Some(details) = scopes.fetch_by_id(&scope.id) {
                    *totals.entry(details.name().to_string()).or_default() +=
                        scope.record.duration_ns;
                }
            }
        }
    }

    let mut entries: Vec<_> = totals.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    let per_frame = frames.len().max(1) as i64;

    println!("\n=== {} frames ===", frames.len());
    for (name, ns) in entries {
        let avg = std::time::Duration::from_nanos((ns / per_frame) as u64);
        println!("  {name:30} {avg:>10.2?} avg");
    }
}

#[cfg(not(feature = "profile-with-puffin"))]
fn print_profiling_stats() {}

// Program builders

/// `{ let v0 = 0; let v1 = v0 + 1; ... return vN; }`
fn straight_line<'ast>(b: AstBuilder<'ast>, len: usize) -> Stmt<'ast> {
    let mut stmts = Vec::with_capacity(len + 2);
    stmts.push(b.decl("v0", Some("int"), Some(b.int(0))));
    for i in 1..=len {
        let prev = format!("v{}", i - 1);
        let init = b.binary(OperatorTag::Add, b.ident(&prev), b.int(1));
        stmts.push(b.decl(&format!("v{i}"), None, Some(init)));
    }
    stmts.push(b.return_(Some(b.ident(&format!("v{len}")))));
    b.block(&stmts)
}

/// `depth` nested loops, each running once, with an `if` chain inside.
fn nested_control_flow<'ast>(b: AstBuilder<'ast>, depth: usize) -> Stmt<'ast> {
    let mut body = b.block(&[
        b.if_(
            b.binary(OperatorTag::Equal, b.ident("n"), b.int(0)),
            b.expr_stmt(b.call_named("print", &[b.ident("n")])),
            Some(b.continue_()),
        ),
        b.break_(),
    ]);
    for _ in 0..depth {
        body = b.block(&[b.while_(b.ident("true"), body), b.break_()]);
    }
    b.block(&[
        b.decl("n", None, Some(b.int(0))),
        b.while_(b.ident("true"), body),
    ])
}

/// `{ let i = 0; while (true) { if (i == limit) break; ++i; } return i; }`
fn counting_loop<'ast>(b: AstBuilder<'ast>, limit: i32) -> Stmt<'ast> {
    b.block(&[
        b.decl("i", None, Some(b.int(0))),
        b.while_(
            b.ident("true"),
            b.block(&[
                b.if_(
                    b.binary(OperatorTag::Equal, b.ident("i"), b.int(limit)),
                    b.break_(),
                    None,
                ),
                b.expr_stmt(b.unary(OperatorTag::PreInc, b.ident("i"))),
            ]),
        ),
        b.return_(Some(b.ident("i"))),
    ])
}

// Benchmarks

/// Benchmark translation of straight-line blocks of increasing length.
fn straight_line_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let ctx = Context::new();
    let mut group = c.benchmark_group("translate/straight_line");

    for len in [10, 100, 1000] {
        let arena = Bump::new();
        let stmt = straight_line(AstBuilder::new(&arena), len);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &stmt, |b, stmt| {
            b.iter(|| {
                let routine = translate_routine(&ctx, black_box(stmt)).unwrap();
                end_profiling_frame();
                black_box(routine.body.len())
            });
        });
    }

    group.finish();
    print_profiling_stats();
}

/// Benchmark translation of deeply nested loops and branches.
fn control_flow_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let ctx = Context::new();
    let mut group = c.benchmark_group("translate/nested_loops");

    for depth in [4, 16, 64] {
        let arena = Bump::new();
        let stmt = nested_control_flow(AstBuilder::new(&arena), depth);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &stmt, |b, stmt| {
            b.iter(|| {
                let routine = translate_routine(&ctx, black_box(stmt)).unwrap();
                end_profiling_frame();
                black_box(routine.num_locals)
            });
        });
    }

    group.finish();
    print_profiling_stats();
}

/// Benchmark translating and running counting loops.
fn end_to_end_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let ctx = Context::new();
    let mut group = c.benchmark_group("run/counting_loop");

    for limit in [10, 1_000, 100_000] {
        let arena = Bump::new();
        let stmt = counting_loop(AstBuilder::new(&arena), limit);

        group.throughput(Throughput::Elements(limit as u64));
        group.bench_with_input(BenchmarkId::from_parameter(limit), &stmt, |b, stmt| {
            b.iter(|| {
                let mut env = Env::new();
                let value = run(&ctx, black_box(stmt), &mut env).unwrap();
                end_profiling_frame();
                black_box(value)
            });
        });
    }

    group.finish();
    print_profiling_stats();
}

criterion_group!(
    benches,
    straight_line_benchmarks,
    control_flow_benchmarks,
    end_to_end_benchmarks
);

criterion_main!(benches);
