use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use unit_value_stepper::{Unit, ValueController};

const DRAFTS: &[(&str, &str)] = &[
    ("strict", "42.125"),
    ("comma", "12,5"),
    ("recovered", "12.5px trailing"),
    ("multi_dot", "1.2.3.4"),
    ("empty", "    "),
    ("garbage", "not a number at all"),
];

fn bench_commit_draft(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_draft");

    for &(name, draft) in DRAFTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &draft, |b, &draft| {
            let mut controller: ValueController = ValueController::default();
            b.iter(|| {
                controller.edit_draft(black_box(draft));
                black_box(controller.commit_draft())
            });
        });
    }

    group.finish();
}

fn bench_stepper_availability(c: &mut Criterion) {
    let mut controller: ValueController = ValueController::default();
    controller.switch_unit(Unit::Pixel);
    controller.edit_draft("  1234.5e2px");

    c.bench_function("stepper_availability", |b| {
        b.iter(|| black_box(controller.stepper_availability()))
    });
}

criterion_group!(benches, bench_commit_draft, bench_stepper_availability);
criterion_main!(benches);
