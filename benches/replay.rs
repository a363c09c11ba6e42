use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gitsketch::command::parse_line;
use gitsketch::export::GitExportTranslator;
use gitsketch::graph::GraphStateMachine;

// Build a machine whose history mixes commits, branches and merges
fn machine_with_history(len: usize) -> GraphStateMachine {
    let mut machine = GraphStateMachine::new();

    for i in 0..len {
        let line = match i % 5 {
            0 => format!("commit 'change {}'", i),
            1 => format!("checkout -b topic{}", i),
            2 => "commit".to_string(),
            3 => "checkout master".to_string(),
            _ => format!("merge topic{}", i - 3),
        };
        machine
            .execute(parse_line(&line).expect("bench line parses"))
            .expect("bench line applies");
    }

    machine
}

fn bench_undo_redo(c: &mut Criterion) {
    let mut group = c.benchmark_group("undo_redo");

    for len in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::new("history", len), &len, |b, &len| {
            let mut machine = machine_with_history(len);
            b.iter(|| {
                machine.undo();
                machine.redo();
                black_box(machine.state());
            })
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_script");

    for len in [10, 100, 500] {
        let machine = machine_with_history(len);
        group.bench_with_input(
            BenchmarkId::new("history", len),
            machine.history(),
            |b, history| b.iter(|| GitExportTranslator::translate(black_box(history))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_undo_redo, bench_export);
criterion_main!(benches);
