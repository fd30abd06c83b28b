use agrobot::{
    PathCapture, PathPoint, RobotState, RobotStatus, TelemetrySimulator,
    robot::SimulatorConfig,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_simulator_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulator");

    group.bench_function("working_tick", |b| {
        let mut simulator = TelemetrySimulator::seeded(
            RobotState {
                status: RobotStatus::Working,
                battery: 100,
                area_covered: 0.,
                total_area: f64::MAX,
                ..RobotState::default()
            },
            SimulatorConfig::default(),
            1,
        );
        b.iter(|| black_box(simulator.tick()));
    });

    group.bench_function("idle_tick", |b| {
        let mut simulator =
            TelemetrySimulator::seeded(RobotState::default(), SimulatorConfig::default(), 1);
        b.iter(|| black_box(simulator.tick()));
    });

    group.finish();
}

fn bench_path_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_capture");

    group.bench_function("draw_and_confirm_500_points", |b| {
        b.iter(|| {
            let mut capture = PathCapture::new();
            capture.begin(PathPoint::new(0., 0.));
            for i in 1..500 {
                let angle = i as f32 / 500. * std::f32::consts::TAU;
                capture.extend(PathPoint::new(angle.cos() * 100., angle.sin() * 100.));
            }
            capture.end();
            let boundary = capture.confirm().unwrap();
            black_box(boundary.area())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_simulator_tick, bench_path_capture);
criterion_main!(benches);
