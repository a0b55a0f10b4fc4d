//! Benchmark suite for the pet simulation
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use iconeko_types::pet::{
	BehaviorMode, PetAgent, PetConfig, PetSession, Point, Position, SpriteTable,
};
use std::hint::black_box;

const STEPS: u64 = 10_000;

fn config(behavior: BehaviorMode) -> PetConfig {
	PetConfig {
		behavior,
		start: Some(Position::new(400, 300)),
		seed: Some(0x1CE_CA7),
		..Default::default()
	}
}

/// Benchmark raw agent steps for every behavior
fn bench_agent_step(c: &mut Criterion) {
	let mut group = c.benchmark_group("agent_step");
	group.throughput(Throughput::Elements(STEPS));

	for behavior in BehaviorMode::ALL {
		group.bench_with_input(BenchmarkId::new("behavior", behavior.name()), &behavior, |b, &mode| {
			b.iter(|| {
				let Ok(mut pet) = PetAgent::new(&config(mode)) else {
					return;
				};
				pet.set_pointer(Point::new(640.0, 360.0));
				for i in 0..STEPS {
					if i % 97 == 0 {
						pet.set_pointer(Point::new((i % 1200) as f64, (i % 700) as f64));
					}
					pet.step();
				}
				black_box(pet.logical());
			});
		});
	}

	group.finish();
}

/// Benchmark timer callbacks, including interpolation and frame lookup
fn bench_session_timer(c: &mut Criterion) {
	let mut group = c.benchmark_group("session_timer");
	group.throughput(Throughput::Elements(STEPS));

	for fps in [30u32, 120, 240] {
		let config = PetConfig {
			fps,
			..config(BehaviorMode::Orbit)
		};

		group.bench_with_input(BenchmarkId::new("fps", fps), &config, |b, config| {
			b.iter(|| {
				let sprites: SpriteTable<u32> = (0..32).collect();
				let Ok(mut session) = PetSession::new(config, sprites) else {
					return;
				};
				session.start();
				for _ in 0..STEPS {
					black_box(session.on_timer());
				}
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_agent_step, bench_session_timer);
criterion_main!(benches);
