use std::collections::HashMap;

use iconeko_rs::prelude::*;

#[test_log::test]
fn test_config_from_toml_layers_defaults() {
	let toml = r#"
		behavior = "random_walk"
		speed = 16
		seed = 11

		[bounds]
		width = 640
		height = 480
	"#;

	let config: PetConfig = config::Config::builder()
		.add_source(config::File::from_str(toml, config::FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();

	assert_eq!(config.behavior, BehaviorMode::RandomWalk);
	assert_eq!(config.speed, 16);
	assert_eq!(config.seed, Some(11));
	assert_eq!(config.bounds, Bounds::new(640, 480));
	assert_eq!(config.fps, 120, "unset fields keep their defaults");
	assert!(config.validate().is_ok());
}

#[test_log::test]
fn test_invalid_config_rejected_at_session_start() {
	let config: PetConfig = serde_json::from_str(r#"{ "ticks_per_second": 0.0 }"#).unwrap();
	let result = PetSession::new(&config, SpriteTable::<()>::empty());
	assert!(matches!(result, Err(PetError::InvalidConfig { field: "ticks_per_second", .. })));
}

#[test_log::test]
fn test_render_frames_serialize() {
	let config = PetConfig {
		start: Some(Position::new(50, 60)),
		seed: Some(3),
		..Default::default()
	};
	let mut session = PetSession::new(&config, SpriteTable::<()>::empty()).unwrap();
	session.start();

	let frame = session.on_timer().unwrap();
	let json = serde_json::to_value(frame).unwrap();
	assert_eq!(json["state"], "stop");
	assert_eq!(json["behavior"], "chase");
	assert_eq!(json["frame"], 28);
	assert_eq!(json["logical"]["x"], 50);
}

#[test_log::test]
fn test_cycling_every_behavior_keeps_pet_in_bounds() {
	let config = PetConfig {
		bounds: Bounds::from_viewport(800, 600),
		seed: Some(17),
		..Default::default()
	};
	let mut session = PetSession::new(&config, SpriteTable::<()>::empty()).unwrap();
	session.start();
	session.pointer_moved(Point::new(400.0, 300.0));

	let bounds = config.bounds;
	for round in 0..BehaviorMode::ALL.len() {
		for i in 0..2400 {
			if i % 240 == 0 {
				let k = f64::from(i + round as i32 * 7);
				session.pointer_moved(Point::new((k * 37.0) % 800.0, (k * 53.0) % 600.0));
			}
			let frame = session.on_timer().unwrap();
			assert!(bounds.contains(frame.logical));
			assert!(frame.x >= 0.0 && frame.x <= f64::from(bounds.width));
			assert!(frame.y >= 0.0 && frame.y <= f64::from(bounds.height));
		}
		session.cycle_behavior();
	}
	assert_eq!(session.agent().behavior(), BehaviorMode::Chase);
}

#[test_log::test]
fn test_sprite_table_swap_keeps_simulation_state() {
	let config = PetConfig {
		start: Some(Position::new(100, 100)),
		seed: Some(5),
		..Default::default()
	};
	let names = ["still", "alert", "erun1", "erun2", "sleep1"];
	let named: HashMap<String, String> =
		names.iter().map(|n| (n.to_string(), n.to_uppercase())).collect();
	let mut session = PetSession::new(&config, SpriteTable::from_named(&named)).unwrap();
	session.start();
	session.pointer_moved(Point::new(700.0, 131.0));

	for _ in 0..240 {
		session.on_timer();
	}
	let before = (session.agent().state(), session.agent().logical(), session.agent().tick());

	session.set_sprites(SpriteTable::new((0..32).map(|i| i.to_string())));
	let after = (session.agent().state(), session.agent().logical(), session.agent().tick());
	assert_eq!(before, after);
	assert_eq!(session.sprite(), Some(&session.frame().frame.to_string()));
}
