//! The per-tick animation state machine.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{
	Ball, BehaviorMode, BehaviorScratch, Bounds, Motion, PetConfig, PetError, Point, Position,
	State, constants, flee_target, frame_index, pacing_corner, resolve_direction,
};

/// One simulated pet.
///
/// The agent owns all of its state, including the last pointer position and
/// its random number generator, so two agents never interfere.
///
/// # Examples
///
/// ```
/// use iconeko_types::pet::{PetAgent, PetConfig, Point, Position, State};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PetConfig {
///     start: Some(Position::new(100, 100)),
///     seed: Some(42),
///     ..Default::default()
/// };
/// let mut agent = PetAgent::new(&config)?;
///
/// agent.set_pointer(Point::new(600.0, 131.0));
/// agent.step();
/// assert_eq!(agent.state(), State::Awake);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PetAgent {
	speed: i32,
	idle_threshold: i32,
	bounds: Bounds,
	behavior: BehaviorMode,
	allow_behavior_change: bool,

	state: State,
	tick: u32,
	state_tick: u32,
	awake_jitter: u32,

	logical: Position,
	prev_logical: Position,
	target: Point,
	old_target: Point,
	motion: Motion,

	pointer: Option<Point>,
	scratch: BehaviorScratch,
	rng: SmallRng,
}

impl PetAgent {
	/// Creates an agent standing still at the configured start.
	///
	/// # Errors
	///
	/// Returns [`PetError::InvalidConfig`] if the configuration fails
	/// [`PetConfig::validate`].
	pub fn new(config: &PetConfig) -> Result<Self, PetError> {
		config.validate()?;

		let mut rng = match config.seed {
			Some(seed) => SmallRng::seed_from_u64(seed),
			None => SmallRng::from_os_rng(),
		};

		let bounds = config.bounds;
		let logical = match config.start {
			Some(start) => bounds.clamp(start),
			None => Position::new(
				rng.random_range(0..=bounds.width),
				rng.random_range(0..=bounds.height),
			),
		};
		let anchor = logical.anchor();

		// Both values were range checked by `validate`.
		let speed = i32::try_from(config.speed).unwrap_or(i32::MAX);
		let idle_threshold = i32::try_from(config.idle_threshold).unwrap_or(i32::MAX);

		log::debug!(
			"New pet at ({}, {}) in {}x{}, behavior {}",
			logical.x,
			logical.y,
			bounds.width,
			bounds.height,
			config.behavior.name()
		);

		Ok(Self {
			speed,
			idle_threshold,
			bounds,
			behavior: config.behavior,
			allow_behavior_change: config.allow_behavior_change,
			state: State::Stop,
			tick: 0,
			state_tick: 0,
			awake_jitter: 0,
			logical,
			prev_logical: logical,
			target: anchor,
			old_target: anchor,
			motion: Motion::ZERO,
			pointer: None,
			scratch: BehaviorScratch::default(),
			rng,
		})
	}

	/// Advances the simulation by one logical tick.
	pub fn step(&mut self) {
		self.prev_logical = self.logical;

		self.tick += 1;
		if self.tick >= constants::TICK_WRAP {
			self.tick = 0;
		}
		if self.tick % 2 == 0 {
			self.state_tick += 1;
		}

		match self.behavior {
			BehaviorMode::Chase => self.chase(),
			BehaviorMode::Flee => self.flee(),
			BehaviorMode::RandomWalk => self.random_walk(),
			BehaviorMode::Pacing => self.pace(),
			BehaviorMode::Orbit => self.orbit(),
		}
	}

	fn chase(&mut self) {
		let target = self.pointer.unwrap_or_else(|| self.logical.anchor());
		self.run_towards(target);
	}

	fn flee(&mut self) {
		let Some(pointer) = self.pointer else {
			self.run_towards(self.logical.anchor());
			return;
		};

		let distance =
			f64::from(self.idle_threshold) * f64::from(constants::FLEE_DISTANCE_FACTOR);
		match flee_target(&mut self.rng, self.logical, pointer, distance, self.bounds) {
			Some(target) => {
				self.run_towards(target);
				if self.state == State::Awake {
					let origin = self.logical.to_point();
					self.face(target.x - origin.x, target.y - origin.y);
				}
			}
			None => self.run_towards(self.target),
		}
	}

	fn random_walk(&mut self) {
		if self.state == State::Sleep {
			self.scratch.action_count = self.scratch.action_count.saturating_add(1);
		}

		let limit = self.idle_threshold.unsigned_abs().saturating_mul(constants::RANDOM_WALK_FACTOR);
		if self.scratch.action_count > limit {
			self.scratch.action_count = 0;
			let target = Point::new(
				self.rng.random::<f64>() * f64::from(self.bounds.width),
				self.rng.random::<f64>() * f64::from(self.bounds.height),
			);
			log::trace!("Random walk toward ({:.0}, {:.0})", target.x, target.y);
			self.run_towards(target);
		} else {
			self.run_towards(self.target);
		}
	}

	fn pace(&mut self) {
		if self.motion.is_zero() {
			self.scratch.corner = (self.scratch.corner + 1) % 4;
		}
		self.run_towards(pacing_corner(self.scratch.corner, self.bounds));
	}

	fn orbit(&mut self) {
		let (bounds, speed) = (self.bounds, self.speed);
		let ball = self.scratch.ball.get_or_insert_with(|| Ball::launch(&mut self.rng, bounds, speed));
		ball.advance(bounds, speed);
		let target = ball.position;
		self.run_towards(target);
	}

	/// Steers toward `target` (anchor space) and runs the state transition for this tick.
	pub fn run_towards(&mut self, target: Point) {
		self.old_target = self.target;
		self.target = target;

		let anchor = self.logical.anchor();
		let dx = target.x - anchor.x;
		let dy = target.y - anchor.y;
		let distance = dx.hypot(dy);
		let speed = f64::from(self.speed);

		self.motion = if distance == 0.0 {
			Motion::ZERO
		} else if distance <= speed {
			Motion::new(dx.trunc() as i32, dy.trunc() as i32)
		} else {
			Motion::new((speed * dx / distance).trunc() as i32, (speed * dy / distance).trunc() as i32)
		};

		let idle = f64::from(self.idle_threshold);
		let move_start = (self.old_target.x - target.x).abs() > idle
			|| (self.old_target.y - target.y).abs() > idle;

		self.transition(move_start);
	}

	fn transition(&mut self, move_start: bool) {
		match self.state {
			State::Stop => {
				if move_start {
					self.set_state(State::Awake);
				} else if self.state_tick >= constants::STOP_TIME {
					let next = self.wall_contact().unwrap_or(State::Wash);
					self.set_state(next);
				}
			}
			State::Wash => self.timed(move_start, constants::WASH_TIME, State::Scratch),
			State::Scratch => self.timed(move_start, constants::SCRATCH_TIME, State::Yawn),
			State::Yawn => self.timed(move_start, constants::YAWN_TIME, State::Sleep),
			State::Sleep => {
				if move_start {
					self.set_state(State::Awake);
				}
			}
			State::Awake => {
				if self.state_tick >= constants::AWAKE_TIME + self.awake_jitter {
					self.face(f64::from(self.motion.dx), f64::from(self.motion.dy));
				}
			}
			State::ClawN | State::ClawS | State::ClawW | State::ClawE => {
				self.timed(move_start, constants::CLAW_TIME, State::Scratch);
			}
			State::MoveN
			| State::MoveS
			| State::MoveW
			| State::MoveE
			| State::MoveNW
			| State::MoveNE
			| State::MoveSW
			| State::MoveSE => self.advance(),
		}
	}

	/// Aborts to `Awake` on a new destination, else moves to `next` once `duration` elapses.
	fn timed(&mut self, move_start: bool, duration: u32, next: State) {
		if move_start {
			self.set_state(State::Awake);
		} else if self.state_tick >= duration {
			self.set_state(next);
		}
	}

	/// Claw state for the wall the current motion pushes into, if any.
	///
	/// Reads the motion of the current tick, not the motion that first hit
	/// the wall.
	fn wall_contact(&self) -> Option<State> {
		let Motion {
			dx,
			dy,
		} = self.motion;
		let Position {
			x,
			y,
		} = self.logical;

		if dx < 0 && x <= 0 {
			Some(State::ClawW)
		} else if dx > 0 && x >= self.bounds.width {
			Some(State::ClawE)
		} else if dy < 0 && y <= 0 {
			Some(State::ClawN)
		} else if dy > 0 && y >= self.bounds.height {
			Some(State::ClawS)
		} else {
			None
		}
	}

	fn advance(&mut self) {
		let next = Position::new(
			self.logical.x.saturating_add(self.motion.dx),
			self.logical.y.saturating_add(self.motion.dy),
		);
		let was_outside = next.x <= 0
			|| next.x >= self.bounds.width
			|| next.y <= 0
			|| next.y >= self.bounds.height;

		self.face(f64::from(self.motion.dx), f64::from(self.motion.dy));

		let clamped = self.bounds.clamp(next);
		if was_outside && clamped == self.logical {
			self.set_state(State::Stop);
		} else {
			self.logical = clamped;
		}
	}

	/// Switches to the running state matching `(dx, dy)` unless already in it.
	fn face(&mut self, dx: f64, dy: f64) {
		let next = resolve_direction(dx, dy);
		if self.state != next {
			self.set_state(next);
		}
	}

	/// Enters `state`, resetting both tick counters.
	///
	/// Entering `Awake` draws a fresh random extension of its duration.
	pub fn set_state(&mut self, state: State) {
		log::trace!("{} -> {} at ({}, {})", self.state, state, self.logical.x, self.logical.y);

		self.tick = 0;
		self.state_tick = 0;
		self.awake_jitter = if state == State::Awake {
			self.rng.random_range(0..constants::AWAKE_JITTER)
		} else {
			0
		};
		self.state = state;
	}

	/// Records the latest pointer position (anchor space).
	pub fn set_pointer(&mut self, pointer: Point) {
		self.pointer = Some(pointer);
	}

	/// Switches behavior.
	///
	/// The target is reset to the current anchor so the new mode does not
	/// inherit a distant destination, and a sleeping pet wakes up.
	pub fn set_behavior(&mut self, behavior: BehaviorMode) {
		log::info!("Behavior switch: {} -> {}", self.behavior, behavior);

		self.behavior = behavior;
		if self.state == State::Sleep {
			self.set_state(State::Awake);
		}

		let anchor = self.logical.anchor();
		self.target = anchor;
		self.old_target = anchor;
		self.scratch.action_count = 0;
	}

	/// Advances to the next behavior in cycling order.
	///
	/// Returns the new behavior, or `None` when behavior changes are disabled.
	pub fn cycle_behavior(&mut self) -> Option<BehaviorMode> {
		if !self.allow_behavior_change {
			log::debug!("Behavior change ignored, disabled by config");
			return None;
		}

		let next = self.behavior.next();
		self.set_behavior(next);
		Some(next)
	}

	/// Replaces the movement bounds, pulling the pet inside them.
	pub fn set_bounds(&mut self, bounds: Bounds) {
		self.bounds = bounds;
		self.logical = bounds.clamp(self.logical);
		self.prev_logical = bounds.clamp(self.prev_logical);
	}

	/// Moves the pet without animating, e.g. when it is dragged.
	pub fn set_position(&mut self, position: Position) {
		self.logical = self.bounds.clamp(position);
		self.prev_logical = self.logical;
	}

	/// Position between the previous and current logical positions.
	///
	/// `t` is the fraction of a tick elapsed since the last step and is
	/// clamped to `[0, 1]`.
	pub fn interpolate(&self, t: f64) -> Point {
		let t = t.clamp(0.0, 1.0);
		let prev = self.prev_logical.to_point();
		let current = self.logical.to_point();
		Point::new(prev.x + (current.x - prev.x) * t, prev.y + (current.y - prev.y) * t)
	}

	/// Sprite slot for the current state and tick.
	pub fn frame_index(&self) -> usize {
		frame_index(self.state, self.tick)
	}

	/// Current state.
	pub fn state(&self) -> State {
		self.state
	}

	/// Ticks since the state was entered, wrapping at 9999.
	pub fn tick(&self) -> u32 {
		self.tick
	}

	/// State ticks (every second tick) since the state was entered.
	pub fn state_tick(&self) -> u32 {
		self.state_tick
	}

	/// Total `Awake` duration drawn on entry, in state ticks.
	pub fn awake_duration(&self) -> u32 {
		constants::AWAKE_TIME + self.awake_jitter
	}

	/// Current logical position.
	pub fn logical(&self) -> Position {
		self.logical
	}

	/// Logical position before the last step.
	pub fn prev_logical(&self) -> Position {
		self.prev_logical
	}

	/// Current steering anchor.
	pub fn anchor(&self) -> Point {
		self.logical.anchor()
	}

	/// Current target.
	pub fn target(&self) -> Point {
		self.target
	}

	/// Target before the last step.
	pub fn previous_target(&self) -> Point {
		self.old_target
	}

	/// Motion computed by the last step.
	pub fn motion(&self) -> Motion {
		self.motion
	}

	/// Active behavior.
	pub fn behavior(&self) -> BehaviorMode {
		self.behavior
	}

	/// Movement bounds.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Last pointer position, if any was reported.
	pub fn pointer(&self) -> Option<Point> {
		self.pointer
	}

	/// Per-mode scratch state.
	pub fn scratch(&self) -> &BehaviorScratch {
		&self.scratch
	}
}
