//! Fixed-timestep driver between a display timer and a [`PetAgent`].
//!
//! The display layer calls [`PetSession::on_timer`] at its own refresh rate.
//! Each call adds `ticks_per_second / fps` to an accumulator, runs one
//! [`PetAgent::step`] per whole tick, and renders at the position interpolated
//! by the leftover fraction.
//!
//! ```text
//! Callback  Accumulator   Steps  Render t
//! --------  ------------  -----  --------
//! 1         0.4           0      0.4
//! 2         0.8           0      0.8
//! 3         1.2 → 0.2     1      0.2
//! 4         0.6           0      0.6
//! 5         1.0 → 0.0     1      0.0
//! ```

use serde::Serialize;

use super::{
	BehaviorMode, Bounds, PetAgent, PetConfig, PetError, Point, Position, SpriteTable, State,
};

/// What the display layer draws after a timer callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderFrame {
	/// Interpolated horizontal position of the sprite's top-left corner
	pub x: f64,
	/// Interpolated vertical position of the sprite's top-left corner
	pub y: f64,
	/// Logical position after the last step
	pub logical: Position,
	/// Current state
	pub state: State,
	/// Sprite slot to show
	pub frame: usize,
	/// Active behavior
	pub behavior: BehaviorMode,
}

/// One running pet with its timer accumulator and sprite table.
///
/// # Examples
///
/// ```
/// use iconeko_types::pet::{PetConfig, PetSession, Position, SpriteTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PetConfig {
///     start: Some(Position::new(10, 10)),
///     seed: Some(1),
///     ..Default::default()
/// };
/// let mut session = PetSession::new(&config, SpriteTable::<String>::empty())?;
/// assert!(session.on_timer().is_none(), "not started yet");
///
/// session.start();
/// let frame = session.on_timer().unwrap();
/// assert_eq!((frame.x, frame.y), (10.0, 10.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PetSession<S> {
	agent: PetAgent,
	sprites: SpriteTable<S>,
	tick_increment: f64,
	accumulator: f64,
	running: bool,
	render: Point,
}

impl<S> PetSession<S> {
	/// Creates a stopped session.
	///
	/// # Errors
	///
	/// Returns [`PetError::InvalidConfig`] for a configuration that fails
	/// [`PetConfig::validate`].
	pub fn new(config: &PetConfig, sprites: SpriteTable<S>) -> Result<Self, PetError> {
		let agent = PetAgent::new(config)?;
		let render = agent.logical().to_point();

		Ok(Self {
			agent,
			sprites,
			tick_increment: config.tick_increment(),
			accumulator: 0.0,
			running: false,
			render,
		})
	}

	/// Starts accepting timer callbacks.
	pub fn start(&mut self) {
		if self.running {
			return;
		}
		log::info!("Pet session started ({} behavior)", self.agent.behavior().name());
		self.running = true;
	}

	/// Stops the tick loop; timer callbacks become no-ops.
	pub fn stop(&mut self) {
		if !self.running {
			return;
		}
		log::info!("Pet session stopped");
		self.running = false;
	}

	/// Returns `true` while the session accepts timer callbacks.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Handles one display timer callback.
	///
	/// Returns `None` when the session is stopped.
	pub fn on_timer(&mut self) -> Option<RenderFrame> {
		if !self.running {
			return None;
		}

		self.accumulator += self.tick_increment;
		while self.accumulator >= 1.0 {
			self.accumulator -= 1.0;
			self.agent.step();
		}

		self.render = self.agent.interpolate(self.accumulator);
		Some(self.frame())
	}

	/// Frame for the last rendered position.
	pub fn frame(&self) -> RenderFrame {
		RenderFrame {
			x: self.render.x,
			y: self.render.y,
			logical: self.agent.logical(),
			state: self.agent.state(),
			frame: self.agent.frame_index(),
			behavior: self.agent.behavior(),
		}
	}

	/// Sprite for the current frame, if the table has one.
	pub fn sprite(&self) -> Option<&S> {
		self.sprites.get(self.agent.frame_index())
	}

	/// Records a pointer move (anchor space).
	pub fn pointer_moved(&mut self, pointer: Point) {
		self.agent.set_pointer(pointer);
	}

	/// Cycles behavior; see [`PetAgent::cycle_behavior`].
	pub fn cycle_behavior(&mut self) -> Option<BehaviorMode> {
		self.agent.cycle_behavior()
	}

	/// Switches behavior; see [`PetAgent::set_behavior`].
	pub fn set_behavior(&mut self, behavior: BehaviorMode) {
		self.agent.set_behavior(behavior);
	}

	/// Replaces the sprite table without touching the simulation.
	pub fn set_sprites(&mut self, sprites: SpriteTable<S>) {
		self.sprites = sprites;
	}

	/// Current sprite table.
	pub fn sprites(&self) -> &SpriteTable<S> {
		&self.sprites
	}

	/// Replaces the movement bounds, e.g. after a viewport resize.
	pub fn set_bounds(&mut self, bounds: Bounds) {
		log::debug!("Bounds changed to {}x{}", bounds.width, bounds.height);
		self.agent.set_bounds(bounds);
	}

	/// Fraction of a tick waiting in the accumulator.
	pub fn accumulator(&self) -> f64 {
		self.accumulator
	}

	/// The simulated pet.
	pub fn agent(&self) -> &PetAgent {
		&self.agent
	}

	/// Mutable access to the simulated pet.
	pub fn agent_mut(&mut self) -> &mut PetAgent {
		&mut self.agent
	}

	/// Stops the session and hands back the final agent state.
	pub fn teardown(mut self) -> PetAgent {
		self.stop();
		log::debug!("Pet session torn down after reaching {:?}", self.agent.logical());
		self.agent
	}
}
