//=========================================================================
// GW Runtime
//
// Frame scheduler and coordinator for a running game.
//
// Architecture:
// ```text
//     RuntimeBuilder  ──build()──>  Runtime  ──start(game)──>  [running]
//         │                           │
//         ├─ with_slow_tick_modulus() ├─ init_stage(surface, w, h)
//         └─ with_mouse_up_delay()    ├─ dispatch(PointerEvent)
//                                     └─ tick() once per host frame
// ```
//
// The host owns frame pacing: it schedules the next frame first and
// then calls `tick`, so a panic inside game code never stops the loop
// from being rescheduled by the host.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::{error, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::frame::{FrameCounter, FramePhase, FrameStep, DEFAULT_SLOW_TICK_MODULUS};
use crate::core::game::{Game, DEFAULT_MOUSE_UP_DELAY};
use crate::core::input::{PointerEvent, PointerTracker};
use crate::core::signals::SignalBus;
use crate::core::surface::DrawingSurface;
use crate::error::EngineError;

//=== RuntimeBuilder ======================================================

/// Builder for configuring and constructing a [`Runtime`].
///
/// # Default Values
///
/// - **Slow tick modulus**: 60 frames (about once per second at 60Hz)
/// - **Mouse-up delay**: 100 ms
///
/// # Examples
///
/// ```no_run
/// use gw_engine::{Game, GameOptions, RecordingSurface, RuntimeBuilder, Scene};
///
/// let game = Game::new(vec![Scene::new("Welcome")], GameOptions::new(640, 480))?;
///
/// let mut runtime = RuntimeBuilder::new()
///     .with_slow_tick_modulus(40)
///     .build();
/// runtime.init_stage(Some(Box::new(RecordingSurface::new())), 640, 480)?;
/// runtime.start(game);
/// runtime.tick();
/// # Ok::<(), gw_engine::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeBuilder {
    slow_tick_modulus: u64,
    mouse_up_delay: Duration,
}

impl RuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            slow_tick_modulus: DEFAULT_SLOW_TICK_MODULUS,
            mouse_up_delay: DEFAULT_MOUSE_UP_DELAY,
        }
    }

    /// Sets how many frames pass between two slow ticks.
    ///
    /// Default: 60
    ///
    /// # Panics
    ///
    /// Panics if `frames == 0`.
    pub fn with_slow_tick_modulus(mut self, frames: u64) -> Self {
        assert!(frames > 0, "Slow tick modulus must be positive");
        self.slow_tick_modulus = frames;
        self
    }

    /// Sets the delay between a physical and a logical mouse release.
    ///
    /// Default: 100 ms
    pub fn with_mouse_up_delay(mut self, delay: Duration) -> Self {
        self.mouse_up_delay = delay;
        self
    }

    pub fn build(self) -> Runtime {
        info!(
            target: "runtime",
            "Building runtime (slow tick: every {} frames, mouse-up delay: {:?})",
            self.slow_tick_modulus,
            self.mouse_up_delay
        );

        Runtime {
            counter: FrameCounter::new(self.slow_tick_modulus),
            mouse_up_delay: self.mouse_up_delay,
            signals: SignalBus::new(),
            game: None,
            surface: None,
            stage: (0, 0),
            tracker: PointerTracker::new(),
            running: false,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Runtime =============================================================

/// The engine runtime: one per process, created by [`RuntimeBuilder`].
///
/// # Frame Rules
///
/// ```text
/// tick()
///   ├─ frame += 1
///   ├─ Game::pump()                  clicks, sound requests, due release
///   ├─ odd frame  → Game::on_update()
///   ├─ even frame → clear stage, Game::on_render()   (skipped without surface)
///   └─ frame % N == 0 → Game::on_each_second()
/// ```
pub struct Runtime {
    counter: FrameCounter,
    mouse_up_delay: Duration,
    signals: SignalBus,
    game: Option<Game>,
    surface: Option<Box<dyn DrawingSurface>>,
    stage: (u32, u32),
    tracker: PointerTracker,
    running: bool,
}

impl Runtime {
    //--- Stage ------------------------------------------------------------

    /// Binds the drawing surface and the stage size.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidStage`] if either dimension is zero.
    /// - [`EngineError::MissingSurface`] if no surface was supplied. The
    ///   runtime stays usable; its render phase is skipped.
    pub fn init_stage(
        &mut self,
        surface: Option<Box<dyn DrawingSurface>>,
        width: u32,
        height: u32,
    ) -> Result<(), EngineError> {
        if width == 0 || height == 0 {
            error!(target: "runtime", "Refusing stage of size {}x{}", width, height);
            return Err(EngineError::InvalidStage { width, height });
        }

        let Some(surface) = surface else {
            error!(target: "runtime", "No drawing surface supplied to the stage");
            return Err(EngineError::MissingSurface);
        };

        self.surface = Some(surface);
        self.stage = (width, height);
        info!(target: "runtime", "Stage initialized ({}x{})", width, height);
        Ok(())
    }

    /// Offset of the surface inside the host's client area.
    pub fn set_surface_origin(&mut self, x: f32, y: f32) {
        self.tracker.set_origin(x, y);
    }

    //--- Lifecycle --------------------------------------------------------

    /// Binds `game` and starts scheduling.
    ///
    /// A previously bound game is destroyed and handed back.
    pub fn start(&mut self, mut game: Game) -> Option<Game> {
        let previous = self.game.take().map(|mut old| {
            old.destroy();
            info!(target: "runtime", "Previous game replaced");
            old
        });

        let stale = self.signals.purge();
        if stale > 0 {
            trace!(target: "runtime", "Discarded {} stale signal(s)", stale);
        }

        game.set_mouse_up_delay(self.mouse_up_delay);
        game.attach(self.signals.subscribe());
        game.on_start();

        self.game = Some(game);
        self.running = true;
        info!(target: "runtime", "Game started at frame {}", self.counter.frame());

        previous
    }

    /// Halts scheduling and detaches input. The game stays bound but
    /// destroyed until the next `start`.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }

        self.running = false;
        if let Some(game) = self.game.as_mut() {
            game.destroy();
        }
        self.tracker.reset();
        info!(target: "runtime", "Game stopped at frame {}", self.counter.frame());
    }

    //--- Input ------------------------------------------------------------

    /// Feeds one raw pointer event. Ignored while stopped.
    pub fn dispatch(&mut self, event: PointerEvent) {
        self.dispatch_at(event, Instant::now());
    }

    /// [`dispatch`](Self::dispatch) with an explicit timestamp.
    pub fn dispatch_at(&mut self, event: PointerEvent, now: Instant) {
        if !self.running {
            trace!(target: "input", "Runtime stopped, dropping {:?}", event);
            return;
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match event {
            PointerEvent::Moved { x, y, target } => {
                self.tracker.record_global(x, y);
                if target.is_surface() {
                    let (lx, ly) = self.tracker.localize();
                    game.on_mouse_over(lx, ly);
                } else {
                    game.on_mouse_out();
                }
            }
            PointerEvent::Pressed { target, .. } => {
                if target.is_surface() {
                    let (lx, ly) = self.tracker.local();
                    game.on_mouse_down(lx, ly);
                }
            }
            PointerEvent::Released { target, .. } => {
                if target.is_surface() {
                    let (lx, ly) = self.tracker.local();
                    game.on_mouse_up(lx, ly, now);
                }
            }
            PointerEvent::Clicked { target } => {
                let (lx, ly) = self.tracker.local();
                self.signals.publish_click(target, lx, ly);
            }
        }
    }

    //--- Frames -----------------------------------------------------------

    /// Runs one scheduled frame.
    pub fn tick(&mut self) -> FrameStep {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) with an explicit timestamp.
    pub fn tick_at(&mut self, now: Instant) -> FrameStep {
        let idle = FrameStep {
            frame: self.counter.frame(),
            phase: FramePhase::Idle,
            slow_tick: false,
        };
        if !self.running {
            return idle;
        }
        let Some(game) = self.game.as_mut() else {
            return idle;
        };

        let step = self.counter.advance();
        game.pump(now);

        match step.phase {
            FramePhase::Update => game.on_update(),
            FramePhase::Render => match self.surface.as_mut() {
                Some(surface) => {
                    let (width, height) = self.stage;
                    surface.clear_rect(0.0, 0.0, width as f32, height as f32);
                    game.on_render(surface.as_mut());
                }
                None => trace!(target: "runtime", "No surface bound, render skipped"),
            },
            FramePhase::Idle => {}
        }

        if step.slow_tick {
            trace!(target: "runtime", "Slow tick at frame {}", step.frame);
            game.on_each_second();
        }

        step
    }

    //--- Accessors --------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames scheduled since the runtime was built; not reset by `start`.
    pub fn frame(&self) -> u64 {
        self.counter.frame()
    }

    pub fn slow_tick_modulus(&self) -> u64 {
        self.counter.slow_tick_modulus()
    }

    pub fn mouse_up_delay(&self) -> Duration {
        self.mouse_up_delay
    }

    pub fn stage_size(&self) -> (u32, u32) {
        self.stage
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    pub fn signals(&self) -> &SignalBus {
        &self.signals
    }

    /// Last known pointer position in client-area coordinates.
    pub fn global_pointer(&self) -> (f32, f32) {
        self.tracker.global()
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("frame", &self.counter.frame())
            .field("running", &self.running)
            .field("stage", &self.stage)
            .field("surface", &self.surface.is_some())
            .field("game", &self.game)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::core::entity::{Button, ButtonStyle, FrameContext};
    use crate::core::game::GameOptions;
    use crate::core::input::{EventTarget, MouseButton};
    use crate::core::scene::{Scene, SceneBehavior};
    use crate::core::surface::{DrawCommand, RecordingSurface};

    //--- Test Helpers -----------------------------------------------------

    struct Counting {
        updates: Rc<Cell<u32>>,
        seconds: Rc<Cell<u32>>,
    }

    impl SceneBehavior for Counting {
        fn on_scene_update(&mut self, _x: f32, _y: f32, _ctx: &FrameContext<'_>) {
            self.updates.set(self.updates.get() + 1);
        }

        fn on_each_second(&mut self, _ctx: &FrameContext<'_>) {
            self.seconds.set(self.seconds.get() + 1);
        }
    }

    fn welcome_game() -> Game {
        let mut welcome = Scene::new("Welcome");
        welcome.add_entity(Button::new(
            ButtonStyle::at(250.0, 200.0, "Enter Game").with_width(150.0),
            |ctx| {
                ctx.goto("Main");
            },
        ));
        Game::new(vec![welcome, Scene::new("Main")], GameOptions::new(640, 480)).unwrap()
    }

    fn counting_game(updates: &Rc<Cell<u32>>, seconds: &Rc<Cell<u32>>) -> Game {
        let scene = Scene::with_behavior(
            "Main",
            Counting {
                updates: updates.clone(),
                seconds: seconds.clone(),
            },
        );
        Game::new(vec![scene], GameOptions::new(640, 480)).unwrap()
    }

    fn active_name(runtime: &Runtime) -> Option<String> {
        runtime
            .game()
            .and_then(|g| g.active_scene())
            .map(|s| s.name().to_string())
    }

    fn click_at(runtime: &mut Runtime, x: f32, y: f32) {
        runtime.dispatch(PointerEvent::Moved { x, y, target: EventTarget::Surface });
        runtime.dispatch(PointerEvent::Clicked { target: EventTarget::Surface });
    }

    //=====================================================================
    // RuntimeBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = RuntimeBuilder::new();
        assert_eq!(builder.slow_tick_modulus, 60);
        assert_eq!(builder.mouse_up_delay, Duration::from_millis(100));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let runtime = RuntimeBuilder::new()
            .with_slow_tick_modulus(40)
            .with_mouse_up_delay(Duration::from_millis(50))
            .build();

        assert_eq!(runtime.slow_tick_modulus(), 40);
        assert_eq!(runtime.mouse_up_delay(), Duration::from_millis(50));
        assert!(!runtime.is_running());
    }

    #[test]
    #[should_panic(expected = "Slow tick modulus must be positive")]
    fn builder_with_slow_tick_modulus_panics_on_zero() {
        RuntimeBuilder::new().with_slow_tick_modulus(0);
    }

    //=====================================================================
    // Stage Tests
    //=====================================================================

    #[test]
    fn missing_surface_is_reported() {
        let mut runtime = RuntimeBuilder::new().build();
        assert_eq!(runtime.init_stage(None, 640, 480), Err(EngineError::MissingSurface));
        assert!(!runtime.has_surface());
    }

    #[test]
    fn zero_sized_stage_is_rejected() {
        let mut runtime = RuntimeBuilder::new().build();
        let result = runtime.init_stage(Some(Box::new(RecordingSurface::new())), 0, 480);
        assert_eq!(result, Err(EngineError::InvalidStage { width: 0, height: 480 }));
    }

    #[test]
    fn render_without_surface_is_skipped() {
        let updates = Rc::new(Cell::new(0));
        let seconds = Rc::new(Cell::new(0));
        let mut runtime = RuntimeBuilder::new().build();
        runtime.start(counting_game(&updates, &seconds));

        assert_eq!(runtime.tick().phase, FramePhase::Update);
        assert_eq!(runtime.tick().phase, FramePhase::Render);
        assert_eq!(updates.get(), 1);
    }

    //=====================================================================
    // Scheduling Tests
    //=====================================================================

    #[test]
    fn tick_before_start_is_idle() {
        let mut runtime = RuntimeBuilder::new().build();
        let step = runtime.tick();
        assert_eq!(step.phase, FramePhase::Idle);
        assert_eq!(runtime.frame(), 0);
    }

    #[test]
    fn update_and_render_alternate() {
        let updates = Rc::new(Cell::new(0));
        let seconds = Rc::new(Cell::new(0));
        let surface = Rc::new(RefCell::new(RecordingSurface::new()));

        let mut runtime = RuntimeBuilder::new().build();
        runtime.init_stage(Some(Box::new(surface.clone())), 640, 480).unwrap();
        runtime.start(counting_game(&updates, &seconds));

        for _ in 0..10 {
            runtime.tick();
        }

        assert_eq!(updates.get(), 5);
        let clears = surface
            .borrow()
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::ClearRect { .. }))
            .count();
        assert_eq!(clears, 5);
    }

    #[test]
    fn render_clears_whole_stage_first() {
        let surface = Rc::new(RefCell::new(RecordingSurface::new()));
        let mut runtime = RuntimeBuilder::new().build();
        runtime.init_stage(Some(Box::new(surface.clone())), 640, 480).unwrap();
        runtime.start(welcome_game());

        runtime.tick();
        assert!(surface.borrow().commands().is_empty(), "Update frames never paint");

        runtime.tick();
        let recorded = surface.borrow();
        assert_eq!(
            recorded.commands()[0],
            DrawCommand::ClearRect { x: 0.0, y: 0.0, width: 640.0, height: 480.0 }
        );
        assert!(recorded.texts().contains(&"Enter Game"));
        assert_eq!(recorded.depth(), 0);
    }

    #[test]
    fn slow_tick_fires_every_modulus() {
        let updates = Rc::new(Cell::new(0));
        let seconds = Rc::new(Cell::new(0));
        let mut runtime = RuntimeBuilder::new().with_slow_tick_modulus(40).build();
        runtime.start(counting_game(&updates, &seconds));

        let fired: Vec<u64> = (0..120)
            .map(|_| runtime.tick())
            .filter(|s| s.slow_tick)
            .map(|s| s.frame)
            .collect();

        assert_eq!(fired, vec![40, 80, 120]);
        assert_eq!(seconds.get(), 3);
    }

    //=====================================================================
    // Lifecycle Tests
    //=====================================================================

    #[test]
    fn start_replaces_and_destroys_previous_game() {
        let mut runtime = RuntimeBuilder::new().build();
        assert!(runtime.start(welcome_game()).is_none());

        let previous = runtime.start(welcome_game()).unwrap();
        assert!(!previous.is_attached());
        assert!(runtime.game().unwrap().is_attached());
    }

    #[test]
    fn frame_counter_survives_restart() {
        let mut runtime = RuntimeBuilder::new().build();
        runtime.start(welcome_game());
        runtime.tick();
        runtime.tick();
        runtime.tick();

        runtime.start(welcome_game());
        assert_eq!(runtime.frame(), 3);
        assert_eq!(runtime.tick().phase, FramePhase::Render);
    }

    #[test]
    fn stop_halts_ticks_and_input() {
        let mut runtime = RuntimeBuilder::new().build();
        runtime.start(welcome_game());
        runtime.tick();
        runtime.stop();

        assert_eq!(runtime.tick().phase, FramePhase::Idle);
        assert_eq!(runtime.frame(), 1);

        click_at(&mut runtime, 300.0, 210.0);
        assert_eq!(runtime.signals().purge(), 0, "Stopped runtime publishes nothing");
        assert!(!runtime.game().unwrap().is_attached());
    }

    //=====================================================================
    // Input Tests
    //=====================================================================

    #[test]
    fn click_on_welcome_button_enters_main() {
        let mut runtime = RuntimeBuilder::new().build();
        runtime.start(welcome_game());

        click_at(&mut runtime, 300.0, 210.0);
        runtime.tick();

        assert_eq!(active_name(&runtime).as_deref(), Some("Main"));
    }

    #[test]
    fn click_outside_button_stays_on_welcome() {
        let mut runtime = RuntimeBuilder::new().build();
        runtime.start(welcome_game());

        click_at(&mut runtime, 10.0, 10.0);
        runtime.tick();

        assert_eq!(active_name(&runtime).as_deref(), Some("Welcome"));
    }

    #[test]
    fn click_keeps_its_position_when_pointer_moves_before_tick() {
        let mut runtime = RuntimeBuilder::new().build();
        runtime.start(welcome_game());

        click_at(&mut runtime, 300.0, 210.0);
        runtime.dispatch(PointerEvent::Moved { x: 10.0, y: 10.0, target: EventTarget::Surface });
        runtime.tick();

        assert_eq!(active_name(&runtime).as_deref(), Some("Main"));
    }

    #[test]
    fn pointer_is_localized_against_surface_origin() {
        let mut runtime = RuntimeBuilder::new().build();
        runtime.set_surface_origin(8.0, 12.0);
        runtime.start(welcome_game());

        runtime.dispatch(PointerEvent::Moved {
            x: 308.4,
            y: 221.6,
            target: EventTarget::Surface,
        });

        assert_eq!(runtime.global_pointer(), (308.4, 221.6));
        assert_eq!(runtime.game().unwrap().pointer(), (300.0, 210.0));
    }

    #[test]
    fn off_surface_buttons_are_ignored() {
        let mut runtime = RuntimeBuilder::new().build();
        runtime.start(welcome_game());

        runtime.dispatch(PointerEvent::Pressed {
            button: MouseButton::Left,
            target: EventTarget::Elsewhere,
        });
        assert!(!runtime.game().unwrap().is_mouse_down());
    }

    #[test]
    fn release_applies_on_first_tick_after_delay() {
        let mut runtime = RuntimeBuilder::new().build();
        runtime.start(welcome_game());
        let t0 = Instant::now();

        let press = PointerEvent::Pressed { button: MouseButton::Left, target: EventTarget::Surface };
        let release = PointerEvent::Released { button: MouseButton::Left, target: EventTarget::Surface };
        runtime.dispatch_at(press, t0);
        runtime.dispatch_at(release, t0);

        runtime.tick_at(t0 + Duration::from_millis(50));
        assert!(runtime.game().unwrap().is_mouse_down());

        runtime.tick_at(t0 + Duration::from_millis(120));
        assert!(!runtime.game().unwrap().is_mouse_down());
    }
}
