//=========================================================================
// Game
//=========================================================================
//
// Top-level object owning every scene, the navigator, global pointer
// state and the optional custom cursor.
//
// Architecture:
//   Runtime ──tick──► Game::pump()      (clicks, sounds, due releases)
//                     Game::on_update() (resolve active → cursor → commit)
//                     Game::on_render() (active scene → cursor on top)
//
// Input arrives already normalized to surface-local coordinates. Mouse
// releases are debounced: `on_mouse_up` only schedules the logical
// release, which `pump` applies once its due time has passed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::entity::{Cursor, FrameContext};
use crate::core::navigator::Navigator;
use crate::core::scene::Scene;
use crate::core::signals::{SignalSubscription, SoundRequester};
use crate::core::sound::SoundService;
use crate::core::surface::DrawingSurface;
use crate::error::EngineError;

/// Default debounce between a physical and a logical mouse release.
pub const DEFAULT_MOUSE_UP_DELAY: Duration = Duration::from_millis(100);

//=== GameOptions =========================================================

/// Construction options for a [`Game`].
pub struct GameOptions {
    pub width: u32,
    pub height: u32,
    pub cursor: Option<Box<dyn Cursor>>,
    pub show_fancy_cursor: bool,
}

impl GameOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cursor: None,
            show_fancy_cursor: false,
        }
    }

    /// Supplies a custom cursor. It is only used when
    /// [`show_fancy_cursor`](Self::show_fancy_cursor) is enabled.
    pub fn with_cursor<C>(mut self, cursor: C) -> Self
    where
        C: Cursor + 'static,
    {
        self.cursor = Some(Box::new(cursor));
        self
    }

    pub fn show_fancy_cursor(mut self, show: bool) -> Self {
        self.show_fancy_cursor = show;
        self
    }
}

impl std::fmt::Debug for GameOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cursor", &self.cursor.as_ref().map(|c| c.id()))
            .field("show_fancy_cursor", &self.show_fancy_cursor)
            .finish()
    }
}

//=== Game ================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingRelease {
    due: Instant,
    x: f32,
    y: f32,
}

pub struct Game {
    scenes: Vec<Scene>,
    navigator: Navigator,
    active: Option<usize>,

    width: u32,
    height: u32,
    cursor: Option<Box<dyn Cursor>>,

    pointer: (f32, f32),
    mouse_down: bool,
    pending_release: Option<PendingRelease>,
    mouse_up_delay: Duration,

    subscription: Option<SignalSubscription>,
    requester: SoundRequester,
    sound_service: Option<Box<dyn SoundService>>,
}

impl Game {
    //--- Construction -----------------------------------------------------

    /// Builds a game from its scenes; the first scene is the initial one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateScene`] if two scenes share a name.
    pub fn new(mut scenes: Vec<Scene>, options: GameOptions) -> Result<Self, EngineError> {
        let mut seen = HashSet::new();
        for scene in &scenes {
            if !seen.insert(scene.name().to_string()) {
                return Err(EngineError::DuplicateScene(scene.name().to_string()));
            }
        }

        let names = scenes.iter().map(|s| s.name().to_string()).collect();
        let navigator = Navigator::new(names);

        for scene in scenes.iter_mut() {
            scene.set_size(options.width as f32, options.height as f32);
            scene.attach_navigator(navigator.clone());
        }

        let cursor = if options.show_fancy_cursor {
            options.cursor
        } else {
            if options.cursor.is_some() {
                debug!(target: "runtime", "Custom cursor supplied but disabled");
            }
            None
        };

        debug!(
            target: "runtime",
            "Game created: {} scene(s), {}x{}, cursor: {}",
            scenes.len(),
            options.width,
            options.height,
            cursor.is_some()
        );

        Ok(Self {
            scenes,
            navigator,
            active: None,
            width: options.width,
            height: options.height,
            cursor,
            pointer: (0.0, 0.0),
            mouse_down: false,
            pending_release: None,
            mouse_up_delay: DEFAULT_MOUSE_UP_DELAY,
            subscription: None,
            requester: SoundRequester::default(),
            sound_service: None,
        })
    }

    /// Installs the service that plays requested sounds.
    pub fn with_sound_service<S>(mut self, service: S) -> Self
    where
        S: SoundService + 'static,
    {
        self.sound_service = Some(Box::new(service));
        self
    }

    pub(crate) fn set_mouse_up_delay(&mut self, delay: Duration) {
        self.mouse_up_delay = delay;
    }

    //--- Lifecycle --------------------------------------------------------

    /// Subscribes to the runtime's click and sound channels.
    pub fn attach(&mut self, subscription: SignalSubscription) {
        self.requester = subscription.requester();
        for scene in self.scenes.iter_mut() {
            scene.attach_sounds(self.requester.clone());
        }
        self.subscription = Some(subscription);
    }

    /// Detaches from the signal channels. Safe to call repeatedly, and
    /// before the game was ever started.
    pub fn destroy(&mut self) {
        if self.subscription.take().is_none() {
            trace!(target: "runtime", "Game already detached");
            return;
        }

        self.requester = SoundRequester::default();
        for scene in self.scenes.iter_mut() {
            scene.attach_sounds(SoundRequester::default());
        }
        info!(target: "runtime", "Game destroyed, signal listeners detached");
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Activates the first scene.
    pub fn on_start(&mut self) {
        let Some(first) = self.scenes.first() else {
            warn!(target: "runtime", "Game has no scenes to start");
            return;
        };

        first.start();
        self.active = self.navigator.active_index();
        info!(target: "scene", "Scene '{}' activated", first.name());
    }

    //--- Frame Phases -----------------------------------------------------

    /// Drains pending signals and applies a due mouse release.
    pub fn pump(&mut self, now: Instant) {
        self.drain_clicks();
        self.drain_sounds();
        self.release_if_due(now);
    }

    /// Update phase: resolve the active scene, move the cursor, commit.
    pub fn on_update(&mut self) {
        if self.scenes.is_empty() {
            return;
        }

        let resolved = self.navigator.active_index();
        if resolved != self.active {
            if let Some(name) = self.navigator.active_name() {
                debug!(target: "scene", "Active scene is now '{}'", name);
            }
            if let Some(index) = resolved {
                self.sync_button(index);
            }
        }
        self.active = resolved;

        let Some(index) = self.active else {
            trace!(target: "runtime", "No active scene, update skipped");
            return;
        };

        if let Some(cursor) = self.cursor.as_mut().filter(|c| c.follows_pointer()) {
            let ctx = FrameContext::new(&self.navigator, &self.requester, self.pointer, self.mouse_down);
            cursor.on_change(self.pointer.0, self.pointer.1, &ctx);
        }

        self.scenes[index].on_commit();
    }

    /// Render phase: active scene first, cursor last.
    pub fn on_render(&self, surface: &mut dyn DrawingSurface) {
        let Some(scene) = self.active_scene() else {
            return;
        };
        scene.on_paint(surface);

        if let Some(cursor) = self.cursor.as_ref() {
            surface.save();
            cursor.render(surface);
            surface.restore();
        }
    }

    /// Slow tick, forwarded to the active scene.
    pub fn on_each_second(&mut self) {
        if let Some(scene) = self.active_scene_mut() {
            scene.on_each_second();
        }
    }

    //--- Input ------------------------------------------------------------

    /// Pointer moved over the surface.
    pub fn on_mouse_over(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        if let Some(scene) = self.active_scene_mut() {
            scene.on_mouse_over(x, y);
        }
    }

    /// Pointer left the surface.
    pub fn on_mouse_out(&mut self) {
        trace!(target: "input", "Pointer left the surface");
    }

    /// Physical press: takes effect immediately and cancels a pending release.
    pub fn on_mouse_down(&mut self, x: f32, y: f32) {
        if self.pending_release.take().is_some() {
            trace!(target: "input", "Pending release cancelled by a new press");
        }
        self.mouse_down = true;

        if let Some(index) = self.active {
            self.scenes[index].on_mouse_down(x, y);
        }
        if let Some(cursor) = self.cursor.as_mut() {
            let ctx = FrameContext::new(&self.navigator, &self.requester, self.pointer, true);
            cursor.press(&ctx);
        }
    }

    /// Physical release: schedules the logical release after the debounce.
    pub fn on_mouse_up(&mut self, x: f32, y: f32, now: Instant) {
        self.pending_release = Some(PendingRelease {
            due: now + self.mouse_up_delay,
            x,
            y,
        });
    }

    //--- Accessors --------------------------------------------------------

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.name() == name)
    }

    pub fn scene_mut(&mut self, name: &str) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| s.name() == name)
    }

    /// Scene resolved by the last update (or by `on_start`).
    pub fn active_scene(&self) -> Option<&Scene> {
        self.active.and_then(|i| self.scenes.get(i))
    }

    pub fn active_scene_mut(&mut self) -> Option<&mut Scene> {
        self.active.and_then(|i| self.scenes.get_mut(i))
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn has_release_pending(&self) -> bool {
        self.pending_release.is_some()
    }

    pub fn has_cursor(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<&dyn Cursor> {
        self.cursor.as_deref()
    }

    //--- Internal ---------------------------------------------------------

    fn drain_clicks(&mut self) {
        loop {
            let Some(click) = self.subscription.as_ref().and_then(|s| s.next_click()) else {
                break;
            };

            if !click.target.is_surface() {
                trace!(target: "input", "Ignoring click outside the surface");
                continue;
            }

            if let Some(scene) = self.active_scene_mut() {
                scene.on_click(click.x, click.y);
            }
        }
    }

    fn drain_sounds(&mut self) {
        loop {
            let Some(request) = self.subscription.as_ref().and_then(|s| s.next_sound()) else {
                break;
            };

            let Some(service) = self.sound_service.as_mut() else {
                trace!(target: "sound", "No sound service, dropping '{}'", request.name);
                continue;
            };

            if let Err(e) = service.play(&request.name) {
                warn!(target: "sound", "{}", e);
            }
        }
    }

    /// Aligns a newly activated scene with the game's button state.
    fn sync_button(&mut self, index: usize) {
        let (x, y) = self.pointer;
        let scene = &mut self.scenes[index];
        if self.mouse_down {
            scene.on_mouse_down(x, y);
        } else {
            scene.on_mouse_up(x, y);
        }
    }

    fn release_if_due(&mut self, now: Instant) {
        let Some(pending) = self.pending_release else {
            return;
        };
        if now < pending.due {
            return;
        }

        self.pending_release = None;
        self.mouse_down = false;

        // every scene, so one left during the press is not stuck down
        for scene in self.scenes.iter_mut() {
            scene.on_mouse_up(pending.x, pending.y);
        }
        if let Some(cursor) = self.cursor.as_mut() {
            let ctx = FrameContext::new(&self.navigator, &self.requester, self.pointer, false);
            cursor.release(&ctx);
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("scenes", &self.scenes)
            .field("active", &self.navigator.active_name())
            .field("size", &(self.width, self.height))
            .field("pointer", &self.pointer)
            .field("mouse_down", &self.mouse_down)
            .field("attached", &self.subscription.is_some())
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

    use crate::core::entity::{Button, ButtonStyle, Entity};
    use crate::core::input::EventTarget;
    use crate::core::signals::SignalBus;
    use crate::error::SoundError;
    use crate::core::surface::RecordingSurface;

    //--- Test Helpers -----------------------------------------------------

    struct ProbeCursor {
        state: Rc<RefCell<Vec<String>>>,
        position: Rc<Cell<(f32, f32)>>,
    }

    impl Entity for ProbeCursor {
        fn id(&self) -> &str {
            "probe-cursor"
        }

        fn follows_pointer(&self) -> bool {
            true
        }

        fn on_change(&mut self, x: f32, y: f32, _ctx: &FrameContext<'_>) {
            self.position.set((x, y));
        }

        fn render(&self, surface: &mut dyn DrawingSurface) {
            surface.fill_text("cursor", 0.0, 0.0);
        }
    }

    impl Cursor for ProbeCursor {
        fn press(&mut self, _ctx: &FrameContext<'_>) {
            self.state.borrow_mut().push("press".to_string());
        }

        fn release(&mut self, _ctx: &FrameContext<'_>) {
            self.state.borrow_mut().push("release".to_string());
        }
    }

    /// Cursor that stays where it was placed.
    struct PinnedCursor {
        position: Rc<Cell<(f32, f32)>>,
    }

    impl Entity for PinnedCursor {
        fn id(&self) -> &str {
            "pinned-cursor"
        }

        fn on_change(&mut self, x: f32, y: f32, _ctx: &FrameContext<'_>) {
            self.position.set((x, y));
        }

        fn render(&self, _surface: &mut dyn DrawingSurface) {}
    }

    impl Cursor for PinnedCursor {
        fn press(&mut self, _ctx: &FrameContext<'_>) {}

        fn release(&mut self, _ctx: &FrameContext<'_>) {}
    }

    /// Plays every known name, reports the rest as missing.
    struct RecordingService {
        known: Vec<&'static str>,
        played: Rc<RefCell<Vec<String>>>,
    }

    impl SoundService for RecordingService {
        fn load(&mut self, _name: &str, _source: &str, _playback_rate: Option<f32>) {}

        fn play(&mut self, name: &str) -> Result<(), SoundError> {
            if !self.known.iter().any(|known| *known == name) {
                return Err(SoundError::Missing(name.to_string()));
            }
            self.played.borrow_mut().push(name.to_string());
            Ok(())
        }
    }

    fn welcome_and_main() -> Vec<Scene> {
        let mut welcome = Scene::new("Welcome");
        welcome.add_entity(Button::new(ButtonStyle::at(250.0, 200.0, "Enter").with_width(150.0), |ctx| {
            ctx.goto("Main");
        }));
        vec![welcome, Scene::new("Main")]
    }

    fn started_game(bus: &SignalBus) -> Game {
        let mut game = Game::new(welcome_and_main(), GameOptions::new(640, 480)).unwrap();
        game.attach(bus.subscribe());
        game.on_start();
        game
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn scenes_receive_game_size() {
        let game = Game::new(welcome_and_main(), GameOptions::new(640, 480)).unwrap();
        for scene in game.scenes() {
            assert_eq!((scene.width(), scene.height()), (640.0, 480.0));
        }
    }

    #[test]
    fn duplicate_scene_names_are_rejected() {
        let scenes = vec![Scene::new("Main"), Scene::new("Main")];
        let err = Game::new(scenes, GameOptions::new(640, 480)).unwrap_err();
        assert_eq!(err, EngineError::DuplicateScene("Main".to_string()));
    }

    #[test]
    fn cursor_requires_fancy_flag() {
        let cursor = || ProbeCursor {
            state: Rc::default(),
            position: Rc::default(),
        };

        let hidden = Game::new(Vec::new(), GameOptions::new(10, 10).with_cursor(cursor())).unwrap();
        assert!(!hidden.has_cursor());

        let shown = Game::new(
            Vec::new(),
            GameOptions::new(10, 10).with_cursor(cursor()).show_fancy_cursor(true),
        )
        .unwrap();
        assert!(shown.has_cursor());
    }

    //=====================================================================
    // Lifecycle
    //=====================================================================

    #[test]
    fn start_activates_first_scene() {
        let bus = SignalBus::new();
        let game = started_game(&bus);
        assert_eq!(game.active_scene().map(|s| s.name()), Some("Welcome"));
        assert!(game.scene("Welcome").unwrap().is_active());
        assert!(!game.scene("Main").unwrap().is_active());
    }

    #[test]
    fn empty_game_starts_and_updates_without_effect() {
        let mut game = Game::new(Vec::new(), GameOptions::new(10, 10)).unwrap();
        game.on_start();
        game.on_update();
        let mut surface = RecordingSurface::new();
        game.on_render(&mut surface);
        assert!(game.active_scene().is_none());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn destroy_is_idempotent_and_safe_before_start() {
        let mut game = Game::new(welcome_and_main(), GameOptions::new(640, 480)).unwrap();
        game.destroy();

        let bus = SignalBus::new();
        game.attach(bus.subscribe());
        assert!(game.is_attached());
        game.destroy();
        game.destroy();
        assert!(!game.is_attached());
    }

    //=====================================================================
    // Clicks
    //=====================================================================

    #[test]
    fn click_on_button_navigates() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);

        bus.publish_click(EventTarget::Surface, 300.0, 210.0);
        game.pump(Instant::now());
        game.on_update();

        assert_eq!(game.active_scene().map(|s| s.name()), Some("Main"));
    }

    #[test]
    fn click_lands_where_it_was_published() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);

        game.on_mouse_over(300.0, 210.0);
        bus.publish_click(EventTarget::Surface, 300.0, 210.0);
        game.on_mouse_over(10.0, 10.0);
        game.pump(Instant::now());
        game.on_update();

        assert_eq!(game.active_scene().map(|s| s.name()), Some("Main"));
    }

    #[test]
    fn click_off_button_does_nothing() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);

        game.on_mouse_over(300.0, 210.0);
        bus.publish_click(EventTarget::Surface, 10.0, 10.0);
        game.pump(Instant::now());
        game.on_update();

        assert_eq!(game.active_scene().map(|s| s.name()), Some("Welcome"));
    }

    #[test]
    fn click_outside_surface_is_ignored() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);

        bus.publish_click(EventTarget::Elsewhere, 300.0, 210.0);
        game.pump(Instant::now());
        game.on_update();

        assert_eq!(game.active_scene().map(|s| s.name()), Some("Welcome"));
    }

    #[test]
    fn detached_game_ignores_clicks() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);
        game.destroy();

        bus.publish_click(EventTarget::Surface, 300.0, 210.0);
        game.pump(Instant::now());
        game.on_update();

        assert_eq!(game.active_scene().map(|s| s.name()), Some("Welcome"));
    }

    //=====================================================================
    // Mouse Buttons
    //=====================================================================

    #[test]
    fn release_is_debounced() {
        let bus = SignalBus::new();
        let state = Rc::new(RefCell::new(Vec::new()));
        let cursor = ProbeCursor {
            state: state.clone(),
            position: Rc::default(),
        };
        let options = GameOptions::new(640, 480).with_cursor(cursor).show_fancy_cursor(true);
        let mut game = Game::new(welcome_and_main(), options).unwrap();
        game.attach(bus.subscribe());
        game.on_start();

        let t0 = Instant::now();
        game.on_mouse_down(5.0, 5.0);
        assert!(game.is_mouse_down());
        assert!(game.active_scene().unwrap().is_mouse_down());

        game.on_mouse_up(5.0, 5.0, t0);
        game.pump(t0 + Duration::from_millis(99));
        assert!(game.is_mouse_down(), "Release must wait for the debounce");

        game.pump(t0 + Duration::from_millis(100));
        assert!(!game.is_mouse_down());
        assert!(!game.active_scene().unwrap().is_mouse_down());
        assert_eq!(*state.borrow(), vec!["press", "release"]);
    }

    #[test]
    fn new_press_cancels_pending_release() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);
        let t0 = Instant::now();

        game.on_mouse_down(1.0, 1.0);
        game.on_mouse_up(1.0, 1.0, t0);
        game.on_mouse_down(1.0, 1.0);
        assert!(!game.has_release_pending());

        game.pump(t0 + Duration::from_secs(1));
        assert!(game.is_mouse_down());
    }

    #[test]
    fn release_clears_scene_left_during_press() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);
        let t0 = Instant::now();

        game.on_mouse_down(300.0, 210.0);
        bus.publish_click(EventTarget::Surface, 300.0, 210.0);
        game.on_mouse_up(300.0, 210.0, t0);
        game.pump(t0);
        game.on_update();
        assert_eq!(game.active_scene().map(|s| s.name()), Some("Main"));
        assert!(game.scene("Main").unwrap().is_mouse_down());

        game.pump(t0 + Duration::from_millis(100));
        assert!(!game.is_mouse_down());
        assert!(!game.scene("Welcome").unwrap().is_mouse_down());
        assert!(!game.scene("Main").unwrap().is_mouse_down());
    }

    #[test]
    fn activated_scene_takes_current_button_state() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);

        game.on_mouse_down(1.0, 1.0);
        game.scene("Main").unwrap().start();
        game.on_update();
        assert!(game.scene("Main").unwrap().is_mouse_down());

        let t0 = Instant::now();
        game.on_mouse_up(1.0, 1.0, t0);
        game.pump(t0 + Duration::from_millis(100));
        game.scene("Welcome").unwrap().start();
        game.on_update();
        assert!(!game.scene("Welcome").unwrap().is_mouse_down());
    }

    //=====================================================================
    // Cursor
    //=====================================================================

    #[test]
    fn cursor_follows_pointer_and_paints_last() {
        let bus = SignalBus::new();
        let position = Rc::new(Cell::new((0.0, 0.0)));
        let cursor = ProbeCursor {
            state: Rc::default(),
            position: position.clone(),
        };
        let options = GameOptions::new(640, 480).with_cursor(cursor).show_fancy_cursor(true);
        let mut game = Game::new(welcome_and_main(), options).unwrap();
        game.attach(bus.subscribe());
        game.on_start();

        game.on_mouse_over(42.0, 24.0);
        game.on_update();
        assert_eq!(position.get(), (42.0, 24.0));

        let mut surface = RecordingSurface::new();
        game.on_render(&mut surface);
        assert_eq!(surface.texts().last(), Some(&"cursor"));
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn cursor_not_following_pointer_stays_put() {
        let bus = SignalBus::new();
        let position = Rc::new(Cell::new((5.0, 5.0)));
        let cursor = PinnedCursor { position: position.clone() };
        let options = GameOptions::new(640, 480).with_cursor(cursor).show_fancy_cursor(true);
        let mut game = Game::new(welcome_and_main(), options).unwrap();
        game.attach(bus.subscribe());
        game.on_start();

        game.on_mouse_over(42.0, 24.0);
        game.on_update();
        assert_eq!(position.get(), (5.0, 5.0));
    }

    //=====================================================================
    // Sounds
    //=====================================================================

    #[test]
    fn sound_requests_reach_service() {
        let bus = SignalBus::new();
        let played = Rc::new(RefCell::new(Vec::new()));
        let service = RecordingService {
            known: vec!["hit", "ouch"],
            played: played.clone(),
        };

        let mut game = Game::new(welcome_and_main(), GameOptions::new(640, 480))
            .unwrap()
            .with_sound_service(service);
        game.attach(bus.subscribe());
        game.on_start();

        bus.sound_requester().play("hit");
        bus.sound_requester().play("missing");
        bus.sound_requester().play("ouch");
        game.pump(Instant::now());

        assert_eq!(*played.borrow(), vec!["hit", "ouch"]);
        assert_eq!(bus.purge(), 0);
    }

    #[test]
    fn sounds_without_service_are_dropped() {
        let bus = SignalBus::new();
        let mut game = started_game(&bus);

        bus.sound_requester().play("hit");
        game.pump(Instant::now());

        assert_eq!(bus.purge(), 0);
    }
}
