//=========================================================================
// Scene
//=========================================================================
//
// A named, navigable screen owning an ordered list of entities.
//
// Architecture:
//   Scene
//     ├─ entities: Vec<Box<dyn Entity>>   (update order = paint order)
//     ├─ navigator: Navigator             (shared with the Game)
//     └─ behavior: Box<dyn SceneBehavior> (game-specific overrides)
//
// Flow per update:  on_commit() → Entity::on_change() → on_scene_update()
// Flow per render:  on_paint()  → draw_background() → Entity::render()
//
// Input routing, commit and paint are fixed; games customize a scene
// only through `SceneBehavior`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::entity::{Entity, FrameContext};
use crate::core::navigator::Navigator;
use crate::core::signals::SoundRequester;
use crate::core::surface::{Color, DrawingSurface};

//=== SceneBehavior =======================================================

/// Override points of a scene.
///
/// Every method has a default, so a plain menu screen needs no
/// implementation at all (see [`DefaultBehavior`]).
pub trait SceneBehavior {
    /// Paints the backdrop before any entity.
    ///
    /// Default: black fill with a red border inset by 20px.
    fn draw_background(&self, surface: &mut dyn DrawingSurface, width: f32, height: f32) {
        surface.set_fill_color(Color::BLACK);
        surface.fill_rect(0.0, 0.0, width, height);
        surface.set_stroke_color(Color::RED);
        surface.set_line_width(1.0);
        surface.stroke_rect(20.0, 20.0, width - 40.0, height - 40.0);
    }

    /// Runs after every entity saw `on_change` for this update.
    fn on_scene_update(&mut self, _x: f32, _y: f32, _ctx: &FrameContext<'_>) {}

    /// Slow tick (about once per second) while the scene is active.
    fn on_each_second(&mut self, _ctx: &FrameContext<'_>) {}
}

/// Behavior with all defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBehavior;

impl SceneBehavior for DefaultBehavior {}

//=== Scene ===============================================================

pub struct Scene {
    name: String,
    width: f32,
    height: f32,
    entities: Vec<Box<dyn Entity>>,
    pointer: (f32, f32),
    mouse_down: bool,
    navigator: Navigator,
    sounds: SoundRequester,
    behavior: Box<dyn SceneBehavior>,
}

impl Scene {
    //--- Construction -----------------------------------------------------

    /// Creates a scene with the default behavior.
    ///
    /// Size and navigator are injected when the scene joins a Game.
    pub fn new(name: &str) -> Self {
        Self::with_behavior(name, DefaultBehavior)
    }

    pub fn with_behavior<B>(name: &str, behavior: B) -> Self
    where
        B: SceneBehavior + 'static,
    {
        Self {
            name: name.to_string(),
            width: 0.0,
            height: 0.0,
            entities: Vec::new(),
            pointer: (0.0, 0.0),
            mouse_down: false,
            navigator: Navigator::default(),
            sounds: SoundRequester::default(),
            behavior: Box::new(behavior),
        }
    }

    pub(crate) fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub(crate) fn attach_navigator(&mut self, navigator: Navigator) {
        self.navigator = navigator;
    }

    pub(crate) fn attach_sounds(&mut self, sounds: SoundRequester) {
        self.sounds = sounds;
    }

    //--- Accessors --------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Last-known pointer position inside the scene.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Entity ids in paint order.
    pub fn entity_ids(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.id()).collect()
    }

    //--- Entities ---------------------------------------------------------

    /// Appends an entity; later entities paint on top.
    pub fn add_entity<E>(&mut self, entity: E)
    where
        E: Entity + 'static,
    {
        self.add_boxed(Box::new(entity));
    }

    pub fn add_boxed(&mut self, entity: Box<dyn Entity>) {
        debug!(target: "scene", "Scene '{}': adding entity '{}'", self.name, entity.id());
        self.entities.push(entity);
    }

    /// Removes the first entity with this id.
    ///
    /// Returns `false` and logs a warning when nothing matches.
    pub fn remove_entity(&mut self, id: &str) -> bool {
        match self.entities.iter().position(|e| e.id() == id) {
            Some(index) => {
                self.entities.remove(index);
                true
            }
            None => {
                warn!(target: "scene", "Scene '{}': entity '{}' not found", self.name, id);
                false
            }
        }
    }

    //--- Input Routing ----------------------------------------------------

    /// Notifies every entity under the point; no entity stops propagation.
    pub fn on_click(&mut self, x: f32, y: f32) {
        let ctx = FrameContext::new(&self.navigator, &self.sounds, (x, y), self.mouse_down);
        for entity in self.entities.iter_mut() {
            if entity.is_on_me(x, y) {
                entity.on_click(&ctx);
            }
        }
    }

    /// Sends over/out to hit-testable entities, then records the point.
    pub fn on_mouse_over(&mut self, x: f32, y: f32) {
        let ctx = FrameContext::new(&self.navigator, &self.sounds, (x, y), self.mouse_down);
        for entity in self.entities.iter_mut() {
            if entity.hit_region().is_none() {
                continue;
            }
            if entity.is_on_me(x, y) {
                entity.on_mouse_over(&ctx);
            } else {
                entity.on_mouse_out(&ctx);
            }
        }
        self.pointer = (x, y);
    }

    pub fn on_mouse_down(&mut self, _x: f32, _y: f32) {
        self.mouse_down = true;
    }

    pub fn on_mouse_up(&mut self, _x: f32, _y: f32) {
        self.mouse_down = false;
    }

    //--- Frame Phases -----------------------------------------------------

    /// Update phase: entities first, then the scene hook.
    pub fn on_commit(&mut self) {
        let (x, y) = self.pointer;
        let ctx = FrameContext::new(&self.navigator, &self.sounds, self.pointer, self.mouse_down);

        for entity in self.entities.iter_mut() {
            entity.on_change(x, y, &ctx);
        }
        self.behavior.on_scene_update(x, y, &ctx);
    }

    /// Render phase: background, then entities in insertion order.
    pub fn on_paint(&self, surface: &mut dyn DrawingSurface) {
        surface.save();
        self.behavior.draw_background(surface, self.width, self.height);
        surface.restore();

        for entity in &self.entities {
            surface.save();
            entity.render(surface);
            surface.restore();
        }
    }

    pub fn on_each_second(&mut self) {
        let ctx = FrameContext::new(&self.navigator, &self.sounds, self.pointer, self.mouse_down);
        self.behavior.on_each_second(&ctx);
    }

    //--- Navigation -------------------------------------------------------

    pub fn goto(&self, name: &str) -> bool {
        self.navigator.goto(name)
    }

    /// Makes this scene the active one.
    pub fn start(&self) -> bool {
        self.navigator.goto(&self.name)
    }

    pub fn is_active(&self) -> bool {
        self.navigator.is_active(&self.name)
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("size", &(self.width, self.height))
            .field("entities", &self.entity_ids())
            .field("pointer", &self.pointer)
            .field("mouse_down", &self.mouse_down)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
