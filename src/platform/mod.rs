//=========================================================================
// Platform Host
//
// Runs a game inside a Winit window.
//
// Architecture:
// ```text
//  Winit Event Loop (main thread)
//   ├─ resumed()          → create window, init_stage(), start(game)
//   ├─ CursorMoved/Left   ┐
//   ├─ MouseInput         ┴→ PointerMapper → Runtime::dispatch()
//   ├─ RedrawRequested    → request_redraw() first, then Runtime::tick()
//   └─ CloseRequested     → Runtime::stop(), exit
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: the tick rate follows the
//   display refresh rate, like a browser's animation-frame callback
// - **Reschedule before work**: the next redraw is requested before the
//   tick runs
// - **Headless drawing**: the window is the stage, drawing goes to a
//   `RecordingSurface` whose commands are drained after every render
//   frame. A rasterizing backend can replace it through `with_surface`.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== External Crates =====================================================

use std::cell::RefCell;
use std::rc::Rc;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::frame::FramePhase;
use crate::core::game::Game;
use crate::core::surface::{DrawingSurface, RecordingSurface};
use crate::engine::Runtime;
use event_mapper::PointerMapper;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop the game cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Host ================================================================

/// Window host driving a [`Runtime`].
///
/// # Lifecycle
///
/// 1. **Construction**: `Host::new(runtime, game)`; nothing is created yet
/// 2. **Execution**: `host.run()` blocks in the Winit event loop
/// 3. **Resume**: the window is created, the stage bound, the game started
/// 4. **Shutdown**: closing the window stops the runtime and exits
pub struct Host {
    runtime: Runtime,
    pending_game: Option<Game>,
    surface: Option<Box<dyn DrawingSurface>>,
    frame_log: Rc<RefCell<RecordingSurface>>,
    window: Option<Window>,
    mapper: PointerMapper,
    title: String,
}

impl Host {
    //--- Construction -----------------------------------------------------

    pub fn new(runtime: Runtime, game: Game) -> Self {
        info!(target: "platform", "Host created for a {}x{} stage", game.width(), game.height());
        Self {
            runtime,
            pending_game: Some(game),
            surface: None,
            frame_log: Rc::new(RefCell::new(RecordingSurface::new())),
            window: None,
            mapper: PointerMapper::new(),
            title: "GW Engine".to_string(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Draws into `surface` instead of the built-in recording surface.
    pub fn with_surface<S>(mut self, surface: S) -> Self
    where
        S: DrawingSurface + 'static,
    {
        self.surface = Some(Box::new(surface));
        self
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Binds the stage and starts the pending game.
    fn start_game(&mut self) {
        let Some(game) = self.pending_game.take() else {
            return;
        };

        let surface: Box<dyn DrawingSurface> = match self.surface.take() {
            Some(surface) => surface,
            None => Box::new(self.frame_log.clone()),
        };

        if let Err(e) = self.runtime.init_stage(Some(surface), game.width(), game.height()) {
            error!(target: "platform", "Stage setup failed: {}", e);
        }
        self.runtime.start(game);
    }

    fn frame(&mut self) {
        let step = self.runtime.tick();

        if step.phase == FramePhase::Render {
            let commands = self.frame_log.borrow_mut().take();
            trace!(
                target: "platform",
                "Frame {} rendered ({} draw commands)",
                step.frame,
                commands.len()
            );
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let (width, height, custom_cursor) = match self.pending_game.as_ref() {
            Some(game) => (game.width(), game.height(), game.has_cursor()),
            None => (640, 480, false),
        };

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                if custom_cursor {
                    window.set_cursor_visible(false);
                }
                window.request_redraw();
                self.window = Some(window);
                self.start_game();
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.runtime.stop();
                event_loop.exit();
            }

            WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::MouseInput { .. } => {
                for pointer_event in self.mapper.map(&event) {
                    self.runtime.dispatch(pointer_event);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                self.frame();
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
