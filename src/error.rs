//=========================================================================
// Engine Errors
//=========================================================================
//
// Error types surfaced by the engine's public API.
//
// The runtime favors "log and continue": most lookup misses never reach
// these types and are reported with `warn!` instead. Only configuration
// mistakes the caller must react to are returned as errors.
//
//=========================================================================

//=== EngineError =========================================================

/// Configuration errors raised while wiring a stage or a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `init_stage` was called without a drawing surface.
    MissingSurface,

    /// The stage has a zero width or height.
    InvalidStage { width: u32, height: u32 },

    /// Two scenes of the same game share a name.
    DuplicateScene(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSurface => write!(f, "No drawing surface bound to the stage"),
            Self::InvalidStage { width, height } => {
                write!(f, "Invalid stage size {}x{}", width, height)
            }
            Self::DuplicateScene(name) => write!(f, "Scene name '{}' is used twice", name),
        }
    }
}

impl std::error::Error for EngineError {}

//=== SoundError ==========================================================

/// Failure to play a named sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundError {
    /// No clip was loaded under this name.
    Missing(String),
}

impl std::fmt::Display for SoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "Sound '{}' is not loaded", name),
        }
    }
}

impl std::error::Error for SoundError {}

//=========================================================================
// Unit Tests
//=========================================================================
