/// Effect geometry and tuning constants.
///
/// These constants express intended behavior (trail depth, shape sizing,
/// noise smoothing) and keep magic numbers out of the code, so the geometry
/// stays reproducible exactly.

// Trail depth (number of echo positions kept behind the cursor)
pub const TRAIL_LENGTH: usize = 5;

// Shape sizing (canvas pixels)
pub const SOURCE_SIZE: f32 = 40.0; // the cursor shape; also selects Source styling
pub const NOISE_BASE_SIZE: f32 = 50.0; // oldest echo
pub const ECHO_SIZE_STEP: f32 = 2.0; // growth per trail index

// Radial wave outline
pub const WAVE_HARMONICS: f32 = 4.0; // sine lobes around the circumference
pub const WAVE_SEGMENTS: u32 = 360; // one line segment per integer degree
pub const ECHO_WAVE_AMPLITUDE: f32 = 2.0; // echoes keep a small fixed ripple
pub const WAVE_STROKE_WIDTH: f32 = 2.0;

// Bezier ellipse outline
pub const ELLIPSE_HEIGHT_RATIO: f32 = 1.2; // height = ratio * width
pub const SOURCE_ELLIPSE_CONTROL_K: f32 = 4.0 / 3.0; // passes through the apex exactly
pub const ECHO_ELLIPSE_CONTROL_K: f32 = 1.2; // flatter skew for echoes
pub const ELLIPSE_STROKE_WIDTH: f32 = 5.0;

// Noise field
pub const NOISE_TABLE_SIZE: usize = 256;
pub const NOISE_AMPLITUDE: f32 = 8.0; // bound on the sampled distortion
pub const NOISE_SCALE: f32 = 0.05; // lattice smoothing factor
pub const NOISE_QUERY_JITTER: f32 = 10.0; // range of the per-frame random query

// Compositing
// Threaded through as a fade hook; every shape currently draws fully opaque.
pub const SHAPE_OPACITY: f32 = 1.0;

// Timer-driven scheduling fallback
pub const TIMER_INTERVAL_MS: u32 = 100;
