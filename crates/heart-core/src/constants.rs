// Shared scene tuning constants. Everything here is platform independent.

// Heart placement, applied once to the loaded geometry (rotate, scale, translate)
pub const HEART_ROTATE_X_RAD: f32 = -std::f32::consts::FRAC_PI_2;
pub const HEART_SCALE: f32 = 0.04;
pub const HEART_OFFSET: [f32; 3] = [0.0, -0.4, 0.0];

// Noise field sampling
pub const NOISE_SEED: u32 = 0;
pub const NOISE_SPATIAL_FREQ: f32 = 1.5;
pub const NOISE_TIME_FREQ_PER_MS: f64 = 0.0005;

// Displacement shared by spikes and the heart surface
pub const DISPLACEMENT_GAIN: f32 = 0.15;

// Spikes ("grass")
pub const SPIKE_COUNT: usize = 20_000;
pub const SPIKE_BASE_LIFT: f32 = 1.01; // keeps roots just above the surface
pub const SPIKE_SCALE_MIN: f32 = 0.001;
pub const SPIKE_SCALE_SPAN: f32 = 0.01;

// Heartbeat timeline (seconds)
pub const PULSE_PEAK: f32 = 1.2;
pub const PULSE_RISE_SEC: f32 = 0.6;
pub const PULSE_FALL_SEC: f32 = 0.6;
pub const PULSE_REST_SEC: f32 = 0.3;

// Group rotation about +Y
pub const ROTATION_PERIOD_SEC: f32 = 12.0;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 1.0;

// Trackball-style orbit
pub const ORBIT_MIN_DISTANCE: f32 = 0.7;
pub const ORBIT_MAX_DISTANCE: f32 = 3.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.2;
pub const ORBIT_DAMPING: f32 = 0.2; // fraction of motion shed per update
pub const ORBIT_WHEEL_PER_PIXEL: f32 = 0.00025;

// Falling text overlay
pub const OVERLAY_BURST_INTERVAL_MS: u32 = 700;
pub const OVERLAY_BURST_SIZE: usize = 4;
pub const OVERLAY_LEFT_MAX_PERCENT: f32 = 80.0;
pub const OVERLAY_SCALE_BASE: f32 = 0.6;
pub const OVERLAY_SCALE_SPAN: f32 = 0.7; // caps near text so it never dominates
pub const OVERLAY_DRIFT_SPAN_PX: f32 = 200.0;
pub const OVERLAY_FONT_BASE_PT: f32 = 20.0;
pub const OVERLAY_FONT_SPAN_PT: f32 = 12.0;
pub const OVERLAY_FALL_BASE_SEC: f32 = 8.0;
pub const OVERLAY_FALL_SPAN_SEC: f32 = 6.0;
