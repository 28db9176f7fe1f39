// Shaders bundled as string constants
pub static HEART_WGSL: &str = include_str!("../shaders/heart.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");
