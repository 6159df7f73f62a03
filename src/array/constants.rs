// Bounds for generated arrays

/// Smallest array an algorithm run is created with
pub const MIN_ARRAY_SIZE: usize = 2;

/// Largest array an algorithm run is created with
pub const MAX_ARRAY_SIZE: usize = 200;

/// Lower end of the size control's stepping range
/// Narrower than the generation bounds; typed input may still go outside it
pub const CONTROL_MIN_SIZE: usize = 5;

/// Upper end of the size control's stepping range
pub const CONTROL_MAX_SIZE: usize = 120;

/// Array size used when nothing else is configured
pub const DEFAULT_ARRAY_SIZE: usize = 30;

/// Smallest generated element value
pub const MIN_VALUE: u32 = 5;

/// Largest generated element value
pub const MAX_VALUE: u32 = 400;
