/// Front-end wiring constants: element ids, CSS property names and the
/// timings owned by the DOM layer rather than the motion core.
// Elements
pub const HERO_ID: &str = "hero"; // receives pointer and touch events
pub const OVERLAY_ID: &str = "overlayImg"; // masked image, also the bounds source
pub const TOPO_LAYER_ID: &str = "topoLayer"; // parallax background lines

// CSS custom properties consumed by the overlay's radial mask
pub const PROP_MASK_X: &str = "--mx";
pub const PROP_MASK_Y: &str = "--my";
pub const PROP_MASK_SIZE: &str = "--mask-size";

// Resize notifications are coalesced before re-measuring the overlay
pub const RESIZE_DEBOUNCE_MS: i32 = 100;

// Parallax amplitude at the viewport edges (px)
pub const PARALLAX_X_PX: f64 = 12.0;
pub const PARALLAX_Y_PX: f64 = 8.0;
