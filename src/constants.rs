/// DOM hooks and output names used by the web layer.
///
/// Selectors match the page markup; CSS variable names are the contract with
/// the stylesheet that animates the tiles and follows the pointer.
// Background markup
pub const BACKGROUND_SELECTOR: &str = ".js-background";
pub const WORD_SELECTOR: &str = ".js-word";

// Cursor markup
pub const CURSOR_SCENE_SELECTOR: &str = ".js-cursor-scene";
pub const CURSOR_WRAPPER_SELECTOR: &str = ".js-cursor-wrapper";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Per-tile custom properties
pub const VAR_TILE_INDEX: &str = "--i";
pub const VAR_TILE_POSITION: &str = "--position";
pub const VAR_TILE_DURATION: &str = "--duration";

// Global custom properties on <html>
pub const VAR_MOUSE_X: &str = "--mouse-x";
pub const VAR_MOUSE_Y: &str = "--mouse-y";
