//! Shared UI constants such as colors, panel sizing, and scripts.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_CAPTION: &str = "#22c55e";
pub const ACCENT_MARKER: &str = "#ef4444";
pub const ACCENT_ERROR: &str = "#f87171";

// Timeline canvas palette
pub const TIMELINE_BG: &str = BG_DEEPEST;
pub const TIMELINE_OUTLINE: &str = BORDER_STRONG;
pub const TIMELINE_GRID: &str = BORDER_DEFAULT;
pub const TIMELINE_TEXT: &str = TEXT_SECONDARY;
pub const TIMELINE_PLAYHEAD: &str = TEXT_PRIMARY;
pub const TIMELINE_END_MARKER: &str = ACCENT_MARKER;
pub const TIMELINE_LABEL_BG: &str = BG_SURFACE;
pub const TIMELINE_FONT_SIZE: f64 = 10.0;

pub const CAPTION_LIST_MIN_HEIGHT: f64 = 120.0;
pub const TIMELINE_MIN_HEIGHT: f64 = 160.0;
pub const TIMELINE_MAX_HEIGHT: f64 = 640.0;
pub const TIMELINE_DEFAULT_HEIGHT: f64 = 320.0;
/// Video length given to new projects, in seconds
pub const NEW_PROJECT_VIDEO_LENGTH: f64 = 60.0;
pub const TIMELINE_HEADER_HEIGHT: f64 = 32.0;
pub const WHEEL_LINE_PIXELS: f64 = 40.0;

/// Element whose size the timeline viewport follows.
pub const TIMELINE_CANVAS_HOST_ID: &str = "timeline-canvas-host";

pub const TIMELINE_CANVAS_SIZE_SCRIPT: &str = r#"
const hostId = "timeline-canvas-host";
let lastWidth = null;
let lastHeight = null;

function sendSize() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const width = host.clientWidth || 0;
    const height = host.clientHeight || 0;
    if (lastWidth !== null && Math.abs(lastWidth - width) < 0.5
        && Math.abs(lastHeight - height) < 0.5) {
        return;
    }
    lastWidth = width;
    lastHeight = height;
    dioxus.send({ width, height });
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendSize());
    observer.observe(host);
    window.addEventListener("resize", sendSize, { passive: true });
    sendSize();
}

attach();
await new Promise(() => {});
"#;
