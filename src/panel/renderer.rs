//! Panel renderer - turns panel state into a view description
//!
//! Rendering is pure: given a panel's geometry and the viewport, produce the
//! rectangles a frontend draws (frame, draggable header, close button, resize
//! handles) or a full-viewport modal on narrow screens. Hit-testing maps a
//! pointer back to the part of the panel under it.

use crate::geometry::{Point, Rect};
use crate::tool::ToolId;

use super::geometry::{PanelGeometry, ResizeEdge};

/// Viewport width below which panels render as full-screen modals
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Height of the draggable title strip
pub const HEADER_HEIGHT: f32 = 28.0;

/// Thickness of the east/south resize strips
pub const RESIZE_HANDLE_THICKNESS: f32 = 6.0;

/// Side of the square south-east resize grip
pub const RESIZE_CORNER_SIZE: f32 = 12.0;

pub const CLOSE_BUTTON_SIZE: f32 = 20.0;

/// Window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether panels should render as modals at this size
    pub fn is_compact(&self, breakpoint: f32) -> bool {
        self.width < breakpoint
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Inputs for rendering one panel
#[derive(Debug, Clone, Copy)]
pub struct PanelProps<'a> {
    pub tool: ToolId,
    pub geometry: &'a PanelGeometry,
    pub open: bool,
    pub title: &'a str,
}

/// Desktop floating chrome
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingChrome {
    pub tool: ToolId,
    pub title: String,
    pub frame: Rect,
    pub header: Rect,
    pub close_button: Rect,
    pub handles: [(ResizeEdge, Rect); 3],
    pub z_index: u32,
}

/// What to draw for a panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Floating(FloatingChrome),
    /// Full-viewport sheet used on narrow screens; not movable or resizable
    Modal {
        tool: ToolId,
        title: String,
        frame: Rect,
        close_button: Rect,
    },
}

/// Part of a panel under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    Header,
    CloseButton,
    Resize(ResizeEdge),
    Body,
}

impl PanelView {
    pub fn tool(&self) -> ToolId {
        match self {
            PanelView::Floating(chrome) => chrome.tool,
            PanelView::Modal { tool, .. } => *tool,
        }
    }

    pub fn frame(&self) -> Rect {
        match self {
            PanelView::Floating(chrome) => chrome.frame,
            PanelView::Modal { frame, .. } => *frame,
        }
    }

    /// Hit-test in priority order: close button, resize handles, header, body
    ///
    /// Resize handles sit just outside the frame's right and bottom edges so
    /// they take precedence over content near the border.
    pub fn hit_test(&self, point: Point) -> Option<PanelHit> {
        match self {
            PanelView::Floating(chrome) => {
                if chrome.close_button.contains_point(point) {
                    return Some(PanelHit::CloseButton);
                }
                // Corner first so it wins where the two strips overlap
                for edge in [ResizeEdge::SouthEast, ResizeEdge::East, ResizeEdge::South] {
                    if let Some((_, rect)) = chrome.handles.iter().find(|(e, _)| *e == edge) {
                        if rect.contains_point(point) {
                            return Some(PanelHit::Resize(edge));
                        }
                    }
                }
                if chrome.header.contains_point(point) {
                    return Some(PanelHit::Header);
                }
                chrome.frame.contains_point(point).then_some(PanelHit::Body)
            }
            PanelView::Modal {
                frame,
                close_button,
                ..
            } => {
                if close_button.contains_point(point) {
                    Some(PanelHit::CloseButton)
                } else {
                    frame.contains_point(point).then_some(PanelHit::Body)
                }
            }
        }
    }
}

/// Render one panel, `None` when it is closed
pub fn render_panel(
    props: PanelProps<'_>,
    viewport: Viewport,
    breakpoint: f32,
) -> Option<PanelView> {
    if !props.open {
        return None;
    }

    if viewport.is_compact(breakpoint) {
        let frame = viewport.rect();
        return Some(PanelView::Modal {
            tool: props.tool,
            title: props.title.to_string(),
            frame,
            close_button: close_button_rect(&frame),
        });
    }

    let frame = props.geometry.rect();
    let header = Rect::new(frame.x, frame.y, frame.width, HEADER_HEIGHT.min(frame.height));
    let half = RESIZE_HANDLE_THICKNESS / 2.0;
    let corner = Rect::new(
        frame.right() - RESIZE_CORNER_SIZE / 2.0,
        frame.bottom() - RESIZE_CORNER_SIZE / 2.0,
        RESIZE_CORNER_SIZE,
        RESIZE_CORNER_SIZE,
    );
    let east = Rect::new(
        frame.right() - half,
        frame.y + HEADER_HEIGHT,
        RESIZE_HANDLE_THICKNESS,
        (frame.height - HEADER_HEIGHT).max(0.0),
    );
    let south = Rect::new(
        frame.x,
        frame.bottom() - half,
        frame.width,
        RESIZE_HANDLE_THICKNESS,
    );

    Some(PanelView::Floating(FloatingChrome {
        tool: props.tool,
        title: props.title.to_string(),
        frame,
        header,
        close_button: close_button_rect(&frame),
        handles: [
            (ResizeEdge::East, east),
            (ResizeEdge::South, south),
            (ResizeEdge::SouthEast, corner),
        ],
        z_index: props.geometry.z_index,
    }))
}

fn close_button_rect(frame: &Rect) -> Rect {
    let inset = (HEADER_HEIGHT - CLOSE_BUTTON_SIZE) / 2.0;
    Rect::new(
        frame.right() - CLOSE_BUTTON_SIZE - inset,
        frame.y + inset,
        CLOSE_BUTTON_SIZE,
        CLOSE_BUTTON_SIZE,
    )
}
