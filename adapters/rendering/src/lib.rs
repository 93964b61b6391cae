#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Basecraft screen adapters.
//!
//! Backends stay out of this crate; it only describes what a screen looks
//! like (descriptor structs), which inputs a backend may report, and the
//! [`ScreenBackend`] seam a concrete front end implements. The built-in
//! [`Lexicon`] resolves the message keys used across the workspace.

use anyhow::Result as AnyResult;
use basecraft_core::{MessageKey, RowIndex, Translator};
use glam::Vec2;
use std::{error::Error, fmt};

/// Message keys owned by the screen presentations.
pub mod keys {
    use basecraft_core::MessageKey;

    /// Title of the production-list screen.
    pub const LIST_TITLE: MessageKey = MessageKey::new("screen/production-list/title");
    /// Header above the item-name column.
    pub const ITEM_HEADER: MessageKey = MessageKey::new("screen/production-list/item-header");
    /// Header above the category column.
    pub const CATEGORY_HEADER: MessageKey =
        MessageKey::new("screen/production-list/category-header");
    /// Title of the production-configurator screen.
    pub const CONFIGURATOR_TITLE: MessageKey = MessageKey::new("screen/configurator/title");
    /// Label for the workspace demand line.
    pub const WORKSPACE_LABEL: MessageKey = MessageKey::new("label/workspace-required");
    /// Label for the build-hours line.
    pub const BUILD_HOURS_LABEL: MessageKey = MessageKey::new("label/build-hours");
    /// Label for the cost line.
    pub const COST_LABEL: MessageKey = MessageKey::new("label/cost");
}

/// RGBA color used when presenting screens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Colors applied to the production-list panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListPalette {
    /// Frame and title color.
    pub frame: Color,
    /// Column header color.
    pub header: Color,
    /// Row text color.
    pub rows: Color,
}

impl Default for ListPalette {
    fn default() -> Self {
        Self {
            frame: Color::from_rgb_u8(0x8e, 0xb0, 0xc8),
            header: Color::from_rgb_u8(0xd6, 0xc4, 0x6a),
            rows: Color::from_rgb_u8(0xb8, 0xd0, 0xe0),
        }
    }
}

/// Geometry of the two-column production-list panel.
///
/// The two columns plus the margin on either side must fit inside the panel
/// width, and rows need a positive height; both are validated at
/// construction so backends never receive an unrenderable layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListLayout {
    origin: Vec2,
    size: Vec2,
    item_column_width: f32,
    category_column_width: f32,
    row_height: f32,
    margin: f32,
}

impl ListLayout {
    /// Vertical offset from the panel's origin to the first row.
    const HEADER_BAND: f32 = 32.0;

    /// Creates a validated panel layout.
    pub fn new(
        origin: Vec2,
        size: Vec2,
        item_column_width: f32,
        category_column_width: f32,
        row_height: f32,
        margin: f32,
    ) -> Result<Self, LayoutError> {
        let required = item_column_width + category_column_width + 2.0 * margin;
        if required > size.x {
            return Err(LayoutError::ColumnsExceedPanel {
                panel_width: size.x,
                required_width: required,
            });
        }
        if row_height <= 0.0 {
            return Err(LayoutError::InvalidRowHeight { row_height });
        }

        Ok(Self {
            origin,
            size,
            item_column_width,
            category_column_width,
            row_height,
            margin,
        })
    }

    /// Classic layout of the production-list popup.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(Vec2::new(0.0, 30.0), Vec2::new(320.0, 140.0), 156.0, 130.0, 8.0, 2.0)
            .expect("classic layout constants are valid")
    }

    /// Top-left corner of the panel in screen coordinates.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Panel dimensions in screen space.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Width reserved for the item-name column.
    #[must_use]
    pub const fn item_column_width(&self) -> f32 {
        self.item_column_width
    }

    /// Width reserved for the category column.
    #[must_use]
    pub const fn category_column_width(&self) -> f32 {
        self.category_column_width
    }

    /// Height of a single rendered row.
    #[must_use]
    pub const fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Screen position of the row at the provided zero-based index.
    #[must_use]
    pub fn row_origin(&self, row: RowIndex) -> Vec2 {
        Vec2::new(
            self.origin.x + self.margin,
            self.origin.y + Self::HEADER_BAND + row.get() as f32 * self.row_height,
        )
    }

    /// Number of whole rows that fit beneath the header band.
    #[must_use]
    pub fn max_visible_rows(&self) -> u32 {
        let band = self.size.y - Self::HEADER_BAND;
        if band <= 0.0 {
            return 0;
        }
        (band / self.row_height) as u32
    }
}

/// Errors that can occur when constructing presentation descriptors.
#[derive(Debug, PartialEq)]
pub enum LayoutError {
    /// The two columns and margins do not fit inside the panel.
    ColumnsExceedPanel {
        /// Width of the panel the columns were laid into.
        panel_width: f32,
        /// Width the columns and margins would need.
        required_width: f32,
    },
    /// Rows must have a positive height.
    InvalidRowHeight {
        /// Provided row height that failed validation.
        row_height: f32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnsExceedPanel {
                panel_width,
                required_width,
            } => write!(
                f,
                "columns need {required_width} units but the panel is {panel_width} wide"
            ),
            Self::InvalidRowHeight { row_height } => {
                write!(f, "row height must be positive (received {row_height})")
            }
        }
    }
}

impl Error for LayoutError {}

/// Single two-column row ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowPresentation {
    /// Translated item name shown in the first column.
    pub name: String,
    /// Translated category shown in the second column.
    pub category: String,
}

impl RowPresentation {
    /// Creates a new row presentation.
    #[must_use]
    pub fn new<N, C>(name: N, category: C) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Production-list screen descriptor consumed by backends.
#[derive(Clone, Debug, PartialEq)]
pub struct ListPresentation {
    /// Translated screen title.
    pub title: String,
    /// Translated header above the item column.
    pub item_header: String,
    /// Translated header above the category column.
    pub category_header: String,
    /// Rows to display, in catalog order.
    pub rows: Vec<RowPresentation>,
    /// Panel geometry.
    pub layout: ListLayout,
    /// Panel colors.
    pub palette: ListPalette,
}

impl ListPresentation {
    /// Constructs a new list descriptor.
    #[must_use]
    pub fn new<T>(title: T, item_header: T, category_header: T, rows: Vec<RowPresentation>) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            item_header: item_header.into(),
            category_header: category_header.into(),
            rows,
            layout: ListLayout::classic(),
            palette: ListPalette::default(),
        }
    }
}

/// Detail screen descriptor (configurator and message popups).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryPresentation {
    /// Translated screen title.
    pub title: String,
    /// Translated detail lines, top to bottom.
    pub lines: Vec<String>,
}

impl SummaryPresentation {
    /// Constructs a new detail descriptor.
    #[must_use]
    pub fn new<T>(title: T, lines: Vec<String>) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// Whatever screen currently sits on top of the navigation stack.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenView {
    /// The production-list screen.
    List(ListPresentation),
    /// The production-configurator screen.
    Summary(SummaryPresentation),
}

/// Inputs a backend may report to the screen workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenInput {
    /// The player clicked the row at the provided index.
    Select(RowIndex),
    /// The player confirmed the current screen (OK / start).
    Acknowledge,
    /// The player backed out of the current screen.
    Cancel,
    /// The player asked to leave the session entirely.
    Quit,
}

/// Reports whether the workflow keeps running after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenFlow {
    /// Keep presenting and collecting input.
    Continue,
    /// The workflow finished; the backend should return.
    Closed,
}

/// Backend capable of presenting Basecraft screens.
pub trait ScreenBackend {
    /// Runs the backend until the workflow reports itself closed.
    ///
    /// The provided `update` closure consumes one input at a time and may
    /// replace the view to reflect the new top of the navigation stack.
    fn run<F>(self, view: ScreenView, update: F) -> AnyResult<()>
    where
        F: FnMut(ScreenInput, &mut ScreenView) -> ScreenFlow + 'static;
}

/// Built-in English lexicon resolving the workspace's message keys.
///
/// Unknown keys resolve to their raw key text so a missing entry stays
/// visible instead of failing the screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lexicon;

impl Translator for Lexicon {
    fn translate(&self, key: MessageKey) -> String {
        let resolved = match key.get() {
            "screen/production-list/title" => "Available Productions",
            "screen/production-list/item-header" => "Item",
            "screen/production-list/category-header" => "Category",
            "screen/configurator/title" => "Start Production",
            "label/workspace-required" => "Workspace required",
            "label/build-hours" => "Build hours",
            "label/cost" => "Cost",
            "category/craft" => "Craft",
            "category/weapon" => "Weapon",
            "category/ammunition" => "Ammunition",
            "category/equipment" => "Equipment",
            "error/no-free-hangars" => "No free hangars for craft production!",
            "error/not-enough-workspace" => "Not enough work space!",
            "error/production-unavailable" => "Production unavailable.",
            "rule/patrol-corvette" => "Patrol Corvette",
            "rule/gauss-rifle" => "Gauss Rifle",
            "rule/gauss-clip" => "Gauss Clip",
            "rule/composite-vest" => "Composite Vest",
            "rule/strike-interceptor" => "Strike Interceptor",
            other => other,
        };
        resolved.to_owned()
    }
}
