//! The closed set of editing operations and their dispatch.
//!
//! The shell refers to operations by name (a snake_case id such as
//! `"rotate_left"` or the button label such as `"Rotate Left"`); this module
//! resolves the name and runs the matching transform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adjustments::{chroma_key, grayscale};
use crate::equalize::equalize;
use crate::transform::{flip_horizontal, flip_vertical, rotate_left, rotate_right};
use crate::{Grid, GridError};

/// An editing operation offered by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    FlipVertical,
    FlipHorizontal,
    RotateLeft,
    RotateRight,
    Grayscale,
    #[serde(alias = "chroma_key")]
    GreenScreen,
    Equalize,
}

/// Id and label of an operation, as presented to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub id: String,
    pub label: String,
}

impl Operation {
    /// Every operation, in the order the shell lists them.
    pub const ALL: [Operation; 7] = [
        Operation::FlipVertical,
        Operation::FlipHorizontal,
        Operation::RotateLeft,
        Operation::RotateRight,
        Operation::Grayscale,
        Operation::GreenScreen,
        Operation::Equalize,
    ];

    /// Stable snake_case identifier.
    pub fn id(self) -> &'static str {
        match self {
            Operation::FlipVertical => "flip_vertical",
            Operation::FlipHorizontal => "flip_horizontal",
            Operation::RotateLeft => "rotate_left",
            Operation::RotateRight => "rotate_right",
            Operation::Grayscale => "grayscale",
            Operation::GreenScreen => "green_screen",
            Operation::Equalize => "equalize",
        }
    }

    /// Human-readable button label.
    pub fn label(self) -> &'static str {
        match self {
            Operation::FlipVertical => "Flip Vertical",
            Operation::FlipHorizontal => "Flip Horizontal",
            Operation::RotateLeft => "Rotate Left",
            Operation::RotateRight => "Rotate Right",
            Operation::Grayscale => "Grayscale",
            Operation::GreenScreen => "Green Screen",
            Operation::Equalize => "Equalize",
        }
    }

    /// Check if the result has width and height swapped.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Operation::RotateLeft | Operation::RotateRight)
    }

    /// Resolve an operation from its id or label, ignoring case.
    ///
    /// `"chroma_key"` is accepted as another name for the green screen.
    pub fn from_name(name: &str) -> Result<Self, GridError> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("chroma_key") || name.eq_ignore_ascii_case("chroma key") {
            return Ok(Operation::GreenScreen);
        }
        Self::ALL
            .into_iter()
            .find(|op| name.eq_ignore_ascii_case(op.id()) || name.eq_ignore_ascii_case(op.label()))
            .ok_or_else(|| GridError::UnknownOperation(name.to_string()))
    }

    /// Run the operation on a grid, returning a new grid.
    pub fn apply(self, grid: &Grid) -> Grid {
        log::debug!(
            "applying {} to {}x{} grid",
            self.id(),
            grid.width(),
            grid.height()
        );
        match self {
            Operation::FlipVertical => flip_vertical(grid),
            Operation::FlipHorizontal => flip_horizontal(grid),
            Operation::RotateLeft => rotate_left(grid),
            Operation::RotateRight => rotate_right(grid),
            Operation::Grayscale => grayscale(grid),
            Operation::GreenScreen => chroma_key(grid),
            Operation::Equalize => equalize(grid),
        }
    }

    /// Id and label of this operation.
    pub fn info(self) -> OperationInfo {
        OperationInfo {
            id: self.id().to_string(),
            label: self.label().to_string(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Resolve `name` and apply it to `grid`.
///
/// # Errors
///
/// Returns `GridError::UnknownOperation` if no operation matches `name`.
pub fn apply_operation(name: &str, grid: &Grid) -> Result<Grid, GridError> {
    let op = Operation::from_name(name)?;
    Ok(op.apply(grid))
}

/// Id and label of every operation, in display order.
pub fn list_operations() -> Vec<OperationInfo> {
    Operation::ALL.into_iter().map(Operation::info).collect()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
