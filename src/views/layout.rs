//! Screen layout computed once from the configuration.
//!
//! Top to bottom: status line, help line, optional top ruler, edit rows,
//! optional bottom ruler, message line, command line. The edit area has a one
//! column margin on either side.

use crate::core::codes;
use crate::core::error::EditorError;
use crate::core::geom::Rect;
use crate::services::config::EditorConfig;

const MARGIN: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: u16,
    pub height: u16,
    pub status: Rect,
    pub help: Rect,
    /// Edit rows plus the ruler rows when rulers are on.
    pub edit_block: Rect,
    /// Edit rows only.
    pub edit: Rect,
    pub rulers: bool,
    pub message: Rect,
    pub command: Rect,
}

impl ScreenLayout {
    /// Fails with a `Param` error when the window the configuration needs is
    /// larger than the configured maximum. Smaller layouts are padded out to
    /// the minimum window.
    pub fn compute(config: &EditorConfig) -> Result<Self, EditorError> {
        let bounds = &config.window;
        let ruler_rows = if config.rulers { 2 } else { 0 };
        let natural_width = config.edit_area_cols + 2 * MARGIN;
        let natural_height = config.edit_area_rows + ruler_rows + 4;
        if natural_width > bounds.max_width || natural_height > bounds.max_height {
            return Err(EditorError::param(
                codes::LAYOUT_OUT_OF_BOUNDS,
                format!(
                    "{natural_width}x{natural_height} window exceeds the {}x{} maximum",
                    bounds.max_width, bounds.max_height
                ),
            ));
        }
        let width = natural_width.max(bounds.min_width);
        let height = natural_height.max(bounds.min_height);

        let edit_block = Rect::new(2, MARGIN, config.edit_area_cols, config.edit_area_rows + ruler_rows);
        let edit = Rect::new(
            edit_block.top + ruler_rows / 2,
            MARGIN,
            config.edit_area_cols,
            config.edit_area_rows,
        );
        Ok(Self {
            width,
            height,
            status: Rect::new(0, 0, width, 1),
            help: Rect::new(1, 0, width, 1),
            edit_block,
            edit,
            rulers: config.rulers,
            message: Rect::new(edit_block.bottom(), 0, width, 1),
            command: Rect::new(edit_block.bottom() + 1, 0, width, 1),
        })
    }

    /// Offset of the first edit row inside `edit_block`.
    pub fn text_offset(&self) -> usize {
        usize::from(self.edit.top - self.edit_block.top)
    }

    /// True when the window is at least as large as the layout.
    pub fn fits(&self, width: u16, height: u16) -> bool {
        width >= self.width && height >= self.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/layout.rs"]
mod tests;
