//! Resolution context for turning computed lengths into pixels.

use serde::Serialize;

/// The font and containing-block metrics a layout pass resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutContext {
    /// [§ 4.3.2 Lengths](https://www.w3.org/TR/CSS2/syndata.html#length-units)
    ///
    /// "em: the 'font-size' of the relevant font"
    pub em_size: f32,

    /// "ex: the 'x-height' of the relevant font"
    pub ex_size: f32,

    /// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// Basis for percentage margins and padding, which "refer to the width
    /// of the containing block" even on the vertical sides.
    pub containing_block_width: f32,
}

impl LayoutContext {
    /// A context for the given font size, with the x-height taken as half
    /// of it.
    #[must_use]
    pub fn with_em_size(em_size: f32) -> Self {
        Self {
            em_size,
            ex_size: em_size / 2.0,
            ..Self::default()
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            em_size: 16.0,
            ex_size: 8.0,
            containing_block_width: 0.0,
        }
    }
}
