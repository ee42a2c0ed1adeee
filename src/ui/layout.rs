//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the screens ask: how wide a dialog should be, whether to drop
//! secondary columns, how many rows fit.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let dialog_width = ctx.bounded_width(50, 40, 70);
/// if ctx.is_narrow() {
///     // hide the date column
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    ///
    /// ```ignore
    /// let ctx = LayoutContext::new(200, 40);
    /// // 30% of 200 = 60, but clamped to max of 50
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short; secondary details are dropped.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Check if the terminal is extra small (very constrained space).
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Longest topic shown in a row before truncation.
    pub fn max_topic_length(&self) -> usize {
        if self.is_extra_small() {
            20
        } else if self.is_narrow() {
            32
        } else {
            (self.width as usize).saturating_sub(40).max(32)
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.percent_width(0), 1);
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        let ctx = LayoutContext::new(40, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 20);
    }

    #[test]
    fn test_size_states() {
        let normal = LayoutContext::new(120, 40);
        assert!(!normal.is_compact());
        assert!(!normal.is_extra_small());

        let narrow = LayoutContext::new(70, 40);
        assert!(narrow.is_narrow());
        assert!(narrow.is_compact());

        let tiny = LayoutContext::new(50, 12);
        assert!(tiny.is_extra_small());
        assert_eq!(tiny.max_topic_length(), 20);
    }
}
