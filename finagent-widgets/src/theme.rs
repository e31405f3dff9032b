use makepad_widgets::*;

live_design! {
    use link::theme::*;

    // ========================================================================
    // FONTS
    // Built on the bundled Makepad theme fonts so no assets need shipping
    // ========================================================================

    pub FONT_REGULAR = <THEME_FONT_REGULAR> {}
    pub FONT_MEDIUM = <THEME_FONT_REGULAR> {}
    pub FONT_SEMIBOLD = <THEME_FONT_BOLD> {}
    pub FONT_BOLD = <THEME_FONT_BOLD> {}

    // ========================================================================
    // COLORS
    // ========================================================================

    pub WHITE = #ffffff
    pub PAGE_BG = #f8fafc
    pub CARD_BG = #ffffff
    pub CARD_BORDER = #e2e8f0
    pub ROW_BG = #f1f5f9
    pub HOVER_BG = #f1f5f9

    pub TEXT_PRIMARY = #0f172a
    pub TEXT_MUTED = #64748b
    pub GRAY_300 = #cbd5e1
    pub GRAY_700 = #334155

    pub PRIMARY = #0f172a
    pub PRIMARY_HOVER = #1f2937
    pub DESTRUCTIVE = #dc2626

    // Toast levels
    pub TOAST_SUCCESS = #16a34a
    pub TOAST_ERROR = #dc2626
    pub TOAST_INFO = #2563fa
}
