pub mod theme;
pub mod components;
pub mod app_trait;
pub mod toast;

pub use app_trait::{AgentApp, AppInfo, AppRegistry};
pub use toast::{Toast, ToastLevel, ToastRef, ToastWidgetExt, TOAST_DURATION_SECS};

use makepad_widgets::Cx;

/// Register all shared widgets with Makepad.
///
/// This function must be called during app initialization, typically in `LiveRegister::live_register`.
///
/// **Important**: Theme is registered first as other widgets depend on its font and color definitions.
pub fn live_design(cx: &mut Cx) {
    // Theme provides fonts and base styles - must be first
    theme::live_design(cx);
    components::live_design(cx);
    toast::live_design(cx);
}
