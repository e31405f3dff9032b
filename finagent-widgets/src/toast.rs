//! # Toast - Transient Notification Banner
//!
//! A small colored banner that shows one message at a time and hides
//! itself after [`TOAST_DURATION_SECS`]. Showing a new message replaces
//! the current one and restarts the timer.
//!
//! ```ignore
//! self.view.toast(ids!(toast)).show(cx, ToastLevel::Success, "Saved");
//! ```

use makepad_widgets::*;

/// How long a toast stays on screen
pub const TOAST_DURATION_SECS: f64 = 3.0;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use crate::theme::*;

    pub Toast = {{Toast}} {
        width: Fill, height: Fit
        align: {x: 0.5}
        padding: {top: 16}

        toast_card = <View> {
            visible: false
            width: Fit, height: Fit
            padding: {left: 16, right: 16, top: 10, bottom: 10}
            show_bg: true
            draw_bg: {
                // 0=success, 1=error, 2=info
                instance level: 0.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 6.0);
                    let color = mix((TOAST_SUCCESS), (TOAST_ERROR), clamp(self.level, 0.0, 1.0));
                    let color = mix(color, (TOAST_INFO), clamp(self.level - 1.0, 0.0, 1.0));
                    sdf.fill(color);
                    return sdf.result;
                }
            }
            toast_message = <Label> {
                draw_text: {
                    color: (WHITE)
                    text_style: <FONT_MEDIUM>{ font_size: 11.0 }
                }
            }
        }
    }
}

/// Visual style of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    /// Value for the `level` shader instance
    pub fn shader_value(self) -> f64 {
        match self {
            Self::Success => 0.0,
            Self::Error => 1.0,
            Self::Info => 2.0,
        }
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct Toast {
    #[deref]
    view: View,

    #[rust]
    hide_timer: Timer,
}

impl Widget for Toast {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        if self.hide_timer.is_event(event).is_some() {
            self.hide(cx);
        }
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl Toast {
    /// Show a message, replacing whatever is currently displayed
    pub fn show(&mut self, cx: &mut Cx, level: ToastLevel, message: &str) {
        cx.stop_timer(self.hide_timer);

        let card = self.view.view(ids!(toast_card));
        card.apply_over(cx, live! {
            draw_bg: { level: (level.shader_value()) }
        });
        self.view.label(ids!(toast_message)).set_text(cx, message);
        card.set_visible(cx, true);

        self.hide_timer = cx.start_timeout(TOAST_DURATION_SECS);
        self.view.redraw(cx);
    }

    pub fn hide(&mut self, cx: &mut Cx) {
        cx.stop_timer(self.hide_timer);
        self.view.view(ids!(toast_card)).set_visible(cx, false);
        self.view.redraw(cx);
    }
}

impl ToastRef {
    pub fn show(&self, cx: &mut Cx, level: ToastLevel, message: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.show(cx, level, message);
        }
    }

    pub fn hide(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.hide(cx);
        }
    }
}
