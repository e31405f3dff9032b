use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use crate::theme::*;

    // ========================================================================
    // SHARED TEXT STYLES
    // Reusable label templates with consistent typography
    // ========================================================================

    // Page title: bold, 22px, primary color
    pub PageTitle = <Label> {
        draw_text: {
            color: (TEXT_PRIMARY)
            text_style: <FONT_BOLD>{ font_size: 22.0 }
        }
    }

    // Section title: semibold, 16px, primary color
    pub SectionTitle = <Label> {
        draw_text: {
            color: (TEXT_PRIMARY)
            text_style: <FONT_SEMIBOLD>{ font_size: 16.0 }
        }
    }

    // Body text: regular, 11px, secondary gray
    pub BodyText = <Label> {
        draw_text: {
            color: (GRAY_700)
            text_style: <FONT_REGULAR>{ font_size: 11.0 }
        }
    }

    // Hint/muted text: regular, 10px, muted gray
    pub HintText = <Label> {
        draw_text: {
            color: (TEXT_MUTED)
            text_style: <FONT_REGULAR>{ font_size: 10.0 }
            wrap: Word
        }
    }

    // ========================================================================
    // CARD
    // White rounded panel with a thin border
    // ========================================================================

    pub Card = <View> {
        width: Fill, height: Fit
        flow: Down
        padding: 20
        spacing: 14
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, 8.0);
                sdf.fill_keep((CARD_BG));
                sdf.stroke((CARD_BORDER), 1.0);
                return sdf.result;
            }
        }
    }

    // ========================================================================
    // BUTTONS
    // ========================================================================

    pub PrimaryButton = <Button> {
        width: Fit, height: 34
        padding: {left: 14, right: 14}
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {hover: 0.0} } }
                on  = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {hover: 1.0} } }
            }
            pressed = {
                default: off,
                off = { from: {all: Forward {duration: 0.07}} apply: { draw_bg: {pressed: 0.0} } }
                on  = { from: {all: Forward {duration: 0.07}} apply: { draw_bg: {pressed: 1.0} } }
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 6.0);
                let color = mix((PRIMARY), (PRIMARY_HOVER), self.hover);
                sdf.fill(mix(color, color * 0.9, self.pressed));
                return sdf.result;
            }
        }
        draw_text: {
            fn get_color(self) -> vec4 { return (WHITE); }
            text_style: <FONT_MEDIUM>{ font_size: 11.0 }
        }
    }

    // Transparent button with red text, used for per-row delete
    pub GhostDangerButton = <Button> {
        width: Fit, height: 30
        padding: {left: 10, right: 10}
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {hover: 0.0} } }
                on  = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {hover: 1.0} } }
            }
            pressed = {
                default: off,
                off = { from: {all: Forward {duration: 0.07}} apply: { draw_bg: {pressed: 0.0} } }
                on  = { from: {all: Forward {duration: 0.07}} apply: { draw_bg: {pressed: 1.0} } }
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 6.0);
                let color = mix(vec4(0.0, 0.0, 0.0, 0.0), #fca5a5, self.hover * 0.5 + self.pressed * 0.5);
                sdf.fill(color);
                return sdf.result;
            }
        }
        draw_text: {
            fn get_color(self) -> vec4 { return (DESTRUCTIVE); }
            text_style: <FONT_MEDIUM>{ font_size: 11.0 }
        }
    }

    // ========================================================================
    // TEXT FIELD
    // ========================================================================

    pub FormInput = <TextInput> {
        width: Fill, height: 34
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, 6.0);
                sdf.fill_keep((WHITE));
                sdf.stroke((GRAY_300), 1.0);
                return sdf.result;
            }
        }
        draw_text: {
            color: (GRAY_700)
            color_empty: (TEXT_MUTED)
            text_style: <FONT_REGULAR>{ font_size: 12.0 }
        }
    }
}
