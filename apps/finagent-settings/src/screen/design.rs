use makepad_widgets::*;
use super::SettingsScreen;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use finagent_widgets::theme::*;
    use finagent_widgets::components::*;
    use finagent_widgets::toast::*;

    // ── Connected application row ──

    AppRow = <View> {
        width: Fill, height: Fit
        padding: {left: 14, right: 8, top: 10, bottom: 10}
        margin: {bottom: 8}
        flow: Right
        align: {y: 0.5}
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 8.0);
                sdf.fill((ROW_BG));
                return sdf.result;
            }
        }

        <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 3
            app_name = <Label> {
                width: Fill
                draw_text: {
                    color: (TEXT_PRIMARY)
                    text_style: <FONT_SEMIBOLD>{ font_size: 12.0 }
                    wrap: Ellipsis
                }
            }
            app_package = <HintText> { width: Fill }
        }

        delete_btn = <GhostDangerButton> { text: "Eliminar" }
    }

    // ── Empty list placeholder ──

    AppsEmptyState = <View> {
        width: Fill, height: Fit
        padding: {top: 32, bottom: 32}
        flow: Down
        spacing: 4
        align: {x: 0.5}
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, 8.0);
                sdf.stroke((GRAY_300), 2.0);
                return sdf.result;
            }
        }
        <Label> {
            text: "No hay aplicaciones conectadas."
            draw_text: {
                color: (TEXT_MUTED)
                text_style: <FONT_MEDIUM>{ font_size: 12.0 }
            }
        }
        <HintText> { text: "Haga clic en «Agregar Aplicación» para comenzar." }
    }

    // ── Labeled field row inside the dialog ──

    DialogField = <View> {
        width: Fill, height: Fit
        flow: Right
        spacing: 12
        align: {y: 0.5}
        field_label = <BodyText> { width: 70 }
    }

    // ── Add application dialog ──

    AddAppDialog = <View> {
        width: 425, height: Fit
        flow: Down
        padding: 24
        spacing: 14
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 10.0);
                sdf.fill((CARD_BG));
                return sdf.result;
            }
        }

        <SectionTitle> { text: "Agregar Nueva Aplicación" }
        <HintText> {
            width: Fill
            text: "Ingrese el nombre y el paquete para conectar una nueva aplicación."
        }

        <DialogField> {
            field_label = { text: "Nombre" }
            app_name_input = <FormInput> { empty_text: "Ej: Mis Cuentas" }
        }
        <DialogField> {
            field_label = { text: "Paquete" }
            app_package_input = <FormInput> { empty_text: "com.empresa.app" }
        }

        // Shown inline because the modal covers the toast
        dialog_error = <Label> {
            visible: false
            draw_text: {
                color: (DESTRUCTIVE)
                text_style: <FONT_REGULAR>{ font_size: 10.5 }
            }
        }

        <View> {
            width: Fill, height: Fit
            align: {x: 1.0}
            save_app_btn = <PrimaryButton> { text: "Guardar" }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Main SettingsScreen widget
    // ─────────────────────────────────────────────────────────────────────────

    pub SettingsScreen = {{SettingsScreen}} {
        width: Fill, height: Fill
        flow: Overlay
        show_bg: true
        draw_bg: { color: (PAGE_BG) }

        page = <ScrollYView> {
            width: Fill, height: Fill
            flow: Down
            align: {x: 0.5}
            padding: {top: 32, bottom: 32, left: 24, right: 24}

            page_content = <View> {
                width: 720, height: Fit
                flow: Down
                spacing: 28

                // Header
                <View> {
                    width: Fill, height: Fit
                    flow: Down
                    spacing: 6
                    align: {x: 0.5}
                    <PageTitle> { text: "Agente de Automatización Financiera" }
                    <BodyText> { text: "Configure las reglas de interacción entre sus aplicaciones financieras." }
                }

                // ── Local API card ──────────────────────────────────────────
                api_card = <Card> {
                    <View> {
                        width: Fill, height: Fit
                        flow: Down
                        spacing: 4
                        <SectionTitle> { text: "Configuración de API Local" }
                        <HintText> { text: "Habilite la API para permitir la comunicación entre aplicaciones." }
                    }

                    api_row = <View> {
                        width: Fill, height: Fit
                        padding: 14
                        flow: Right
                        align: {y: 0.5}
                        show_bg: true
                        draw_bg: {
                            fn pixel(self) -> vec4 {
                                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, 8.0);
                                sdf.stroke((CARD_BORDER), 1.0);
                                return sdf.result;
                            }
                        }
                        <View> {
                            width: Fill, height: Fit
                            flow: Down
                            spacing: 3
                            <BodyText> { text: "Habilitar API" }
                            api_status = <HintText> { text: "La API está inactiva." }
                        }
                        api_switch = <Toggle> { text: "" }
                    }

                    port_section = <View> {
                        visible: false
                        width: Fill, height: Fit
                        flow: Down
                        spacing: 6
                        <BodyText> { text: "Puerto de la API" }
                        api_port_input = <FormInput> {
                            width: 240
                            empty_text: "e.g., 8080"
                        }
                    }
                }

                // ── Connected applications card ─────────────────────────────
                apps_card = <Card> {
                    <View> {
                        width: Fill, height: Fit
                        flow: Right
                        align: {y: 0.5}
                        <View> {
                            width: Fill, height: Fit
                            flow: Down
                            spacing: 4
                            <SectionTitle> { text: "Aplicaciones Conectadas" }
                            <HintText> { text: "Administre las aplicaciones que el agente puede automatizar." }
                        }
                        add_app_btn = <PrimaryButton> { text: "+  Agregar Aplicación" }
                    }

                    app_list = <PortalList> {
                        width: Fill, height: 320
                        flow: Down
                        AppRow = <AppRow> {}
                    }

                    apps_empty_state = <AppsEmptyState> { visible: false }
                }
            }
        }

        toast = <Toast> {}

        add_app_modal = <Modal> {
            content: {
                add_app_dialog = <AddAppDialog> {}
            }
        }
    }
}
