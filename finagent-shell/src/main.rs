mod app;

fn main() {
    // Initialize the logger (verbosity via RUST_LOG)
    env_logger::init();
    log::info!("Starting financial automation agent settings");

    // macOS 26 requires setActivationPolicy to be called before the event loop
    // starts, otherwise NSAssertMainEventQueueIsCurrentEventQueue fires on the
    // first nextEventMatchingMask call.
    #[cfg(target_os = "macos")]
    unsafe {
        use objc::runtime::Class;
        use objc::{msg_send, sel, sel_impl};
        if let Some(ns_app_cls) = Class::get("NSApplication") {
            let ns_app: *mut objc::runtime::Object = msg_send![ns_app_cls, sharedApplication];
            let () = msg_send![ns_app, setActivationPolicy: 0i64]; // NSApplicationActivationPolicyRegular
        }
    }

    app::app_main();
}
