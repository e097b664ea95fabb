use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use crate::config::GuardSettings;

/// Whether a key press should be swallowed on a brief page. Only
/// Ctrl/Cmd combinations are ever blocked: save and copy always, view-source
/// and print when their settings say so.
pub fn blocks_shortcut(settings: &GuardSettings, key: &str, ctrl: bool, meta: bool) -> bool {
    if !settings.block_shortcuts || !(ctrl || meta) {
        return false;
    }
    match key.to_lowercase().as_str() {
        "s" | "c" => true,
        "u" => settings.block_view_source,
        "p" => settings.block_print,
        _ => false,
    }
}

/// Installs the context-menu and shortcut listeners for as long as the
/// calling component is mounted.
#[hook]
pub fn use_page_guards(settings: GuardSettings) {
    use_effect_with_deps(
        move |settings| {
            let settings = *settings;
            let destructor: Box<dyn FnOnce()> = match web_sys::window().and_then(|w| w.document()) {
                Some(document) => {
                    let contextmenu = Closure::<dyn Fn(Event)>::new(|e: Event| {
                        e.prevent_default();
                    });
                    let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if blocks_shortcut(&settings, &e.key(), e.ctrl_key(), e.meta_key()) {
                            e.prevent_default();
                        }
                    });

                    if settings.disable_right_click {
                        let _ = document.add_event_listener_with_callback(
                            "contextmenu",
                            contextmenu.as_ref().unchecked_ref(),
                        );
                    }
                    if settings.block_shortcuts {
                        let _ = document
                            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                    }
                    debug!("page guards installed: {:?}", settings);

                    Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "contextmenu",
                            contextmenu.as_ref().unchecked_ref(),
                        );
                        let _ = document
                            .remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                    })
                }
                None => Box::new(|| ()),
            };
            move || destructor()
        },
        settings,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_copy_always_blocked_with_modifier() {
        let settings = GuardSettings {
            block_print: false,
            block_view_source: false,
            ..GuardSettings::default()
        };
        assert!(blocks_shortcut(&settings, "s", true, false));
        assert!(blocks_shortcut(&settings, "C", false, true));
        assert!(!blocks_shortcut(&settings, "p", true, false));
        assert!(!blocks_shortcut(&settings, "u", true, false));
    }

    #[test]
    fn print_and_view_source_follow_settings() {
        let settings = GuardSettings::default();
        assert!(blocks_shortcut(&settings, "p", true, false));
        assert!(blocks_shortcut(&settings, "u", false, true));
        assert!(!blocks_shortcut(&settings, "f", true, false));
    }

    #[test]
    fn plain_keys_pass() {
        let settings = GuardSettings::default();
        assert!(!blocks_shortcut(&settings, "s", false, false));
        assert!(!blocks_shortcut(&settings, "c", false, false));
    }

    #[test]
    fn nothing_blocked_when_shortcuts_off() {
        let settings = GuardSettings {
            block_shortcuts: false,
            ..GuardSettings::default()
        };
        assert!(!blocks_shortcut(&settings, "s", true, true));
    }
}
