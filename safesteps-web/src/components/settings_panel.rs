//! Parent settings dashboard: preferences, family photos, data export.
use safesteps_game::{Difficulty, PhotoRole, Settings, SettingsStore};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{FileReader, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::camera::CameraCapture;
use crate::components::photo_card::PhotoCard;
use crate::dom;
use crate::storage::{self, LocalSettingsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    General,
    Photos,
    Accessibility,
    Advanced,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::General, Tab::Photos, Tab::Accessibility, Tab::Advanced];

    const fn label(self) -> &'static str {
        match self {
            Tab::General => "General",
            Tab::Photos => "Photos",
            Tab::Accessibility => "Accessibility",
            Tab::Advanced => "Advanced",
        }
    }
}

fn persist(handle: &UseStateHandle<Settings>, next: Settings) {
    if let Err(e) = LocalSettingsStore.save_settings(&next) {
        log::error!("failed to save settings: {e}");
    }
    handle.set(next);
}

/// Checkbox row writing one boolean field through the store on every change.
fn toggle_row(
    handle: &UseStateHandle<Settings>,
    label: &'static str,
    checked: bool,
    apply: fn(&mut Settings, bool),
) -> Html {
    let handle = handle.clone();
    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = *handle;
        apply(&mut next, input.checked());
        persist(&handle, next);
    });
    html! {
        <label class="settings-toggle">
            <input type="checkbox" checked={checked} {onchange} />
            <span>{ label }</span>
        </label>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_back: Callback<()>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &Props) -> Html {
    let settings = use_state(Settings::default);
    let tab = use_state(|| Tab::General);
    let confirm_reset = use_state(|| false);
    let mom_photo = use_state(|| None::<String>);
    let dad_photo = use_state(|| None::<String>);
    let camera_for = use_state(|| None::<PhotoRole>);

    {
        let settings = settings.clone();
        let mom_photo = mom_photo.clone();
        let dad_photo = dad_photo.clone();
        use_effect_with((), move |()| {
            let store = LocalSettingsStore;
            if let Ok(loaded) = store.load_settings() {
                settings.set(loaded);
            }
            if let Ok(photo) = store.load_photo(PhotoRole::Mom) {
                mom_photo.set(photo);
            }
            if let Ok(photo) = store.load_photo(PhotoRole::Dad) {
                dad_photo.set(photo);
            }
            || {}
        });
    }

    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let on_difficulty = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = *settings;
            next.difficulty = match select.value().as_str() {
                "easy" => Difficulty::Easy,
                "hard" => Difficulty::Hard,
                _ => Difficulty::Medium,
            };
            persist(&settings, next);
        })
    };

    let on_time_limit = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = *settings;
            next.time_limit = input.value().parse().unwrap_or(0);
            persist(&settings, next);
        })
    };

    let on_export = {
        let settings = settings.clone();
        Callback::from(move |_| {
            if let Err(e) = storage::export_settings(&settings) {
                log::error!("settings export failed: {}", dom::js_error_message(&e));
                dom::alert("Could not export settings.");
            }
        })
    };

    let on_import = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            let Ok(reader) = FileReader::new() else {
                return;
            };
            let reader_handle = reader.clone();
            let settings = settings.clone();
            let onloadend = Closure::once(move |_: web_sys::Event| {
                let Some(text) = reader_handle.result().ok().and_then(|v| v.as_string()) else {
                    return;
                };
                match Settings::from_json(&text) {
                    Ok(imported) => {
                        persist(&settings, imported);
                        dom::alert("Settings imported!");
                    }
                    Err(e) => {
                        log::warn!("settings import rejected: {e}");
                        dom::alert("That file is not a valid settings export.");
                    }
                }
            });
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();
            if let Err(e) = reader.read_as_text(&file) {
                log::error!("failed to read import file: {}", dom::js_error_message(&e));
            }
        })
    };

    let on_reset = {
        let confirm_reset = confirm_reset.clone();
        Callback::from(move |_| confirm_reset.set(true))
    };
    let on_reset_confirmed = {
        let confirm_reset = confirm_reset.clone();
        Callback::from(move |_| {
            match LocalSettingsStore.reset_progress() {
                Ok(()) => dom::alert("All game progress has been reset."),
                Err(e) => {
                    log::error!("progress reset failed: {e}");
                    dom::alert("Could not reset progress.");
                }
            }
            confirm_reset.set(false);
        })
    };
    let on_reset_cancelled = {
        let confirm_reset = confirm_reset.clone();
        Callback::from(move |_| confirm_reset.set(false))
    };

    // Photo plumbing per role; the store write and the state update stay
    // together so the card always mirrors localStorage.
    let photo_handle = |role: PhotoRole| match role {
        PhotoRole::Mom => mom_photo.clone(),
        PhotoRole::Dad => dad_photo.clone(),
    };
    let save_photo = |role: PhotoRole| {
        let handle = photo_handle(role);
        Callback::from(move |data_uri: String| {
            if let Err(e) = LocalSettingsStore.save_photo(role, &data_uri) {
                log::error!("failed to save photo: {e}");
                dom::alert("Could not save the photo.");
                return;
            }
            handle.set(Some(data_uri));
        })
    };
    let clear_photo = |role: PhotoRole| {
        let handle = photo_handle(role);
        Callback::from(move |()| {
            if let Err(e) = LocalSettingsStore.clear_photo(role) {
                log::error!("failed to remove photo: {e}");
                return;
            }
            handle.set(None);
        })
    };
    let open_camera = |role: PhotoRole| {
        let camera_for = camera_for.clone();
        Callback::from(move |()| camera_for.set(Some(role)))
    };

    let tab_body = match *tab {
        Tab::General => html! {
            <div class="settings-section">
                { toggle_row(&settings, "Sound effects", settings.sound_enabled, |s, v| s.sound_enabled = v) }
                { toggle_row(&settings, "Voice narration", settings.voice_enabled, |s, v| s.voice_enabled = v) }
                { toggle_row(&settings, "Show progress during games", settings.show_progress, |s, v| s.show_progress = v) }
                <label class="settings-field">
                    <span>{ "Difficulty" }</span>
                    <select onchange={on_difficulty} value={settings.difficulty.to_string()}>
                        <option value="easy">{ "Easy" }</option>
                        <option value="medium">{ "Medium" }</option>
                        <option value="hard">{ "Hard" }</option>
                    </select>
                </label>
                <label class="settings-field">
                    <span>{ "Session time limit (minutes, 0 = unlimited)" }</span>
                    <input type="number" min="0" max="60" step="5"
                        value={settings.time_limit.to_string()} onchange={on_time_limit} />
                </label>
            </div>
        },
        Tab::Photos => {
            let role = *camera_for;
            html! {
                <div class="settings-section settings-section--photos">
                    <PhotoCard
                        role={PhotoRole::Mom}
                        photo={(*mom_photo).clone().map(AttrValue::from)}
                        on_save={save_photo(PhotoRole::Mom)}
                        on_clear={clear_photo(PhotoRole::Mom)}
                        on_open_camera={open_camera(PhotoRole::Mom)}
                    />
                    <PhotoCard
                        role={PhotoRole::Dad}
                        photo={(*dad_photo).clone().map(AttrValue::from)}
                        on_save={save_photo(PhotoRole::Dad)}
                        on_clear={clear_photo(PhotoRole::Dad)}
                        on_open_camera={open_camera(PhotoRole::Dad)}
                    />
                    if let Some(role) = role {
                        <CameraCapture
                            title={format!("Take {}'s Photo", role.label())}
                            on_capture={{
                                let save = save_photo(role);
                                let camera_for = camera_for.clone();
                                Callback::from(move |data_uri: String| {
                                    save.emit(data_uri);
                                    camera_for.set(None);
                                })
                            }}
                            on_cancel={{
                                let camera_for = camera_for.clone();
                                Callback::from(move |()| camera_for.set(None))
                            }}
                        />
                    }
                </div>
            }
        }
        Tab::Accessibility => html! {
            <div class="settings-section">
                { toggle_row(&settings, "Show helper hints", settings.show_hints, |s, v| s.show_hints = v) }
                { toggle_row(&settings, "Auto-advance after feedback", settings.auto_advance, |s, v| s.auto_advance = v) }
            </div>
        },
        Tab::Advanced => html! {
            <div class="settings-section">
                { toggle_row(&settings, "Practice reminders", settings.notifications, |s, v| s.notifications = v) }
                <div class="settings-data">
                    <button class="export-button" onclick={on_export}>{ "Export settings" }</button>
                    <label class="import-button" for="settings-import">{ "Import settings" }</label>
                    <input id="settings-import" type="file" accept="application/json,.json"
                        class="sr-only" onchange={on_import} />
                </div>
                if *confirm_reset {
                    <div class="reset-confirm" role="alertdialog" aria-label="Confirm reset">
                        <p>{ "Reset all game progress? This cannot be undone." }</p>
                        <button class="reset-confirm__yes" onclick={on_reset_confirmed}>{ "Yes, reset" }</button>
                        <button class="reset-confirm__no" onclick={on_reset_cancelled}>{ "Cancel" }</button>
                    </div>
                } else {
                    <button class="reset-button" onclick={on_reset}>{ "Reset all progress" }</button>
                }
            </div>
        },
    };

    html! {
        <section class="settings-panel">
            <header class="settings-panel__header">
                <button class="back-button" onclick={back} aria-label="Back to menu">{ "← Back" }</button>
                <h1>{ "Parent Settings" }</h1>
            </header>
            <nav class="settings-tabs" role="tablist">
                { for Tab::ALL.iter().map(|t| {
                    let t = *t;
                    let tab_handle = tab.clone();
                    let onclick = Callback::from(move |_| tab_handle.set(t));
                    let class = if t == *tab {
                        "settings-tab settings-tab--active"
                    } else {
                        "settings-tab"
                    };
                    html! {
                        <button {class} role="tab" aria-selected={(t == *tab).to_string()} {onclick}>
                            { t.label() }
                        </button>
                    }
                }) }
            </nav>
            { tab_body }
        </section>
    }
}
