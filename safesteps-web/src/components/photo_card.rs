//! Family photo slot: upload from a file or open the camera.
use safesteps_game::PhotoRole;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{FileReader, HtmlInputElement};
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub role: PhotoRole,
    #[prop_or_default]
    pub photo: Option<AttrValue>,
    /// Emits the photo as a data URI once a file has been read.
    pub on_save: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_open_camera: Callback<()>,
}

#[function_component(PhotoCard)]
pub fn photo_card(props: &Props) -> Html {
    let input_id = format!("photo-upload-{}", props.role.label().to_lowercase());

    let on_file_change = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            // Allow re-selecting the same file later.
            input.set_value("");
            if !file.type_().starts_with("image/") {
                dom::alert("Please choose an image file.");
                return;
            }
            let Ok(reader) = FileReader::new() else {
                return;
            };
            let reader_handle = reader.clone();
            let on_save = on_save.clone();
            let onloadend = Closure::once(move |_: web_sys::Event| {
                if let Some(data_uri) = reader_handle.result().ok().and_then(|v| v.as_string()) {
                    on_save.emit(data_uri);
                }
            });
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();
            if let Err(e) = reader.read_as_data_url(&file) {
                log::error!("failed to read photo: {}", dom::js_error_message(&e));
            }
        })
    };

    let open_camera = {
        let cb = props.on_open_camera.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="photo-card">
            <h3>{ format!("{}'s Photo", props.role.label()) }</h3>
            if let Some(photo) = &props.photo {
                <img class="photo-card__preview" src={photo.clone()}
                    alt={format!("Photo of {}", props.role.label())} />
                <button class="photo-card__clear" onclick={clear}>{ "Remove" }</button>
            } else {
                <div class="photo-card__placeholder">{ "📷" }</div>
            }
            <div class="photo-card__actions">
                <label class="photo-card__upload" for={input_id.clone()}>{ "Upload 📁" }</label>
                <input id={input_id} type="file" accept="image/*" class="sr-only"
                    onchange={on_file_change} />
                <button class="photo-card__camera" onclick={open_camera}>{ "Camera 📸" }</button>
            </div>
        </div>
    }
}
