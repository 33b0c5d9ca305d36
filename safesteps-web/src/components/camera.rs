//! Camera capture dialog for the family photo slots.
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    /// Emits the captured frame as a JPEG data URI.
    pub on_capture: Callback<String>,
    pub on_cancel: Callback<()>,
}

fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

async fn open_stream() -> Result<MediaStream, JsValue> {
    let devices = dom::window().navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    JsFuture::from(promise).await?.dyn_into::<MediaStream>()
}

fn capture_frame(video: &HtmlVideoElement, canvas: &HtmlCanvasElement) -> Result<String, JsValue> {
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)?;
    canvas.to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(0.8))
}

#[function_component(CameraCapture)]
pub fn camera_capture(props: &Props) -> Html {
    let video_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let stream = use_mut_ref(|| None::<MediaStream>);

    {
        let video_ref = video_ref.clone();
        let stream = stream.clone();
        let on_cancel = props.on_cancel.clone();
        use_effect_with((), move |()| {
            {
                let stream = stream.clone();
                spawn_local(async move {
                    match open_stream().await {
                        Ok(media) => {
                            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                                video.set_src_object(Some(&media));
                                let _ = video.play();
                            }
                            *stream.borrow_mut() = Some(media);
                        }
                        Err(e) => {
                            log::warn!("camera unavailable: {}", dom::js_error_message(&e));
                            dom::alert("Could not open the camera. Please check permissions.");
                            on_cancel.emit(());
                        }
                    }
                });
            }
            move || {
                if let Some(media) = stream.borrow_mut().take() {
                    stop_stream(&media);
                }
            }
        });
    }

    let take_photo = {
        let video_ref = video_ref.clone();
        let canvas_ref = canvas_ref.clone();
        let stream = stream.clone();
        let on_capture = props.on_capture.clone();
        Callback::from(move |_| {
            let (Some(video), Some(canvas)) = (
                video_ref.cast::<HtmlVideoElement>(),
                canvas_ref.cast::<HtmlCanvasElement>(),
            ) else {
                return;
            };
            match capture_frame(&video, &canvas) {
                Ok(data_uri) => {
                    if let Some(media) = stream.borrow_mut().take() {
                        stop_stream(&media);
                    }
                    on_capture.emit(data_uri);
                }
                Err(e) => {
                    log::error!("photo capture failed: {}", dom::js_error_message(&e));
                    dom::alert("Could not take the photo. Please try again.");
                }
            }
        })
    };

    let cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="camera-dialog" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
            <div class="camera-dialog__panel">
                <h3>{ props.title.clone() }</h3>
                <video ref={video_ref} class="camera-dialog__preview" autoplay=true playsinline=true></video>
                <canvas ref={canvas_ref} class="sr-only"></canvas>
                <div class="camera-dialog__actions">
                    <button class="camera-dialog__shutter" onclick={take_photo}>{ "Take Photo 📸" }</button>
                    <button class="camera-dialog__cancel" onclick={cancel}>{ "Cancel" }</button>
                </div>
            </div>
        </div>
    }
}
