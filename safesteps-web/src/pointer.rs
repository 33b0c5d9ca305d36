//! Guided-pointer overlay: a floating helper that highlights a target
//! element and nudges the child toward the next tap.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::dom;

/// Where the pointer should aim: a CSS selector resolved against the live
/// document, or a fixed viewport position.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTarget {
    pub selector: Option<AttrValue>,
    pub position: Option<(f64, f64)>,
    pub message: Option<AttrValue>,
    pub pulse_color: AttrValue,
    /// Helper character shown next to the pointing hand.
    pub character: AttrValue,
}

impl Default for PointerTarget {
    fn default() -> Self {
        Self {
            selector: None,
            position: None,
            message: None,
            pulse_color: AttrValue::from("rgba(255, 193, 7, 0.8)"),
            character: AttrValue::from("🧸"),
        }
    }
}

impl PointerTarget {
    #[must_use]
    pub fn for_selector(selector: impl Into<AttrValue>) -> Self {
        Self {
            selector: Some(selector.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<AttrValue>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Tracked bounding box of the target in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TrackedRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

fn locate(target: &PointerTarget) -> Option<TrackedRect> {
    if let Some(selector) = &target.selector {
        let element = dom::document().query_selector(selector).ok().flatten()?;
        let rect = element.get_bounding_client_rect();
        return Some(TrackedRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        });
    }
    target.position.map(|(x, y)| TrackedRect {
        left: x,
        top: y,
        width: 0.0,
        height: 0.0,
    })
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub target: Option<PointerTarget>,
    #[prop_or(true)]
    pub visible: bool,
}

/// Overlay rendered above everything else; purely advisory and
/// click-transparent. Renders nothing while the target cannot be found.
#[function_component(GuidedPointer)]
pub fn guided_pointer(props: &Props) -> Html {
    let rect = use_state(|| None::<TrackedRect>);

    {
        let rect = rect.clone();
        use_effect_with(
            (props.target.clone(), props.visible),
            move |(target, visible)| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});
                if let (Some(target), true) = (target.clone(), *visible) {
                    let update = move || {
                        let next = locate(&target);
                        if *rect != next {
                            rect.set(next);
                        }
                    };
                    update();

                    // Track layout changes: scroll/resize events catch the
                    // common cases, the interval catches dynamic content.
                    let tick = Closure::<dyn Fn()>::new(update);
                    let win = dom::window();
                    let interval = win
                        .set_interval_with_callback_and_timeout_and_arguments_0(
                            tick.as_ref().unchecked_ref(),
                            100,
                        )
                        .ok();
                    let _ = win
                        .add_event_listener_with_callback("scroll", tick.as_ref().unchecked_ref());
                    let _ = win
                        .add_event_listener_with_callback("resize", tick.as_ref().unchecked_ref());

                    cleanup = Box::new(move || {
                        let win = dom::window();
                        if let Some(handle) = interval {
                            win.clear_interval_with_handle(handle);
                        }
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            tick.as_ref().unchecked_ref(),
                        );
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            tick.as_ref().unchecked_ref(),
                        );
                    });
                } else {
                    rect.set(None);
                }
                cleanup
            },
        );
    }

    let (Some(target), Some(tracked), true) = (props.target.as_ref(), *rect, props.visible) else {
        return Html::default();
    };

    let center_x = tracked.left + tracked.width / 2.0;
    let center_y = tracked.top + tracked.height / 2.0;
    let pulse = target.pulse_color.as_str();

    let ring_style = format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;\
         border:4px solid {pulse};border-radius:24px;\
         box-shadow:0 0 20px {pulse},0 0 40px {pulse};",
        tracked.left - 8.0,
        tracked.top - 8.0,
        tracked.width + 16.0,
        tracked.height + 16.0,
    );
    let hand_style = format!(
        "position:absolute;left:{}px;top:{}px;font-size:2.5rem;",
        center_x + 30.0,
        center_y + 30.0
    );
    let character_style = format!(
        "position:absolute;left:{}px;top:{}px;font-size:3rem;",
        center_x + 70.0,
        center_y + 20.0
    );

    html! {
        <div class="guided-pointer-overlay" aria-hidden="true"
            style="position:fixed;inset:0;z-index:9999;pointer-events:none;overflow:hidden;">
            <div class="pointer-ring" style={ring_style}></div>
            <div class="pointer-sparkle sparkle-1"
                style={format!("position:absolute;left:{}px;top:{}px;", tracked.left - 20.0, tracked.top - 15.0)}>
                {"✨"}
            </div>
            <div class="pointer-sparkle sparkle-2"
                style={format!("position:absolute;left:{}px;top:{}px;", tracked.left + tracked.width + 10.0, tracked.top - 10.0)}>
                {"⭐"}
            </div>
            <div class="pointer-hand" style={hand_style}>{"👆"}</div>
            <div class="pointer-character" style={character_style}>{ target.character.clone() }</div>
            if let Some(message) = &target.message {
                <div class="pointer-message"
                    style={format!("position:absolute;left:{}px;top:{}px;max-width:200px;", center_x + 40.0, center_y + 90.0)}>
                    { message.clone() }
                </div>
            }
        </div>
    }
}
