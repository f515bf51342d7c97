use dioxus::prelude::*;
use techbuzz_engine::styles;

/// Diameter of a ripple circle in pixels.
pub const RIPPLE_SIZE: f64 = 200.0;

/// One expanding circle, positioned relative to its host element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleCircle {
    pub key: u64,
    pub left: f64,
    pub top: f64,
}

impl RippleCircle {
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {RIPPLE_SIZE}px; height: {RIPPLE_SIZE}px;",
            self.left, self.top
        )
    }
}

/// Circles currently animating inside a ripple host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ripples {
    next_key: u64,
    active: Vec<RippleCircle>,
}

impl Ripples {
    /// Starts a circle centred on the click point and returns its key.
    pub fn spawn(&mut self, x: f64, y: f64) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        let radius = RIPPLE_SIZE / 2.0;
        self.active.push(RippleCircle {
            key,
            left: x - radius,
            top: y - radius,
        });
        key
    }

    /// Removes a circle once its animation has ended.
    pub fn finish(&mut self, key: u64) {
        self.active.retain(|circle| circle.key != key);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RippleCircle> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Clickable wrapper that shows ripple feedback and forwards the click.
#[component]
pub fn Ripple(
    #[props(default, into)] class: String,
    onclick: EventHandler<()>,
    children: Element,
) -> Element {
    use_hook(|| styles::register_global("ripple-keyframes", styles::RIPPLE_KEYFRAMES));
    let mut ripples = use_signal(Ripples::default);

    rsx! {
        div {
            class: "ripple-host {class}",
            onclick: move |evt: MouseEvent| {
                let point = evt.element_coordinates();
                ripples.write().spawn(point.x, point.y);
                onclick.call(());
            },
            {children}
            for circle in ripples.read().iter().copied() {
                span {
                    key: "{circle.key}",
                    class: "ripple",
                    style: circle.style(),
                    onanimationend: move |_| ripples.write().finish(circle.key),
                }
            }
        }
    }
}
