use dioxus::prelude::*;

#[component]
pub fn Banner() -> Element {
    rsx! {
        div { class: "banner",
            div { class: "banner-strip",
                span { class: "banner-logo", "▲" }
                span { class: "banner-title", "Marquee" }
            }
        }
    }
}
