use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    searching: bool,
    on_input: EventHandler<String>,
}

/// Search field with a spinner that replaces the search icon while a search is pending
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-container",
            div { class: "search-field",
                if props.searching {
                    span { class: "search-icon spin-fade-in", "◌" }
                } else {
                    span { class: "search-icon fade-in", "⌕" }
                }
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{props.query}",
                    oninput: move |evt| props.on_input.call(evt.value())
                }
            }
        }
    }
}
