use dioxus::prelude::*;

/// Shared page shell: offsets content below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let extra = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[72px] px-4 pb-8 {extra}",
            {children}
        }
    )
}
