use dioxus::prelude::*;

const DRIVE_ID: &str = "1UjQFUbtDp4dpzcaWvDfMlACqRC9s4tgH";

#[component]
pub fn Resume() -> Element {
    let preview = format!("https://drive.google.com/file/d/{DRIVE_ID}/preview");
    let download = format!("https://drive.google.com/uc?export=download&id={DRIVE_ID}");

    rsx! {
        div { class: "resume-page",
            div { class: "container",
                h1 { class: "section-title", "Resume" }
                p { style: "margin-bottom: var(--space-4);",
                    a {
                        class: "btn btn-primary",
                        href: "{download}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Download PDF"
                    }
                }
                iframe { class: "resume-frame", src: "{preview}", title: "Resume" }
            }
        }
    }
}
