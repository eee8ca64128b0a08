use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, Separator,
};

/// Static information page: mission, helplines, disclaimer.
#[component]
pub fn About() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "About Surat Crime Connect" }
            PageSubtitle { "A civic initiative for a safer Surat." }
        }

        Card {
            CardHeader {
                CardTitle { "Our mission" }
            }
            CardContent {
                p {
                    "Surat Crime Connect brings crime news, community reports and official \
                     safety advisories into one place so residents can make informed \
                     decisions about their daily routes and routines."
                }
                p {
                    "The platform is community-first: most of what you see here comes from \
                     people reporting what they notice in their own neighbourhoods."
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Emergency helplines" }
            }
            CardContent {
                ul { class: "helpline-list",
                    li { strong { "100" } " — Police control room" }
                    li { strong { "1930" } " — National cyber fraud helpline" }
                    li { strong { "181" } " — Women's helpline" }
                    li { strong { "108" } " — Ambulance" }
                    li { strong { "101" } " — Fire brigade" }
                }
            }
        }

        Separator {}

        Card {
            CardHeader {
                CardTitle { "Disclaimer" }
            }
            CardContent {
                p {
                    "This portal is an awareness tool, not an emergency channel. Reports \
                     filed here do not replace an FIR. For crimes in progress or any \
                     emergency, always dial 100 first."
                }
            }
        }
    }
}
