use dioxus::prelude::*;

use portfolio::catalog::ContentCatalog;

mod about;
use about::About;

mod contact;
use contact::Contact;

mod footer;
use footer::Footer;

mod hero;
use hero::Hero;

mod projects;
use projects::Projects;

mod skills;
use skills::Skills;

use crate::components::navigation::NavBar;

#[derive(Clone, PartialEq, Props)]
pub struct HomeProps {
    catalog: ContentCatalog,
}

// the whole page, top to bottom.  each section only gets the slice of the
// catalog it renders
#[component]
pub fn Home(props: HomeProps) -> Element {
    let catalog = props.catalog;
    let profile = catalog.profile().clone();

    rsx! {
        NavBar { brand: profile.name.clone() }

        main {
            Hero { profile: profile.clone() }
            About {
                profile: profile.clone(),
                highlights: catalog.highlights().to_vec(),
            }
            Projects { projects: catalog.projects().to_vec() }
            Skills {
                frontend: catalog.frontend_skills().to_vec(),
                backend: catalog.backend_skills().to_vec(),
                tags: catalog.tags().to_vec(),
            }
            Contact { profile: profile.clone(), social: catalog.social().to_vec() }
        }

        Footer { name: profile.name.clone(), social: catalog.social().to_vec() }
    }
}
