//! Always-visible navigation bar with one link per section.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::*;
use crate::router::{Route, Section};

const LINKS: [(Section, &str, &str); 2] = [
    (Section::Courses, ID_NAV_COURSES, "Courses"),
    (Section::Students, ID_NAV_STUDENTS, "Students"),
];

fn route_for(section: Section) -> Route {
    match section {
        Section::Courses => Route::Courses,
        Section::Students => Route::Students,
    }
}

/// Build the `<nav>`. Plain hash links; the hashchange listener does the rest.
pub fn create_navbar(document: &Document) -> Result<Element, JsValue> {
    let nav = document.create_element("nav")?;
    nav.set_id(ID_NAVBAR);
    nav.set_attribute(ATTR_DATA_TESTID, "navbar")?;

    let brand = document.create_element("strong")?;
    brand.set_class_name("brand");
    brand.set_text_content(Some("School Admin"));
    nav.append_child(&brand)?;

    for (section, id, text) in LINKS {
        let link = document.create_element("a")?;
        link.set_id(id);
        link.set_class_name(CSS_NAV_LINK);
        link.set_attribute("href", &route_for(section).to_hash())?;
        link.set_attribute(ATTR_DATA_TESTID, id)?;
        link.set_text_content(Some(text));
        nav.append_child(&link)?;
    }

    Ok(nav)
}

/// Highlight the link of the section the route belongs to.
pub fn set_active_section(document: &Document, route: Route) {
    let active = route.section();
    for (section, id, _) in LINKS {
        if let Some(link) = document.get_element_by_id(id) {
            let class = if section == active {
                CSS_NAV_LINK_ACTIVE
            } else {
                CSS_NAV_LINK
            };
            link.set_class_name(class);
            let result = if section == active {
                link.set_attribute("aria-current", "page")
            } else {
                link.remove_attribute("aria-current")
            };
            if let Err(e) = result {
                web_sys::console::warn_1(&format!("Failed to mark nav link {}: {:?}", id, e).into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_links_to_its_list() {
        assert_eq!(route_for(Section::Courses).to_hash(), "#/courses");
        assert_eq!(route_for(Section::Students).to_hash(), "#/students");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn only_the_active_link_is_marked_current() {
        let document = crate::dom_utils::document().unwrap();
        let nav = create_navbar(&document).unwrap();
        document.body().unwrap().append_child(&nav).unwrap();

        set_active_section(&document, Route::CourseDetail(3));
        let courses = document.get_element_by_id(ID_NAV_COURSES).unwrap();
        let students = document.get_element_by_id(ID_NAV_STUDENTS).unwrap();
        assert_eq!(courses.get_attribute("aria-current").as_deref(), Some("page"));
        assert_eq!(students.get_attribute("aria-current"), None);

        set_active_section(&document, Route::Students);
        assert_eq!(courses.get_attribute("aria-current"), None);
        assert_eq!(students.class_name(), CSS_NAV_LINK_ACTIVE);

        nav.remove();
    }
}
