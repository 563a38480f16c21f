//! The element kinds Swalpa ships with, producing Bootstrap flavoured HTML

use crate::language::{Element, ElementKind, Templates};

pub struct Div;

impl ElementKind for Div {
    fn name(&self) -> &'static str {
        "div"
    }

    fn templates(&self) -> Templates {
        Templates {
            begin: "<div{attributes}>",
            end: "</div>",
        }
    }
}

pub struct Navbar;

impl ElementKind for Navbar {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn construct(&self, element: &mut Element<'_>) {
        element.add_classes(["navbar", "navbar-default"]);
    }

    fn templates(&self) -> Templates {
        Templates {
            begin: "<nav{attributes}>",
            end: "</nav>",
        }
    }
}

pub struct Header;

impl ElementKind for Header {
    fn name(&self) -> &'static str {
        "header"
    }

    fn construct(&self, element: &mut Element<'_>) {
        element.set_parent_specific_hook("navbar", |e| e.add_class("navbar-header"));
    }

    fn templates(&self) -> Templates {
        Templates {
            begin: "<header{attributes}>",
            end: "</header>",
        }
    }
}

pub struct Link;

impl ElementKind for Link {
    fn name(&self) -> &'static str {
        "link"
    }

    fn default_property(&self) -> Option<&'static str> {
        Some("href")
    }

    fn templates(&self) -> Templates {
        Templates {
            begin: "<a{attributes}>",
            end: "</a>",
        }
    }
}

/// The brand of a site, a link that only makes sense inside the header of a
/// navbar.
pub struct Branding;

impl ElementKind for Branding {
    fn name(&self) -> &'static str {
        "branding"
    }

    fn default_property(&self) -> Option<&'static str> {
        Link.default_property()
    }

    fn construct(&self, element: &mut Element<'_>) {
        Link.construct(element);

        element.purge_classes();
        element.add_class("navbar-brand");
        element.add_desired_ancestor_chain(["navbar", "header"]);
    }

    fn templates(&self) -> Templates {
        Link.templates()
    }
}

pub struct Form;

impl ElementKind for Form {
    fn name(&self) -> &'static str {
        "form"
    }

    fn construct(&self, element: &mut Element<'_>) {
        element.set_parent_specific_hook("navbar", |e| e.add_class("navbar-form"));
    }

    fn templates(&self) -> Templates {
        Templates {
            begin: "<form{attributes}>",
            end: "</form>",
        }
    }
}

pub struct Button;

impl ElementKind for Button {
    fn name(&self) -> &'static str {
        "button"
    }

    fn default_property(&self) -> Option<&'static str> {
        Some("value")
    }

    fn construct(&self, element: &mut Element<'_>) {
        element.add_class("btn");
        element.set_property("type", "button");
        element.set_parent_specific_hook("navbar", |e| e.add_class("navbar-btn"));
        element.set_parent_specific_hook("form", |e| e.add_class("btn-default"));
    }

    fn templates(&self) -> Templates {
        Templates {
            begin: "<button{attributes}>",
            end: "</button>",
        }
    }
}

pub struct Paragraph;

impl ElementKind for Paragraph {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn construct(&self, element: &mut Element<'_>) {
        element.set_parent_specific_hook("navbar", |e| e.add_class("navbar-text"));
    }

    fn templates(&self) -> Templates {
        Templates {
            begin: "<p{attributes}>",
            end: "</p>",
        }
    }
}
