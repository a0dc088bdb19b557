//! Page structure: section order, anchors and header navigation.

use std::fmt;

/// In-page navigation targets. Each one exists exactly once on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    WhatIDo,
    HowIWork,
    Systems,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::WhatIDo,
        Anchor::HowIWork,
        Anchor::Systems,
        Anchor::Contact,
    ];

    /// Element identifier used by links (`#what-i-do`, ...)
    pub fn id(self) -> &'static str {
        match self {
            Anchor::WhatIDo => "what-i-do",
            Anchor::HowIWork => "how-i-work",
            Anchor::Systems => "systems",
            Anchor::Contact => "contact",
        }
    }

    /// Resolve an identifier, with or without a leading `#`
    pub fn from_id(id: &str) -> Option<Anchor> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::ALL.into_iter().find(|anchor| anchor.id() == id)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Page sections in their fixed vertical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSection {
    Hero,
    WhatIDo,
    HowIWork,
    SystemsIndex,
    WhatIDontDo,
    WhoThisIsFor,
    Deliverable,
    Contact,
}

impl PageSection {
    pub const ORDER: [PageSection; 8] = [
        PageSection::Hero,
        PageSection::WhatIDo,
        PageSection::HowIWork,
        PageSection::SystemsIndex,
        PageSection::WhatIDontDo,
        PageSection::WhoThisIsFor,
        PageSection::Deliverable,
        PageSection::Contact,
    ];

    /// Side-rail title, if the section shows one
    pub fn title(self) -> Option<&'static str> {
        match self {
            PageSection::Hero | PageSection::Contact => None,
            PageSection::WhatIDo => Some("What I Do"),
            PageSection::HowIWork => Some("How I Work"),
            PageSection::SystemsIndex => Some("Systems Index"),
            PageSection::WhatIDontDo => Some("What I Don't Do"),
            PageSection::WhoThisIsFor => Some("Who This Is For"),
            PageSection::Deliverable => Some("Deliverable"),
        }
    }

    pub fn anchor(self) -> Option<Anchor> {
        match self {
            PageSection::WhatIDo => Some(Anchor::WhatIDo),
            PageSection::HowIWork => Some(Anchor::HowIWork),
            PageSection::SystemsIndex => Some(Anchor::Systems),
            PageSection::Contact => Some(Anchor::Contact),
            _ => None,
        }
    }

    /// Whether the section is drawn with a divider above it.
    ///
    /// The hero is a free-standing block, every other section uses the
    /// section wrapper's default.
    pub fn show_top_border(self) -> bool {
        !matches!(self, PageSection::Hero)
    }
}

/// A header navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
    /// Rendered in the accent color
    pub highlighted: bool,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "What I Do",
        anchor: Anchor::WhatIDo,
        highlighted: false,
    },
    NavLink {
        label: "How I Work",
        anchor: Anchor::HowIWork,
        highlighted: false,
    },
    NavLink {
        label: "Systems",
        anchor: Anchor::Systems,
        highlighted: true,
    },
    NavLink {
        label: "Get In Touch",
        anchor: Anchor::Contact,
        highlighted: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchor_ids_round_trip() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_id(anchor.id()), Some(anchor));
        }
        assert_eq!(Anchor::from_id("#systems"), Some(Anchor::Systems));
        assert_eq!(Anchor::from_id("does-not-exist"), None);
    }

    #[test]
    fn test_each_anchor_belongs_to_exactly_one_section() {
        for anchor in Anchor::ALL {
            let owners = PageSection::ORDER
                .iter()
                .filter(|section| section.anchor() == Some(anchor))
                .count();
            assert_eq!(owners, 1, "anchor {anchor} owned by {owners} sections");
        }
    }

    #[test]
    fn test_section_order_starts_with_hero_and_ends_with_contact() {
        assert_eq!(PageSection::ORDER[0], PageSection::Hero);
        assert_eq!(PageSection::ORDER[7], PageSection::Contact);
        let unique: HashSet<_> = PageSection::ORDER.iter().collect();
        assert_eq!(unique.len(), PageSection::ORDER.len());
    }

    #[test]
    fn test_titles_and_borders() {
        assert_eq!(PageSection::Hero.title(), None);
        assert_eq!(PageSection::Contact.title(), None);
        assert_eq!(PageSection::SystemsIndex.title(), Some("Systems Index"));
        assert!(!PageSection::Hero.show_top_border());
        assert!(PageSection::Contact.show_top_border());
    }

    #[test]
    fn test_nav_links_target_every_anchor_once() {
        let targets: Vec<_> = NAV_LINKS.iter().map(|link| link.anchor).collect();
        assert_eq!(targets, Anchor::ALL.to_vec());
        assert_eq!(NAV_LINKS.iter().filter(|l| l.highlighted).count(), 1);
    }
}
