//! Static page copy shared by the terminal and browser renderers.

/// Hero block
pub struct Hero {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub statement: &'static str,
    pub warning: &'static str,
    pub rules: [&'static str; 2],
    pub call_to_action: &'static str,
}

pub const HERO: Hero = Hero {
    name: "EDDIE",
    role: "Autonomous Systems Builder",
    tagline: "From half-formed idea to functioning infrastructure.",
    statement: "I build real systems across software, hardware, AI, and physical space.",
    warning: "No mock data. No theater. No permission cycles.",
    rules: [
        "If it boots, routes, and survives misuse, it ships.",
        "If it doesn\u{2019}t, it gets cut until it does.",
    ],
    call_to_action: "Build the thing",
};

// ─────────────────────────────────────────────────────────────────────────────
// What I Do
// ─────────────────────────────────────────────────────────────────────────────

pub const WHAT_I_DO_LEAD: &str = "I turn ambiguous intent into operational reality.";
pub const WHAT_I_DO_INTRO: &str = "That includes:";

pub const CAPABILITIES: [&str; 6] = [
    "Full-stack software systems",
    "AI pipelines and control layers",
    "Hardware and physical installations",
    "Trading and financial systems",
    "Governance and permission logic",
    "Documentation that reflects truth, not hope",
];

pub const WHAT_I_DO_CLOSING: [&str; 2] = [
    "I don\u{2019}t hand off diagrams.",
    "I deliver systems that work.",
];

// ─────────────────────────────────────────────────────────────────────────────
// How I Work
// ─────────────────────────────────────────────────────────────────────────────

/// A numbered working principle
pub struct Principle {
    pub title: &'static str,
    pub summary: &'static [&'static str],
    /// Bulleted list under the summary (only "Build for Failure" has one)
    pub bullets: &'static [&'static str],
    pub details: &'static [&'static str],
    /// The priority constraint is drawn with an accent rule
    pub emphasized: bool,
}

pub const PRINCIPLES: [Principle; 5] = [
    Principle {
        title: "0. Priority Constraint",
        summary: &["Dad first. Builder always."],
        bullets: &[],
        details: &[
            "Time is finite. Attention is finite.",
            "Work fits inside real life, not the other way around.",
        ],
        emphasized: true,
    },
    Principle {
        title: "1. Scope to Essence",
        summary: &["Anything non-essential is removed. Ruthlessly."],
        bullets: &[],
        details: &["Complexity earns its place or dies."],
        emphasized: false,
    },
    Principle {
        title: "2. Build for Failure",
        summary: &["Systems are designed assuming:"],
        bullets: &["Scale", "Misuse", "Operator error", "Real-world mess"],
        details: &["If it can\u{2019}t survive that, it\u{2019}s not done."],
        emphasized: false,
    },
    Principle {
        title: "3. Integrate the Whole Stack",
        summary: &["UI, backend, logic, hardware, permissions."],
        bullets: &[],
        details: &["Nothing ships half-wired."],
        emphasized: false,
    },
    Principle {
        title: "4. Ship Reality",
        summary: &["Code that runs. Hardware that responds."],
        bullets: &[],
        details: &["Docs that describe what actually exists."],
        emphasized: false,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Systems Index
// ─────────────────────────────────────────────────────────────────────────────

pub const SYSTEMS_LEAD: &str = "Live index of systems.";
pub const SYSTEMS_LEAD_ACCENT: &str = "All entries backed by executable code.";
pub const SYSTEMS_WARNING_LABEL: &str = "WARNING:";
pub const SYSTEMS_WARNING: &str =
    "Concurrent system load exceeds recommended safety limits. Hibernate non-essential processes.";

// ─────────────────────────────────────────────────────────────────────────────
// What I Don't Do
// ─────────────────────────────────────────────────────────────────────────────

pub const DONT_DO_LEAD: &str = "This matters more than what I do.";
pub const DONT_DO_INTRO: &str = "I don't:";

pub const DONT_DO: [&str; 5] = [
    "Build pitchware",
    "Simulate credibility",
    "Ship placeholder logic",
    "Run 'exploration' workshops",
    "Design MVPs for investors instead of users",
];

pub const DONT_DO_CLOSING: [&str; 2] = [
    "If you want reassurance, hire a consultant.",
    "If you want a working system, keep reading.",
];

// ─────────────────────────────────────────────────────────────────────────────
// Who This Is For
// ─────────────────────────────────────────────────────────────────────────────

pub const AUDIENCE: [&str; 5] = [
    "Founders who need the thing built, not explained",
    "Teams stuck in planning mode",
    "Installations that cannot fail live",
    "Systems with real consequences",
    "People who value truth over polish",
];

pub const NOT_AUDIENCE_TITLE: &str = "Who This Is Not For";

pub const NOT_AUDIENCE: [&str; 5] = [
    "Vibe-based ideation",
    "Endless discovery phases",
    "Fake momentum",
    "Consensus worship",
    "Anyone allergic to clarity",
];

pub const FILTER_NOTICE: &str =
    "This page is the filter. If it puts you off, it\u{2019}s working.";

// ─────────────────────────────────────────────────────────────────────────────
// Deliverable
// ─────────────────────────────────────────────────────────────────────────────

/// Icon drawn on a deliverable card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Cpu,
    Terminal,
    CheckCircle,
    ArrowRight,
}

pub struct Deliverable {
    pub icon: IconKind,
    pub label: &'static str,
}

pub const DELIVERABLE_INTRO: &str = "You get:";

pub const DELIVERABLES: [Deliverable; 3] = [
    Deliverable {
        icon: IconKind::Cpu,
        label: "A booted, routed, resilient system",
    },
    Deliverable {
        icon: IconKind::Terminal,
        label: "Wired end-to-end",
    },
    Deliverable {
        icon: IconKind::CheckCircle,
        label: "Documentation that matches reality",
    },
];

/// The last line is drawn in the accent color
pub const DELIVERABLE_CLOSING: [&str; 3] =
    ["Not a promise.", "Not a deck.", "A thing that works."];

// ─────────────────────────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────────────────────────

pub const CONTACT_HEADLINE: [&str; 2] = ["Build the thing.", "Kill the lie."];
pub const CONTACT_PITCH: &str =
    "If you\u{2019}re ready to replace explanation with execution, get in touch.";

pub const SUBMIT_LABEL: &str = "BUILD THE THING";
pub const SENDING_LABEL: &str = "TRANSMITTING...";
pub const SENT_HEADLINE: &str = "> TRANSMISSION RECEIVED";
pub const SENT_BODY: &str = "I will analyze the signal.";
pub const RESET_LABEL: &str = "[RESET]";
pub const REQUIRED_FIELD_HINT: &str = "Please fill out this field.";

pub const FOOTER: &str = "EDDIE // SYSTEMS // 2026";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principles_are_numbered_in_order() {
        for (idx, principle) in PRINCIPLES.iter().enumerate() {
            assert!(principle.title.starts_with(&format!("{idx}.")));
        }
        assert_eq!(PRINCIPLES.iter().filter(|p| p.emphasized).count(), 1);
    }

    #[test]
    fn test_only_build_for_failure_has_bullets() {
        let with_bullets: Vec<_> = PRINCIPLES
            .iter()
            .filter(|p| !p.bullets.is_empty())
            .map(|p| p.title)
            .collect();
        assert_eq!(with_bullets, vec!["2. Build for Failure"]);
    }
}
