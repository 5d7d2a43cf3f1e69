//! Declarative page content for the presentation deck.
//!
//! Pages are plain data rendered by one generic layout in the GUI; there is
//! no per-page rendering logic. The deck order defines swipe adjacency:
//! swiping left advances to the next entry, swiping right retreats to the
//! previous one.

use once_cell::sync::Lazy;

/// One body section of a page.
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

/// A navigation tile shown on the home page grid.
#[derive(Debug, Clone)]
pub struct Tile {
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

/// A single page of the deck, identified by its route.
#[derive(Debug, Clone)]
pub struct Page {
    /// Opaque route identifier, unique within the deck
    pub route: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: Vec<Section>,
}

/// The built-in deck in presentation order.
pub static DECK: Lazy<Vec<Page>> = Lazy::new(build_deck);

/// Tiles rendered on the home page, one per non-home page of the deck.
pub static TILES: Lazy<Vec<Tile>> = Lazy::new(|| {
    DECK.iter()
        .skip(1)
        .map(|page| Tile {
            title: page.title,
            description: page.subtitle,
            route: page.route,
        })
        .collect()
});

/// Returns the deck's route list in presentation order.
pub fn default_routes() -> Vec<String> {
    DECK.iter().map(|page| page.route.to_string()).collect()
}

/// Looks up the page for a route, if the route belongs to the deck.
pub fn page_for_route(route: &str) -> Option<&'static Page> {
    DECK.iter().find(|page| page.route == route)
}

fn build_deck() -> Vec<Page> {
    vec![
        Page {
            route: "/",
            title: "Tile Navigation",
            subtitle: "A guided walk through the engagement proposal",
            sections: vec![],
        },
        Page {
            route: "/vision",
            title: "Vision",
            subtitle: "Where we want to be in three years",
            sections: vec![
                Section {
                    heading: "North Star",
                    body: "A single accountable delivery organization with \
                           predictable cost, measurable service quality, and \
                           room to invest the savings into modernization.",
                },
                Section {
                    heading: "Guiding Principles",
                    body: "Standardize before optimizing, automate before \
                           scaling, and measure everything that is promised \
                           in the service catalogue.",
                },
            ],
        },
        Page {
            route: "/governance",
            title: "Governance",
            subtitle: "Decision rights and escalation paths",
            sections: vec![
                Section {
                    heading: "Steering Board",
                    body: "Quarterly board with sponsor, CIO, and delivery \
                           lead. Owns scope changes above the agreed \
                           threshold and the joint roadmap.",
                },
                Section {
                    heading: "Operational Cadence",
                    body: "Weekly service review on incidents, SLAs, and \
                           backlog health; monthly financial review against \
                           the charged baseline.",
                },
            ],
        },
        Page {
            route: "/target-operating-model",
            title: "Target Operating Model",
            subtitle: "How the joint organization works",
            sections: vec![
                Section {
                    heading: "Service Lines",
                    body: "Applications, infrastructure, and workplace run \
                           as separate service lines with shared platform \
                           engineering and one intake funnel.",
                },
                Section {
                    heading: "Roles",
                    body: "Retained organization keeps architecture and \
                           vendor management; delivery teams own build and \
                           run end to end.",
                },
            ],
        },
        Page {
            route: "/day-in-life",
            title: "A Day in the Life",
            subtitle: "What changes for the people involved",
            sections: vec![
                Section {
                    heading: "Service Desk",
                    body: "Tickets arrive pre-triaged by category, knowledge \
                           articles are attached automatically, and handovers \
                           between shifts follow one global queue.",
                },
                Section {
                    heading: "Application Teams",
                    body: "Standups are joint between retained and partner \
                           staff; deployment windows are self-service through \
                           the shared release calendar.",
                },
            ],
        },
        Page {
            route: "/it-workflows",
            title: "IT Workflows",
            subtitle: "Intake, triage, and fulfilment flows",
            sections: vec![
                Section {
                    heading: "Unified Intake",
                    body: "All demand enters through one portal, is classified \
                           against the service catalogue, and routed to the \
                           owning service line without manual dispatch.",
                },
                Section {
                    heading: "Automation First",
                    body: "Recurring requests ship with a runbook and an \
                           automation candidate score; anything above the \
                           threshold is queued for scripting.",
                },
            ],
        },
        Page {
            route: "/delivery-locations",
            title: "Delivery Locations",
            subtitle: "Where the work happens",
            sections: vec![
                Section {
                    heading: "Onshore",
                    body: "Client-site presence for architecture, stakeholder \
                           management, and the transition period.",
                },
                Section {
                    heading: "Nearshore and Offshore",
                    body: "Two delivery centers in overlapping time zones \
                           carry steady-state run and development capacity, \
                           with follow-the-sun coverage for P1 incidents.",
                },
            ],
        },
        Page {
            route: "/transition",
            title: "Transition",
            subtitle: "From signature to steady state",
            sections: vec![
                Section {
                    heading: "Knowledge Transfer",
                    body: "Twelve weeks of shadowing and reverse shadowing \
                           per service line, gated by exit criteria reviewed \
                           with the retained leads.",
                },
                Section {
                    heading: "Cutover",
                    body: "Service lines cut over one at a time; each keeps a \
                           two-week hypercare window with doubled staffing \
                           before the baseline applies.",
                },
            ],
        },
        Page {
            route: "/transformation",
            title: "Transformation",
            subtitle: "The roadmap beyond lift and shift",
            sections: vec![
                Section {
                    heading: "Year One",
                    body: "Consolidate tooling, retire duplicate monitoring \
                           stacks, and containerize the top ten applications \
                           by run cost.",
                },
                Section {
                    heading: "Year Two and Beyond",
                    body: "Shift run savings into product teams, introduce \
                           platform SRE, and move the remaining estate to the \
                           target cloud landing zone.",
                },
            ],
        },
        Page {
            route: "/about",
            title: "About",
            subtitle: "Who we are",
            sections: vec![Section {
                heading: "The Team",
                body: "A delivery organization of engineers and service \
                       managers who have run engagements of this shape for \
                       fifteen years across three continents.",
            }],
        },
        Page {
            route: "/services",
            title: "Services",
            subtitle: "What the engagement covers",
            sections: vec![Section {
                heading: "Scope",
                body: "Application management, infrastructure operations, \
                       workplace services, and the transformation program \
                       described in the roadmap.",
            }],
        },
        Page {
            route: "/portfolio",
            title: "Portfolio",
            subtitle: "Comparable engagements",
            sections: vec![Section {
                heading: "References",
                body: "Three reference clients of similar estate size are \
                       available for calls during evaluation; case summaries \
                       follow in the appendix.",
            }],
        },
        Page {
            route: "/contact",
            title: "Contact",
            subtitle: "How to reach the bid team",
            sections: vec![Section {
                heading: "Bid Office",
                body: "The engagement lead and solution architect are \
                       reachable through the bid office for the duration of \
                       the evaluation.",
            }],
        },
        Page {
            route: "/blog",
            title: "Blog",
            subtitle: "Notes from the delivery organization",
            sections: vec![Section {
                heading: "Latest",
                body: "Selected writing on transition patterns, hypercare \
                       staffing, and what actually moves the needle on \
                       ticket deflection.",
            }],
        },
        Page {
            route: "/resources",
            title: "Resources",
            subtitle: "Reference material for the evaluation",
            sections: vec![Section {
                heading: "Appendix",
                body: "Rate card, service catalogue draft, and the full \
                       transition plan are available in the shared data \
                       room.",
            }],
        },
    ]
}
