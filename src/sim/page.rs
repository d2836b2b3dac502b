/// One top-level view, shown exclusively of all others.
///
/// The set is closed: navigation requests are parsed against it and
/// unknown ids are rejected by the engine with a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Connect,
    Setup,
    Deploy,
    Dashboard,
}

impl Page {
    /// All registered pages, in tour order.
    pub const ALL: [Page; 5] = [
        Page::Landing,
        Page::Connect,
        Page::Setup,
        Page::Deploy,
        Page::Dashboard,
    ];

    /// Resolve a page id string to a registered page.
    pub fn from_id(id: &str) -> Option<Page> {
        match id {
            "landing" => Some(Page::Landing),
            "connect" => Some(Page::Connect),
            "setup" => Some(Page::Setup),
            "deploy" => Some(Page::Deploy),
            "dashboard" => Some(Page::Dashboard),
            _ => None,
        }
    }

    /// The stable id used by navigation triggers.
    pub fn id(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Connect => "connect",
            Page::Setup => "setup",
            Page::Deploy => "deploy",
            Page::Dashboard => "dashboard",
        }
    }

    /// Human-readable title for the header line.
    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "CLAWDECK",
            Page::Connect => "NODE UPLINK",
            Page::Setup => "AGENT CONFIG",
            Page::Deploy => "ORCHESTRATOR",
            Page::Dashboard => "LIVE DASHBOARD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trips_all_pages() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn test_from_id_rejects_unknown() {
        assert_eq!(Page::from_id("wallet"), None);
        assert_eq!(Page::from_id(""), None);
        assert_eq!(Page::from_id("Dashboard"), None);
    }

    #[test]
    fn test_all_ids_are_distinct() {
        let mut ids: Vec<&str> = Page::ALL.iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Page::ALL.len());
    }
}
