/// One tile on the generic dashboard overview.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewTile {
    pub title: &'static str,
    pub value: u32,
    pub note: &'static str,
}

/// Placeholder figures; the overview is not wired to any endpoint.
pub const OVERVIEW_TILES: &[OverviewTile] = &[
    OverviewTile {
        title: "Jobs posted",
        value: 3,
        note: "1 draft pending",
    },
    OverviewTile {
        title: "Resumes received",
        value: 113,
        note: "12 today",
    },
    OverviewTile {
        title: "Shortlisted",
        value: 12,
        note: "4 interviews this week",
    },
];
