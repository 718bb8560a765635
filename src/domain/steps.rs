//! Static step catalog for the application wizard.
//!
//! The wizard always has exactly eight steps: an initialization step, six
//! entity-creation steps, and a terminal summary step. The step id space is
//! closed; new steps are not added at runtime.

/// Identifier of a wizard step, in fixed ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepId {
    Init = 1,
    Companies = 2,
    Contacts = 3,
    Documents = 4,
    Products = 5,
    Events = 6,
    Actions = 7,
    Summary = 8,
}

/// Category of entity created during one of the six creation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Company,
    Contact,
    Document,
    Product,
    Event,
    Action,
}

impl EntityKind {
    /// All six categories, in step order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Company,
        EntityKind::Contact,
        EntityKind::Document,
        EntityKind::Product,
        EntityKind::Event,
        EntityKind::Action,
    ];
}

impl StepId {
    pub const FIRST: StepId = StepId::Init;
    pub const LAST: StepId = StepId::Summary;

    /// Resolves a one-based step index into a step id.
    pub fn from_index(index: u8) -> Option<StepId> {
        match index {
            1 => Some(StepId::Init),
            2 => Some(StepId::Companies),
            3 => Some(StepId::Contacts),
            4 => Some(StepId::Documents),
            5 => Some(StepId::Products),
            6 => Some(StepId::Events),
            7 => Some(StepId::Actions),
            8 => Some(StepId::Summary),
            _ => None,
        }
    }

    /// One-based index of the step, as persisted and displayed.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The following step, if any. The summary step has no next.
    pub fn next(self) -> Option<StepId> {
        StepId::from_index(self.index() + 1)
    }

    /// The preceding step, if any. The init step has no previous.
    pub fn previous(self) -> Option<StepId> {
        self.index().checked_sub(1).and_then(StepId::from_index)
    }

    /// The entity category created on this step. The init and summary steps
    /// create no list entities of their own.
    pub fn entity_kind(self) -> Option<EntityKind> {
        match self {
            StepId::Init | StepId::Summary => None,
            StepId::Companies => Some(EntityKind::Company),
            StepId::Contacts => Some(EntityKind::Contact),
            StepId::Documents => Some(EntityKind::Document),
            StepId::Products => Some(EntityKind::Product),
            StepId::Events => Some(EntityKind::Event),
            StepId::Actions => Some(EntityKind::Action),
        }
    }
}

/// Static description of a wizard step. Pure data, no behavior.
#[derive(Debug, Clone, Copy)]
pub struct StepDescriptor {
    pub id: StepId,
    pub name: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// The eight wizard steps in fixed ascending id order.
pub const WIZARD_STEPS: [StepDescriptor; 8] = [
    StepDescriptor {
        id: StepId::Init,
        name: "init",
        title: "Initialization",
        icon: "◆",
        description: "Opportunity and application",
    },
    StepDescriptor {
        id: StepId::Companies,
        name: "companies",
        title: "Companies",
        icon: "■",
        description: "Company concerned",
    },
    StepDescriptor {
        id: StepId::Contacts,
        name: "contacts",
        title: "Contacts",
        icon: "●",
        description: "Primary contacts",
    },
    StepDescriptor {
        id: StepId::Documents,
        name: "documents",
        title: "Documents",
        icon: "▤",
        description: "Linked files",
    },
    StepDescriptor {
        id: StepId::Products,
        name: "products",
        title: "Products",
        icon: "▲",
        description: "Products concerned",
    },
    StepDescriptor {
        id: StepId::Events,
        name: "scheduled_events",
        title: "Scheduled events",
        icon: "◷",
        description: "Associated events",
    },
    StepDescriptor {
        id: StepId::Actions,
        name: "actions",
        title: "Actions",
        icon: "✔",
        description: "Actions to carry out",
    },
    StepDescriptor {
        id: StepId::Summary,
        name: "summary",
        title: "Summary",
        icon: "≡",
        description: "Review and confirm",
    },
];

/// Looks up the descriptor for a step id.
pub fn step_by_id(id: StepId) -> &'static StepDescriptor {
    &WIZARD_STEPS[(id.index() - 1) as usize]
}

/// Looks up the descriptor for a raw one-based index, if it names a step.
pub fn step_by_index(index: u8) -> Option<&'static StepDescriptor> {
    StepId::from_index(index).map(step_by_id)
}
