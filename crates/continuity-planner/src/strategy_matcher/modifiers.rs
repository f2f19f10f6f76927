//! Business-type additions to action plans

use super::templates::TaskTemplate;
use super::types::{BusinessType, TaskPriority};

/// Extra resources and immediate actions for one business type
#[derive(Debug, Clone, Copy)]
pub struct BusinessModifier {
    /// Business type the modifier applies to
    pub business_type: BusinessType,
    /// Appended to `resources_needed`
    pub extra_resources: &'static [&'static str],
    /// Appended to the immediate actions
    pub extra_immediate: &'static [TaskTemplate],
}

/// Built-in modifiers; `General` has none
pub const BUSINESS_MODIFIERS: &[BusinessModifier] = &[
    BusinessModifier {
        business_type: BusinessType::Tourism,
        extra_resources: &[
            "Guest emergency information cards",
            "Guest transport for evacuation",
            "Agreements with alternative accommodation",
        ],
        extra_immediate: &[TaskTemplate {
            description: "Account for all guests and brief them on safety arrangements",
            responsible: "Front Desk Manager",
            duration: "1 hour",
            priority: TaskPriority::Critical,
        }],
    },
    BusinessModifier {
        business_type: BusinessType::Retail,
        extra_resources: &["Stock protection covers", "Manual receipt books"],
        extra_immediate: &[TaskTemplate {
            description: "Secure cash, stock and the point-of-sale system",
            responsible: "Store Manager",
            duration: "1 hour",
            priority: TaskPriority::High,
        }],
    },
    BusinessModifier {
        business_type: BusinessType::FoodService,
        extra_resources: &[
            "Food thermometers",
            "Backup refrigeration or ice supply",
            "Food safety log",
        ],
        extra_immediate: &[TaskTemplate {
            description: "Check cold storage temperatures and discard unsafe food",
            responsible: "Head Chef",
            duration: "2 hours",
            priority: TaskPriority::High,
        }],
    },
    BusinessModifier {
        business_type: BusinessType::Manufacturing,
        extra_resources: &["Equipment shutdown checklist", "Critical spare parts"],
        extra_immediate: &[TaskTemplate {
            description: "Shut down production lines in a safe sequence",
            responsible: "Plant Manager",
            duration: "1 hour",
            priority: TaskPriority::Critical,
        }],
    },
    BusinessModifier {
        business_type: BusinessType::Technology,
        extra_resources: &["Cloud backup access", "Laptops for remote work"],
        extra_immediate: &[TaskTemplate {
            description: "Confirm client systems and backups are reachable",
            responsible: "IT Lead",
            duration: "2 hours",
            priority: TaskPriority::High,
        }],
    },
];

/// Modifier for a business type
pub fn modifier_for(
    modifiers: &[BusinessModifier],
    business_type: BusinessType,
) -> Option<&BusinessModifier> {
    modifiers
        .iter()
        .find(|modifier| modifier.business_type == business_type)
}
