//! Hazard action plan templates

use super::types::{ActionTask, TaskPriority};

/// Static task definition
#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    /// What to do
    pub description: &'static str,
    /// Role responsible
    pub responsible: &'static str,
    /// Duration estimate
    pub duration: &'static str,
    /// Task priority
    pub priority: TaskPriority,
}

impl TaskTemplate {
    /// Owned task
    pub fn to_task(&self) -> ActionTask {
        ActionTask {
            description: self.description.to_string(),
            responsible: self.responsible.to_string(),
            duration: self.duration.to_string(),
            priority: self.priority,
        }
    }
}

const fn task(
    description: &'static str,
    responsible: &'static str,
    duration: &'static str,
    priority: TaskPriority,
) -> TaskTemplate {
    TaskTemplate {
        description,
        responsible,
        duration,
        priority,
    }
}

use TaskPriority::{Critical, High, Low, Medium};

/// Action plan template for one hazard family
#[derive(Debug, Clone, Copy)]
pub struct ActionPlanTemplate {
    /// Lookup key, words separated by `_`
    pub key: &'static str,
    /// Resources to have in place
    pub resources: &'static [&'static str],
    /// 0–24 hours
    pub immediate: &'static [TaskTemplate],
    /// 1–7 days
    pub short_term: &'static [TaskTemplate],
    /// 1–4 weeks
    pub medium_term: &'static [TaskTemplate],
    /// Long-term risk reduction
    pub long_term: &'static [&'static str],
}

impl ActionPlanTemplate {
    /// Key in normalized-name form (`power outage`)
    pub fn normalized_key(&self) -> String {
        self.key.replace('_', " ")
    }
}

/// Built-in templates
pub const ACTION_PLAN_TEMPLATES: &[ActionPlanTemplate] = &[
    ActionPlanTemplate {
        key: "hurricane",
        resources: &[
            "Hurricane shutters or plywood",
            "Standby generator and fuel",
            "Sandbags",
            "Waterproof document storage",
            "Battery-powered radio",
            "Emergency water and food for staff",
        ],
        immediate: &[
            task("Secure windows, doors and outdoor equipment", "Operations Manager", "4 hours", Critical),
            task("Move stock and equipment away from windows and off the floor", "Staff Supervisor", "3 hours", High),
            task("Back up business records and take copies off-site", "Administrator", "2 hours", High),
            task("Confirm staff contact details and shelter arrangements", "Management", "1 hour", Critical),
        ],
        short_term: &[
            task("Inspect premises for structural and water damage", "Owner", "1 day", Critical),
            task("Photograph damage and file insurance claim", "Administrator", "2 days", High),
            task("Arrange temporary repairs and clean-up", "Operations Manager", "3 days", High),
            task("Contact suppliers about delivery schedules", "Purchasing", "1 day", Medium),
        ],
        medium_term: &[
            task("Complete permanent repairs", "Owner", "2-3 weeks", High),
            task("Restore full operations and inform customers", "Management", "1 week", High),
            task("Review hurricane plan performance with staff", "Management", "1 day", Medium),
        ],
        long_term: &[
            "Install permanent hurricane shutters and roof straps",
            "Relocate critical equipment above flood level",
            "Maintain a fuel contract for the standby generator",
            "Review insurance coverage before each hurricane season",
        ],
    },
    ActionPlanTemplate {
        key: "flood",
        resources: &[
            "Sandbags and flood barriers",
            "Submersible water pump",
            "Raised shelving",
            "Waterproof storage containers",
            "Wet/dry vacuum",
        ],
        immediate: &[
            task("Switch off electricity at the main breaker", "Safety Officer", "15 minutes", Critical),
            task("Place sandbags at entrances and drains", "Staff Supervisor", "2 hours", Critical),
            task("Raise stock and equipment off the floor", "Staff", "2 hours", High),
            task("Evacuate staff if water is rising", "Management", "30 minutes", Critical),
        ],
        short_term: &[
            task("Pump out water and remove debris", "Operations Manager", "2 days", High),
            task("Dry and disinfect affected areas", "Cleaning Staff", "3 days", High),
            task("Have electrical systems checked before reconnecting", "Electrician", "1 day", Critical),
        ],
        medium_term: &[
            task("Replace damaged stock and fixtures", "Purchasing", "2 weeks", Medium),
            task("Check for mould and repair walls and floors", "Owner", "3 weeks", Medium),
        ],
        long_term: &[
            "Improve drainage around the premises",
            "Install backflow valves",
            "Keep critical records and stock on raised shelving",
        ],
    },
    ActionPlanTemplate {
        key: "power_outage",
        resources: &[
            "Standby generator",
            "Uninterruptible power supply (UPS)",
            "Fuel reserve",
            "Flashlights and batteries",
            "Manual receipt books",
        ],
        immediate: &[
            task("Start the generator or switch to backup power", "Operations Manager", "15 minutes", Critical),
            task("Shut down sensitive equipment safely", "Staff Supervisor", "30 minutes", High),
            task("Switch to manual sales and record keeping", "Cashier", "15 minutes", High),
            task("Contact the utility company for restoration estimate", "Management", "30 minutes", Medium),
        ],
        short_term: &[
            task("Monitor refrigerated goods and fuel levels", "Staff Supervisor", "Daily", High),
            task("Arrange fuel deliveries for extended outage", "Purchasing", "1 day", High),
            task("Enter manual transactions into the system", "Administrator", "1 day", Medium),
        ],
        medium_term: &[
            task("Service the generator after extended use", "Maintenance", "1 week", Medium),
            task("Review power needs and backup capacity", "Owner", "1 week", Low),
        ],
        long_term: &[
            "Install solar panels with battery storage",
            "Put critical equipment on UPS units",
            "Schedule monthly generator tests",
        ],
    },
    ActionPlanTemplate {
        key: "cyber_attack",
        resources: &[
            "Offline data backups",
            "Antivirus and firewall software",
            "IT support contact",
            "Incident response checklist",
        ],
        immediate: &[
            task("Disconnect affected computers from the network", "IT Support", "30 minutes", Critical),
            task("Change passwords for email, banking and business systems", "Management", "2 hours", Critical),
            task("Notify bank and payment processor", "Owner", "1 hour", High),
            task("Preserve evidence and record what happened", "IT Support", "2 hours", Medium),
        ],
        short_term: &[
            task("Restore systems from clean backups", "IT Support", "2 days", Critical),
            task("Inform affected customers where data was exposed", "Management", "3 days", High),
            task("Report the incident to authorities", "Owner", "1 day", Medium),
        ],
        medium_term: &[
            task("Commission a security review", "IT Support", "2 weeks", Medium),
            task("Train staff on phishing and password safety", "Management", "1 week", Medium),
        ],
        long_term: &[
            "Enable multi-factor authentication on all accounts",
            "Keep automated offline backups",
            "Apply software updates monthly",
        ],
    },
    ActionPlanTemplate {
        key: "fire",
        resources: &[
            "Fire extinguishers",
            "Smoke detectors",
            "Fire blanket",
            "First aid kit",
            "Evacuation map",
        ],
        immediate: &[
            task("Raise the alarm and evacuate everyone", "Safety Officer", "5 minutes", Critical),
            task("Call the fire service", "Management", "5 minutes", Critical),
            task("Account for all staff and visitors at the assembly point", "Safety Officer", "15 minutes", Critical),
        ],
        short_term: &[
            task("Secure the site after the fire service clears it", "Owner", "1 day", High),
            task("Document damage and contact insurer", "Administrator", "2 days", High),
            task("Find temporary premises if needed", "Management", "5 days", High),
        ],
        medium_term: &[
            task("Repair or rebuild damaged areas", "Owner", "4 weeks", High),
            task("Replace equipment and stock", "Purchasing", "3 weeks", Medium),
        ],
        long_term: &[
            "Inspect electrical wiring every year",
            "Service extinguishers and alarms on schedule",
            "Hold fire drills twice a year",
        ],
    },
    ActionPlanTemplate {
        key: "earthquake",
        resources: &[
            "Shelf restraints and anchors",
            "First aid kit",
            "Emergency water and food",
            "Hard hats and work gloves",
        ],
        immediate: &[
            task("Drop, cover and hold on until shaking stops", "All Staff", "Immediate", Critical),
            task("Evacuate to the assembly point and account for everyone", "Safety Officer", "15 minutes", Critical),
            task("Check for gas leaks and switch off utilities", "Maintenance", "30 minutes", Critical),
        ],
        short_term: &[
            task("Have a qualified engineer inspect the building", "Owner", "3 days", Critical),
            task("Clear debris and salvage stock", "Staff Supervisor", "3 days", Medium),
        ],
        medium_term: &[
            task("Carry out structural repairs", "Owner", "4 weeks", High),
        ],
        long_term: &[
            "Anchor shelving and heavy equipment",
            "Retrofit the building to current seismic codes",
        ],
    },
    ActionPlanTemplate {
        key: "pandemic",
        resources: &[
            "Hand sanitiser and cleaning supplies",
            "Face masks",
            "Remote work equipment",
            "Contactless payment terminal",
        ],
        immediate: &[
            task("Apply public health guidance on the premises", "Management", "1 day", Critical),
            task("Set up staff illness reporting and cover rota", "Staff Supervisor", "1 day", High),
        ],
        short_term: &[
            task("Move sales to delivery, pickup or online where possible", "Owner", "1 week", High),
            task("Talk to lenders and landlord about payment relief", "Owner", "1 week", Medium),
        ],
        medium_term: &[
            task("Adjust stock levels to demand", "Purchasing", "2 weeks", Medium),
        ],
        long_term: &[
            "Cross-train staff on critical tasks",
            "Keep a three-month cash reserve",
        ],
    },
    ActionPlanTemplate {
        key: "supply_chain_disruption",
        resources: &[
            "Alternate supplier list",
            "Safety stock of critical items",
            "Storage space for buffer stock",
        ],
        immediate: &[
            task("Identify items at risk of running out", "Purchasing", "4 hours", High),
            task("Contact alternate suppliers", "Purchasing", "1 day", High),
        ],
        short_term: &[
            task("Prioritise scarce stock for key customers", "Management", "3 days", Medium),
            task("Inform customers of shortages and substitutes", "Sales", "2 days", Medium),
        ],
        medium_term: &[
            task("Negotiate backup supply agreements", "Owner", "3 weeks", Medium),
        ],
        long_term: &[
            "Source critical items from more than one supplier",
            "Hold at least two weeks of safety stock",
        ],
    },
];

/// Resources for a hazard with no template
pub const GENERIC_RESOURCES: &[&str] = &[
    "Emergency contact list",
    "First aid kit",
    "Emergency supplies (water, flashlights, batteries)",
    "Copies of important documents",
    "Charged phones and battery radio",
];

/// Immediate actions for a hazard with no template
pub fn generic_immediate_actions(hazard: &str) -> Vec<ActionTask> {
    vec![
        ActionTask {
            description: format!("Assess the impact of the {hazard} on the business"),
            responsible: "Management".to_string(),
            duration: "2 hours".to_string(),
            priority: Critical,
        },
        ActionTask {
            description: "Make sure all staff and customers are safe".to_string(),
            responsible: "Safety Officer".to_string(),
            duration: "1 hour".to_string(),
            priority: Critical,
        },
        ActionTask {
            description: "Notify staff, customers and suppliers of the situation".to_string(),
            responsible: "Communications".to_string(),
            duration: "4 hours".to_string(),
            priority: High,
        },
        ActionTask {
            description: "Document damage and losses for insurance".to_string(),
            responsible: "Management".to_string(),
            duration: "1 day".to_string(),
            priority: Medium,
        },
    ]
}

/// Long-term measures for a hazard with no template
pub fn generic_long_term(hazard: &str) -> Vec<String> {
    vec![
        format!("Review exposure to {hazard} each year"),
        format!("Add {hazard} scenarios to staff training"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_keys_unique() {
        let keys: HashSet<_> = ACTION_PLAN_TEMPLATES.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), ACTION_PLAN_TEMPLATES.len());
    }

    #[test]
    fn test_templates_have_immediate_actions() {
        for template in ACTION_PLAN_TEMPLATES {
            assert!(!template.immediate.is_empty(), "{}", template.key);
            assert!(!template.resources.is_empty(), "{}", template.key);
        }
    }

    #[test]
    fn test_normalized_key() {
        let template = ACTION_PLAN_TEMPLATES
            .iter()
            .find(|t| t.key == "power_outage")
            .unwrap();
        assert_eq!(template.normalized_key(), "power outage");
    }

    #[test]
    fn test_generic_actions() {
        let tasks = generic_immediate_actions("Crime");
        assert_eq!(tasks.len(), 4);
        assert!(tasks[0].description.contains("Crime"));
        let roles: Vec<_> = tasks.iter().map(|t| t.responsible.as_str()).collect();
        assert_eq!(roles, vec!["Management", "Safety Officer", "Communications", "Management"]);
    }
}
