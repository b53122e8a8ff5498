use std::fmt;

/// Taxonomy category assigned to every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Ore,
    Mineral,
    Gas,
    Waste,
    Component,
    Module,
    Weapon,
    Ammo,
    Ship,
}

impl ItemCategory {
    /// Every category the classifier can produce, in declaration order.
    pub const ALL: [ItemCategory; 9] = [
        ItemCategory::Ore,
        ItemCategory::Mineral,
        ItemCategory::Gas,
        ItemCategory::Waste,
        ItemCategory::Component,
        ItemCategory::Module,
        ItemCategory::Weapon,
        ItemCategory::Ammo,
        ItemCategory::Ship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Ore => "ORE",
            ItemCategory::Mineral => "MINERAL",
            ItemCategory::Gas => "GAS",
            ItemCategory::Waste => "WASTE",
            ItemCategory::Component => "COMPONENT",
            ItemCategory::Module => "MODULE",
            ItemCategory::Weapon => "WEAPON",
            ItemCategory::Ammo => "AMMO",
            ItemCategory::Ship => "SHIP",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classification rule: any hint keyword or any id prefix selects `category`.
struct Rule {
    keywords: &'static [&'static str],
    prefixes: &'static [&'static str],
    category: ItemCategory,
}

// First match wins. Keep this order: a hint carrying both "MOD" and "WEP"
// resolves to MODULE.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["ORE"],
        prefixes: &["ORE_"],
        category: ItemCategory::Ore,
    },
    Rule {
        keywords: &["MAT"],
        prefixes: &["MAT_"],
        category: ItemCategory::Mineral,
    },
    Rule {
        keywords: &["GAS"],
        prefixes: &["GAS_"],
        category: ItemCategory::Gas,
    },
    Rule {
        keywords: &["WASTE"],
        prefixes: &["WASTE_"],
        category: ItemCategory::Waste,
    },
    Rule {
        keywords: &["COMP"],
        prefixes: &["COMP_"],
        category: ItemCategory::Component,
    },
    Rule {
        keywords: &["MOD", "MODULE"],
        prefixes: &["MOD_"],
        category: ItemCategory::Module,
    },
    Rule {
        keywords: &["WEP", "WEAPON"],
        prefixes: &["WEP_"],
        category: ItemCategory::Weapon,
    },
    Rule {
        keywords: &["AMMO"],
        prefixes: &["AMMO_"],
        category: ItemCategory::Ammo,
    },
    Rule {
        keywords: &["SHIP"],
        prefixes: &["SHIP_"],
        category: ItemCategory::Ship,
    },
    Rule {
        keywords: &[],
        prefixes: &["SCAN_", "MINE_", "STAB_"],
        category: ItemCategory::Module,
    },
];

/// Infer a category from a free-text hint (case-insensitive, may be empty)
/// and the item id (prefix match, case-sensitive). Falls back to COMPONENT.
pub fn classify(hint: &str, item_id: &str) -> ItemCategory {
    let hint = hint.trim().to_uppercase();
    RULES
        .iter()
        .find(|rule| {
            rule.keywords.iter().any(|kw| hint.contains(kw))
                || rule.prefixes.iter().any(|p| item_id.starts_with(p))
        })
        .map(|rule| rule.category)
        .unwrap_or(ItemCategory::Component)
}
