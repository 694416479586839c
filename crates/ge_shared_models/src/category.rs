use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Item classification used by the Grand Exchange catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Miscellaneous = 0,
    Ammo = 1,
    Arrows = 2,
    Bolts = 3,
    ConstructionMaterials = 4,
    ConstructionProjects = 5,
    CookingIngredients = 6,
    Costumes = 7,
    CraftingMaterials = 8,
    Familiars = 9,
    FarmingProduce = 10,
    FletchingMaterials = 11,
    FoodAndDrink = 12,
    HerbloreMaterials = 13,
    HuntingEquipment = 14,
    HuntingProduce = 15,
    Jewellery = 16,
    MageArmour = 17,
    MageWeapons = 18,
    MeleeArmourLowLevel = 19,
    MeleeArmourMidLevel = 20,
    MeleeArmourHighLevel = 21,
    MeleeWeaponsLowLevel = 22,
    MeleeWeaponsMidLevel = 23,
    MeleeWeaponsHighLevel = 24,
    MiningAndSmithing = 25,
    Potions = 26,
    PrayerArmour = 27,
    PrayerMaterials = 28,
    RangeArmour = 29,
    RangeWeapons = 30,
    Runecrafting = 31,
    RunesSpellsAndTeleports = 32,
    Seeds = 33,
    SummoningScrolls = 34,
    ToolsAndContainers = 35,
    WoodcuttingProduct = 36,
}

static CATEGORIES_BY_NAME: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .map(|category| (category.name(), *category))
        .collect()
});

impl Category {
    /// Every category, indexed by its id.
    pub const ALL: [Category; 37] = [
        Category::Miscellaneous,
        Category::Ammo,
        Category::Arrows,
        Category::Bolts,
        Category::ConstructionMaterials,
        Category::ConstructionProjects,
        Category::CookingIngredients,
        Category::Costumes,
        Category::CraftingMaterials,
        Category::Familiars,
        Category::FarmingProduce,
        Category::FletchingMaterials,
        Category::FoodAndDrink,
        Category::HerbloreMaterials,
        Category::HuntingEquipment,
        Category::HuntingProduce,
        Category::Jewellery,
        Category::MageArmour,
        Category::MageWeapons,
        Category::MeleeArmourLowLevel,
        Category::MeleeArmourMidLevel,
        Category::MeleeArmourHighLevel,
        Category::MeleeWeaponsLowLevel,
        Category::MeleeWeaponsMidLevel,
        Category::MeleeWeaponsHighLevel,
        Category::MiningAndSmithing,
        Category::Potions,
        Category::PrayerArmour,
        Category::PrayerMaterials,
        Category::RangeArmour,
        Category::RangeWeapons,
        Category::Runecrafting,
        Category::RunesSpellsAndTeleports,
        Category::Seeds,
        Category::SummoningScrolls,
        Category::ToolsAndContainers,
        Category::WoodcuttingProduct,
    ];

    pub fn from_id(id: i32) -> Option<Category> {
        usize::try_from(id)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    /// Exact, case-sensitive lookup by catalogue name.
    pub fn from_name(name: &str) -> Option<Category> {
        CATEGORIES_BY_NAME.get(name).copied()
    }

    pub fn id(&self) -> i32 {
        *self as i32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Miscellaneous => "Miscellaneous",
            Category::Ammo => "Ammo",
            Category::Arrows => "Arrows",
            Category::Bolts => "Bolts",
            Category::ConstructionMaterials => "Construction materials",
            Category::ConstructionProjects => "Construction projects",
            Category::CookingIngredients => "Cooking ingredients",
            Category::Costumes => "Costumes",
            Category::CraftingMaterials => "Crafting materials",
            Category::Familiars => "Familiars",
            Category::FarmingProduce => "Farming produce",
            Category::FletchingMaterials => "Fletching materials",
            Category::FoodAndDrink => "Food and drink",
            Category::HerbloreMaterials => "Herblore materials",
            Category::HuntingEquipment => "Hunting equipment",
            Category::HuntingProduce => "Hunting produce",
            Category::Jewellery => "Jewellery",
            Category::MageArmour => "Mage armour",
            Category::MageWeapons => "Mage weapons",
            Category::MeleeArmourLowLevel => "Melee armour - low level",
            Category::MeleeArmourMidLevel => "Melee armour - mid level",
            Category::MeleeArmourHighLevel => "Melee armour - high level",
            Category::MeleeWeaponsLowLevel => "Melee weapons - low level",
            Category::MeleeWeaponsMidLevel => "Melee weapons - mid level",
            Category::MeleeWeaponsHighLevel => "Melee weapons - high level",
            Category::MiningAndSmithing => "Mining and smithing",
            Category::Potions => "Potions",
            Category::PrayerArmour => "Prayer armour",
            Category::PrayerMaterials => "Prayer materials",
            Category::RangeArmour => "Range armour",
            Category::RangeWeapons => "Range weapons",
            Category::Runecrafting => "Runecrafting",
            Category::RunesSpellsAndTeleports => "Runes, Spells and Teleports",
            Category::Seeds => "Seeds",
            Category::SummoningScrolls => "Summoning scrolls",
            Category::ToolsAndContainers => "Tools and containers",
            Category::WoodcuttingProduct => "Woodcutting product",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
