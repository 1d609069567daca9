use serde::{Deserialize, Serialize};

use crate::PartCategory;

/// The in-progress choice of parts: one optional part id per category
///
/// Ids are never checked against the catalog here; a slot may name a part
/// that is still loading or no longer exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub cpu_id: Option<String>,
    #[serde(default)]
    pub motherboard_id: Option<String>,
    #[serde(default)]
    pub ram_id: Option<String>,
    #[serde(default)]
    pub gpu_id: Option<String>,
    #[serde(default)]
    pub storage_id: Option<String>,
    #[serde(default)]
    pub psu_id: Option<String>,
    #[serde(default)]
    pub case_id: Option<String>,
}

impl Selection {
    /// Create a selection with every slot unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`
    pub fn with(mut self, category: PartCategory, id: impl Into<String>) -> Self {
        self.set(category, Some(id.into()));
        self
    }

    /// Overwrite exactly one slot
    pub fn set(&mut self, category: PartCategory, id: Option<String>) {
        *self.slot_mut(category) = id;
    }

    /// Unset one slot
    pub fn clear(&mut self, category: PartCategory) {
        self.set(category, None);
    }

    /// Current value of a slot
    pub fn get(&self, category: PartCategory) -> Option<&str> {
        let slot = match category {
            PartCategory::Cpu => &self.cpu_id,
            PartCategory::Motherboard => &self.motherboard_id,
            PartCategory::Ram => &self.ram_id,
            PartCategory::Gpu => &self.gpu_id,
            PartCategory::Storage => &self.storage_id,
            PartCategory::Psu => &self.psu_id,
            PartCategory::Case => &self.case_id,
        };
        slot.as_deref()
    }

    /// True when no slot is set
    pub fn is_empty(&self) -> bool {
        PartCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }

    /// A build may be saved as soon as any single slot is set
    pub fn can_save(&self) -> bool {
        !self.is_empty()
    }

    /// Replace every slot at once. Slots unset in `values` end up unset here,
    /// whatever they held before.
    pub fn replace_all(&mut self, values: Selection) {
        *self = values;
    }

    /// Slots in display order
    pub fn iter(&self) -> impl Iterator<Item = (PartCategory, Option<&str>)> + '_ {
        PartCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    fn slot_mut(&mut self, category: PartCategory) -> &mut Option<String> {
        match category {
            PartCategory::Cpu => &mut self.cpu_id,
            PartCategory::Motherboard => &mut self.motherboard_id,
            PartCategory::Ram => &mut self.ram_id,
            PartCategory::Gpu => &mut self.gpu_id,
            PartCategory::Storage => &mut self.storage_id,
            PartCategory::Psu => &mut self.psu_id,
            PartCategory::Case => &mut self.case_id,
        }
    }
}

impl FromIterator<(PartCategory, String)> for Selection {
    fn from_iter<I: IntoIterator<Item = (PartCategory, String)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (category, id) in iter {
            selection.set(category, Some(id));
        }
        selection
    }
}
