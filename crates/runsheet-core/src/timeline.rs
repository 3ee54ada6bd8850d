use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::clock;
use crate::error::{CoreError, Result};

/// A vendor assigned to a timeline item (photographer, caterer, band...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorRef {
    pub id: Uuid,
    pub name: String,
}

/// A single scheduled entry on the day-of timeline.
///
/// Times are stored as `"HH:MM"` strings and the duration as a free-form
/// string (`"90"`, `"1h 30m"`), matching what users type. The consistency
/// invariant `end_time == start_time + duration` (mod 24h) is maintained by
/// every time-shifting mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineItem {
    pub id: Uuid,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Item kind (ceremony, reception, photo session...).
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub vendors: Vec<VendorRef>,
}

impl TimelineItem {
    pub fn new(
        title: impl Into<String>,
        start_time: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        let start_time = start_time.into();
        let duration = duration.into();
        let end_time = clock::end_of(&start_time, &duration);
        Self {
            id: Uuid::new_v4(),
            start_time,
            end_time,
            duration,
            title: title.into(),
            description: String::new(),
            location: String::new(),
            kind: String::new(),
            category: None,
            category_id: None,
            vendors: Vec::new(),
        }
    }

    pub fn start_minutes(&self) -> i32 {
        clock::parse_time_to_minutes(&self.start_time)
    }

    pub fn duration_minutes(&self) -> i32 {
        clock::parse_duration_to_minutes(&self.duration)
    }

    /// Recompute `end_time` from the item's own start and duration.
    pub fn recompute_end(&mut self) {
        self.end_time = clock::end_of(&self.start_time, &self.duration);
    }

    /// Shift the start by a signed number of minutes, keeping the end
    /// consistent with the item's duration.
    pub fn shift(&mut self, minutes: i32) {
        self.start_time = clock::shift_time(&self.start_time, minutes);
        self.recompute_end();
    }

    pub fn set_start(&mut self, start_minutes: i32) {
        self.start_time = clock::format_minutes_to_time(start_minutes);
        self.recompute_end();
    }
}

/// A partial update for a timeline item. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub category_id: Option<Uuid>,
    pub vendors: Option<Vec<VendorRef>>,
}

impl ItemPatch {
    /// Merge present fields into `item`. When the start or duration change
    /// without an explicit end time, the end is recomputed to keep the
    /// time-consistency invariant.
    pub fn apply(&self, item: &mut TimelineItem) {
        let timing_changed = self.start_time.is_some() || self.duration.is_some();
        if let Some(start) = &self.start_time {
            item.start_time = start.clone();
        }
        if let Some(duration) = &self.duration {
            item.duration = duration.clone();
        }
        if let Some(end) = &self.end_time {
            item.end_time = end.clone();
        } else if timing_changed {
            item.recompute_end();
        }
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(location) = &self.location {
            item.location = location.clone();
        }
        if let Some(kind) = &self.kind {
            item.kind = kind.clone();
        }
        if let Some(category) = &self.category {
            item.category = Some(category.clone());
        }
        if let Some(category_id) = self.category_id {
            item.category_id = Some(category_id);
        }
        if let Some(vendors) = &self.vendors {
            item.vendors = vendors.clone();
        }
    }
}

/// Header record for the event: who, when, where.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WeddingInfo {
    pub names: String,
    /// ISO date (`"2026-06-20"`). Only overwritten by syntactically valid
    /// candidates; invalid input is ignored and the prior value retained.
    pub date: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
}

/// Partial update for the event header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeddingInfoPatch {
    pub names: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub location: Option<String>,
    pub custom_fields: Option<BTreeMap<String, String>>,
}

/// The ordered item list plus the event header.
///
/// Insertion order is display order unless `sort_items` is called
/// explicitly. Overlapping times are permitted: separate vendor tracks run
/// concurrently.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Timeline {
    pub items: Vec<TimelineItem>,
    pub wedding_info: WeddingInfo,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: Uuid) -> Option<&TimelineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut TimelineItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn ordered_ids(&self) -> Vec<Uuid> {
        self.items.iter().map(|i| i.id).collect()
    }

    /// Ids of all items whose category equals `name`.
    pub fn ids_in_category(&self, name: &str) -> Vec<Uuid> {
        self.items
            .iter()
            .filter(|i| i.category.as_deref() == Some(name))
            .map(|i| i.id)
            .collect()
    }

    /// Append an item to the end of the list.
    pub fn add_item(&mut self, item: TimelineItem) {
        self.items.push(item);
    }

    /// Merge a patch into the item with the given id. Returns `false`
    /// (and leaves the list untouched) when the id is unknown, tolerating
    /// stale references during async races.
    pub fn update_item(&mut self, id: Uuid, patch: &ItemPatch) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                patch.apply(item);
                true
            }
            None => {
                debug!(%id, "update for unknown item ignored");
                false
            }
        }
    }

    /// Remove the item with the given id. No-op when absent.
    pub fn delete_item(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            debug!(%id, "delete for unknown item ignored");
            false
        } else {
            true
        }
    }

    /// Remove the item at `drag_index` and reinsert it at `hover_index`,
    /// preserving the relative order of everything else.
    pub fn move_item(&mut self, drag_index: usize, hover_index: usize) -> Result<()> {
        let len = self.items.len();
        if drag_index >= len {
            return Err(CoreError::ItemIndexOutOfBounds {
                index: drag_index,
                len,
            });
        }
        if hover_index >= len {
            return Err(CoreError::ItemIndexOutOfBounds {
                index: hover_index,
                len,
            });
        }
        let item = self.items.remove(drag_index);
        self.items.insert(hover_index, item);
        Ok(())
    }

    /// Stably sort items ascending by start time.
    ///
    /// Sorts by parsed minute value rather than the raw string, which is
    /// observably identical for well-formed zero-padded times but robust
    /// against sloppy input like `"9:00"`.
    pub fn sort_items(&mut self) {
        self.items.sort_by_key(|i| i.start_minutes());
    }

    /// Shift every item in `ids` by `minutes`, recomputing each end time
    /// from the item's own duration.
    pub fn shift_items(&mut self, ids: &BTreeSet<Uuid>, minutes: i32) {
        for item in self.items.iter_mut().filter(|i| ids.contains(&i.id)) {
            item.shift(minutes);
        }
    }

    /// Remove every item in `ids`.
    pub fn remove_items(&mut self, ids: &BTreeSet<Uuid>) {
        self.items.retain(|i| !ids.contains(&i.id));
    }

    /// Merge a patch into the event header. A `date` candidate that does
    /// not parse as an ISO date is dropped with a warning and the prior
    /// value kept.
    pub fn update_wedding_info(&mut self, patch: &WeddingInfoPatch) {
        if let Some(names) = &patch.names {
            self.wedding_info.names = names.clone();
        }
        if let Some(date) = &patch.date {
            if date.parse::<NaiveDate>().is_ok() {
                self.wedding_info.date = date.clone();
            } else {
                warn!(input = %date, "invalid event date ignored, keeping prior value");
            }
        }
        if let Some(kind) = &patch.kind {
            self.wedding_info.kind = Some(kind.clone());
        }
        if let Some(location) = &patch.location {
            self.wedding_info.location = Some(location.clone());
        }
        if let Some(fields) = &patch.custom_fields {
            self.wedding_info.custom_fields.extend(
                fields.iter().map(|(k, v)| (k.clone(), v.clone())),
            );
        }
    }
}
