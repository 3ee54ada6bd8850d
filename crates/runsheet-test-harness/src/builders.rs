use uuid::Uuid;

use runsheet_core::planner::Planner;
use runsheet_core::timeline::{Timeline, TimelineItem, VendorRef};

/// Builder for creating test TimelineItems with sensible defaults.
pub struct TimelineItemBuilder {
    title: String,
    start_time: String,
    duration: String,
    description: String,
    location: String,
    kind: String,
    category: Option<String>,
    category_id: Option<Uuid>,
    vendors: Vec<VendorRef>,
}

impl TimelineItemBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.into(),
            start_time: "09:00".into(),
            duration: "30".into(),
            description: String::new(),
            location: String::new(),
            kind: String::new(),
            category: None,
            category_id: None,
            vendors: Vec::new(),
        }
    }

    pub fn starting_at(mut self, time: &str) -> Self {
        self.start_time = time.into();
        self
    }

    pub fn lasting(mut self, duration: &str) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = description.into();
        self
    }

    pub fn at_location(mut self, location: &str) -> Self {
        self.location = location.into();
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn in_category(mut self, category: &str) -> Self {
        self.category = Some(category.into());
        self.category_id = Some(Uuid::new_v4());
        self
    }

    pub fn with_vendor(mut self, name: &str) -> Self {
        self.vendors.push(VendorRef {
            id: Uuid::new_v4(),
            name: name.into(),
        });
        self
    }

    pub fn build(self) -> TimelineItem {
        let mut item = TimelineItem::new(self.title, self.start_time, self.duration);
        item.description = self.description;
        item.location = self.location;
        item.kind = self.kind;
        item.category = self.category;
        item.category_id = self.category_id;
        item.vendors = self.vendors;
        item
    }
}

/// Build a planner pre-populated with items (bypassing undo history, so
/// tests start with a clean slate).
pub struct PlannerBuilder {
    name: String,
    items: Vec<TimelineItem>,
}

impl PlannerBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: TimelineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> Planner {
        let mut timeline = Timeline::new();
        for item in self.items {
            timeline.add_item(item);
        }
        Planner::from_timeline(&self.name, timeline)
    }
}
